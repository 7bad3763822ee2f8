/// Handle to a transient image buffer owned by the arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

/// Arena of image byte buffers with explicit release.
///
/// Buffers stand in for browser object URLs: acquired when a geotagged
/// photo is ingested, held for the lifetime of the session, and released
/// when the overlay store is cleared. A released id stays dead; slots are
/// never reused, so stale handles cannot alias a later image.
#[derive(Debug, Default)]
pub struct ImageArena {
    entries: Vec<Option<Vec<u8>>>,
}

impl ImageArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&mut self, bytes: Vec<u8>) -> ImageId {
        let id = ImageId(self.entries.len() as u32);
        self.entries.push(Some(bytes));
        id
    }

    pub fn get(&self, id: ImageId) -> Option<&[u8]> {
        self.entries.get(id.0 as usize).and_then(|e| e.as_deref())
    }

    pub fn release(&mut self, id: ImageId) {
        if let Some(slot) = self.entries.get_mut(id.0 as usize) {
            *slot = None;
        }
    }

    pub fn release_all(&mut self) {
        for slot in &mut self.entries {
            *slot = None;
        }
    }

    pub fn live_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }
}
