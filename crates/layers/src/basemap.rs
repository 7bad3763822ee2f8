use crate::layer::{Layer, LayerId, LayerKind};

/// The two hardcoded tile endpoints the view toggle switches between.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum BasemapSource {
    #[default]
    Streets,
    Satellite,
}

impl BasemapSource {
    pub fn url_template(&self) -> &'static str {
        match self {
            BasemapSource::Streets => "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
            BasemapSource::Satellite => {
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
            }
        }
    }

    pub fn attribution(&self) -> &'static str {
        match self {
            BasemapSource::Streets => "© OpenStreetMap contributors",
            BasemapSource::Satellite => {
                "Tiles © Esri, Maxar, Earthstar Geographics, and the GIS User Community"
            }
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            BasemapSource::Streets => BasemapSource::Satellite,
            BasemapSource::Satellite => BasemapSource::Streets,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BasemapSource::Streets => "streets",
            BasemapSource::Satellite => "satellite",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BasemapLayer {
    id: LayerId,
    pub source: BasemapSource,
}

impl BasemapLayer {
    pub fn new(id: u64) -> Self {
        Self {
            id: LayerId(id),
            source: BasemapSource::default(),
        }
    }

    pub fn toggle(&mut self) {
        self.source = self.source.toggled();
    }
}

impl Layer for BasemapLayer {
    fn id(&self) -> LayerId {
        self.id
    }

    fn kind(&self) -> LayerKind {
        LayerKind::Basemap
    }
}
