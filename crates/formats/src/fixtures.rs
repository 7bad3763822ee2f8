//! In-memory file fixtures for tests: zip containers and minimal TIFF
//! buffers carrying (or lacking) an EXIF GPS block.

use std::io::Write;

use zip::write::SimpleFileOptions;

pub(crate) fn zip_with(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("start entry");
        writer.write_all(content.as_bytes()).expect("write entry");
    }
    writer.finish().expect("finish archive").into_inner()
}

/// Little-endian TIFF whose IFD0 links a GPS IFD with latitude/longitude
/// DMS rationals and hemisphere refs. Offsets are fixed by construction:
/// IFD0 at 8, GPS IFD at 26, rational data at 80 and 104.
pub(crate) fn gps_tiff(
    lat_ref: u8,
    lat_dms: [(u32, u32); 3],
    lon_ref: u8,
    lon_dms: [(u32, u32); 3],
) -> Vec<u8> {
    let mut buf = tiff_header(8);

    // IFD0: one entry pointing at the GPS IFD.
    put_u16(&mut buf, 1);
    put_entry(&mut buf, 0x8825, 4, 1, &26u32.to_le_bytes());
    put_u32(&mut buf, 0);

    // GPS IFD: ref + value for each axis.
    put_u16(&mut buf, 4);
    put_entry(&mut buf, 0x0001, 2, 2, &[lat_ref, 0, 0, 0]);
    put_entry(&mut buf, 0x0002, 5, 3, &80u32.to_le_bytes());
    put_entry(&mut buf, 0x0003, 2, 2, &[lon_ref, 0, 0, 0]);
    put_entry(&mut buf, 0x0004, 5, 3, &104u32.to_le_bytes());
    put_u32(&mut buf, 0);

    for (num, den) in lat_dms {
        put_u32(&mut buf, num);
        put_u32(&mut buf, den);
    }
    for (num, den) in lon_dms {
        put_u32(&mut buf, num);
        put_u32(&mut buf, den);
    }

    buf
}

/// Valid TIFF with a single non-GPS entry (image width).
pub(crate) fn plain_tiff() -> Vec<u8> {
    let mut buf = tiff_header(8);
    put_u16(&mut buf, 1);
    put_entry(&mut buf, 0x0100, 4, 1, &1u32.to_le_bytes());
    put_u32(&mut buf, 0);
    buf
}

fn tiff_header(ifd0_offset: u32) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"II");
    put_u16(&mut buf, 42);
    put_u32(&mut buf, ifd0_offset);
    buf
}

fn put_entry(buf: &mut Vec<u8>, tag: u16, field_type: u16, count: u32, value: &[u8; 4]) {
    put_u16(buf, tag);
    put_u16(buf, field_type);
    put_u32(buf, count);
    buf.extend_from_slice(value);
}

fn put_u16(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn put_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}
