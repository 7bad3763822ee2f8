use std::env;
use std::fs;
use std::path::Path;

use formats::geojson::world_to_geojson_string_pretty;
use formats::ingest::{
    BatchReport, UploadFile, ingest_boundary_batch, ingest_photo_batch, ingest_track_batch,
};
use layers::basemap::BasemapSource;
use scene::world::OverlayWorld;

fn main() {
    env_logger::init();
    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "load" => cmd_load(args),
        "export" => cmd_export(args),
        _ => Err(usage()),
    }
}

#[derive(Default)]
struct Uploads {
    boundaries: Vec<UploadFile>,
    tracks: Vec<UploadFile>,
    photos: Vec<UploadFile>,
}

fn cmd_load(args: Vec<String>) -> Result<(), String> {
    let mut uploads = Uploads::default();
    let mut satellite = false;
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--boundary" | "--track" | "--photo" => {
                let flag = args[i].clone();
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| format!("{flag} requires a file path"))?;
                let upload = read_upload(path)?;
                match flag.as_str() {
                    "--boundary" => uploads.boundaries.push(upload),
                    "--track" => uploads.tracks.push(upload),
                    _ => uploads.photos.push(upload),
                }
            }
            "--satellite" => satellite = true,
            "--json" => json = true,
            s => return Err(format!("unknown arg: {s}\n\n{}", usage())),
        }
        i += 1;
    }

    let mut world = OverlayWorld::new();
    let reports = run_batches(&mut world, &uploads);

    if json {
        print_reports_json(&reports)?;
    } else {
        print_reports(&reports);
    }

    println!("boundaries: {} collections", world.boundaries().len());
    println!("tracks: {} collections", world.tracks().len());
    println!("photos: {} markers", world.markers().len());

    let center = world.viewport().center;
    println!("center: {:.4}, {:.4}", center.lat_deg, center.lon_deg);

    let mut basemap = BasemapSource::default();
    if satellite {
        basemap = basemap.toggled();
    }
    println!(
        "basemap: {} {} ({})",
        basemap.label(),
        basemap.url_template(),
        basemap.attribution()
    );
    Ok(())
}

fn cmd_export(args: Vec<String>) -> Result<(), String> {
    let mut uploads = Uploads::default();
    let mut out_path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--boundary" | "--track" | "--photo" => {
                let flag = args[i].clone();
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| format!("{flag} requires a file path"))?;
                let upload = read_upload(path)?;
                match flag.as_str() {
                    "--boundary" => uploads.boundaries.push(upload),
                    "--track" => uploads.tracks.push(upload),
                    _ => uploads.photos.push(upload),
                }
            }
            s if s.starts_with('-') => {
                return Err(format!("unknown arg: {s}\n\n{}", usage()));
            }
            s if out_path.is_none() => out_path = Some(s.to_string()),
            s => return Err(format!("unexpected arg: {s}\n\n{}", usage())),
        }
        i += 1;
    }

    let out_path = out_path.ok_or("export requires an output path".to_string())?;

    let mut world = OverlayWorld::new();
    let reports = run_batches(&mut world, &uploads);
    print_reports(&reports);

    let payload =
        world_to_geojson_string_pretty(&world).map_err(|e| format!("serialize: {e}"))?;
    fs::write(&out_path, payload).map_err(|e| format!("write {out_path}: {e}"))?;
    println!("wrote {out_path}");
    Ok(())
}

fn run_batches(world: &mut OverlayWorld, uploads: &Uploads) -> Vec<(&'static str, BatchReport)> {
    let mut reports = Vec::new();
    if !uploads.boundaries.is_empty() {
        reports.push(("boundaries", ingest_boundary_batch(world, &uploads.boundaries)));
    }
    if !uploads.tracks.is_empty() {
        reports.push(("tracks", ingest_track_batch(world, &uploads.tracks)));
    }
    if !uploads.photos.is_empty() {
        reports.push(("photos", ingest_photo_batch(world, &uploads.photos)));
    }
    reports
}

fn print_reports(reports: &[(&'static str, BatchReport)]) {
    for (label, report) in reports {
        println!("{label}:");
        for file in &report.files {
            println!("  {}: {}", file.name, file.outcome);
        }
        if let Some(notice) = &report.notice {
            println!("notice: {notice}");
        }
    }
}

fn print_reports_json(reports: &[(&'static str, BatchReport)]) -> Result<(), String> {
    let mut root = serde_json::Map::new();
    for (label, report) in reports {
        let value = serde_json::to_value(report).map_err(|e| format!("serialize: {e}"))?;
        root.insert((*label).to_string(), value);
    }
    let text = serde_json::to_string_pretty(&serde_json::Value::Object(root))
        .map_err(|e| format!("serialize: {e}"))?;
    println!("{text}");
    Ok(())
}

fn read_upload(path_str: &str) -> Result<UploadFile, String> {
    let path = Path::new(path_str);
    let bytes = fs::read(path).map_err(|e| format!("read {path_str}: {e}"))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path_str.to_string());
    Ok(UploadFile::new(name, bytes))
}

fn usage() -> String {
    [
        "usage: overmap <command> [args]",
        "",
        "commands:",
        "  load   [--boundary FILE]... [--track FILE]... [--photo FILE]... [--satellite] [--json]",
        "  export <out.json> [--boundary FILE]... [--track FILE]... [--photo FILE]...",
    ]
    .join("\n")
}
