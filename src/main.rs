//! Cuboid Annotator: Session-Replay.
//!
//! Spielt eine aufgezeichnete Eingabe-Session headless durch den Controller
//! und gibt die resultierende Quader-Liste als JSON aus.
//!
//! Aufruf: `cuboid-annotator <session.json> [options.toml]`

use anyhow::Context;
use cuboid_annotator::{
    cuboids_to_json, AppController, AppIntent, Cuboid, DrawRecorder, EditorOptions, ImageInfo,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Aufgezeichnete Session
#[derive(Debug, Deserialize)]
struct Session {
    /// Bildgröße; ohne Bild werden alle Eingaben ignoriert
    image: Option<SessionImage>,
    #[serde(default)]
    source_id: String,
    #[serde(default)]
    cuboids: Vec<Cuboid>,
    #[serde(default)]
    events: Vec<AppIntent>,
}

#[derive(Debug, Deserialize)]
struct SessionImage {
    width: u32,
    height: u32,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Cuboid Annotator v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let session_path = args
        .next()
        .map(PathBuf::from)
        .context("Aufruf: cuboid-annotator <session.json> [options.toml]")?;
    let options_path = args.next().map(PathBuf::from).unwrap_or_else(EditorOptions::config_path);

    let options = EditorOptions::load_from_file(&options_path);
    let session = load_session(&session_path)?;

    let cuboids = replay(session, options);
    println!("{}", cuboids_to_json(&cuboids)?);
    Ok(())
}

fn load_session(path: &Path) -> anyhow::Result<Session> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Session-Datei nicht lesbar: {}", path.display()))?;
    let session = serde_json::from_str(&content)
        .with_context(|| format!("Session-Datei fehlerhaft: {}", path.display()))?;
    Ok(session)
}

fn replay(session: Session, options: EditorOptions) -> Vec<Cuboid> {
    let mut controller = AppController::with_options(DrawRecorder::new(), options);
    controller.set_source_id(session.source_id);
    controller.set_image(session.image.map(|img| ImageInfo {
        width: img.width,
        height: img.height,
    }));
    controller.set_cuboid_list(session.cuboids);

    let total = session.events.len();
    let mut handled = 0usize;
    for intent in session.events {
        if controller.handle_intent(intent) {
            handled += 1;
        }
        for event in controller.drain_events() {
            log::debug!("Host-Event: {:?}", event);
        }
        controller.renderer_mut().take_calls();
    }
    log::info!("{} von {} Events verarbeitet", handled, total);

    controller.cuboid_list()
}
