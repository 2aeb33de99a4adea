//! Folio - headless entry point.
//!
//! Loads the configuration, lays out the floating elements on an in-memory
//! stage and plays the page's interactions against it: a drag across the
//! viewport, a window resize, the typewriter tagline, a stats counter, the
//! background particles and the project modal.

use std::sync::Arc;

use folio_core::{
    config_path, load_config, ConfigError, ElementId, FolioConfig, Point, PointerEvent,
    ProjectCatalog, ProjectId, Size,
};
use folio_runtime::Animation;
use folio_ui::model::{
    CounterAnimation, DragController, ParticlePool, Phase, ProjectModal, Typewriter,
};
use folio_ui::{MemoryStage, Surface};
use parking_lot::Mutex;

/// Element that displays the typewriter tagline.
const TYPED_TEXT: &str = "typed-text";

// =============================================================================
// Configuration
// =============================================================================

/// Load config.toml from the platform config directory.
fn load() -> Result<FolioConfig, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    load_config(&path)
}

// =============================================================================
// Scenes
// =============================================================================

/// Drag the first floating element around, then shrink the window.
fn play_drag(stage: &Mutex<MemoryStage>, config: &FolioConfig) -> Result<(), String> {
    let mut controller = DragController::new(config.drag.clone());
    for spec in &config.stage.floating {
        controller.register(spec.id.as_str());
    }

    let Some(id) = controller.elements().first().map(|e| e.id.clone()) else {
        tracing::info!("No floating elements configured");
        return Ok(());
    };

    let mut stage = stage.lock();
    let rect = stage
        .bounding_box(&id)
        .ok_or_else(|| format!("Floating element '{}' is not on the stage", id))?;
    let viewport = stage.viewport();
    let grab = Point::new(rect.left + rect.width / 2.0, rect.top + rect.height / 2.0);

    controller
        .on_hover_enter(&mut *stage, &id)
        .map_err(|e| e.to_string())?;
    controller
        .on_gesture_start(&mut *stage, &id, &PointerEvent::mouse(grab.x, grab.y))
        .map_err(|e| e.to_string())?;

    let path = [
        Point::new(grab.x - 200.0, grab.y - 150.0),
        Point::new(-5000.0, -5000.0),
        Point::new(viewport.width * 2.0, viewport.height * 2.0),
        Point::new(viewport.width / 2.0, viewport.height / 2.0),
    ];
    for pointer in path {
        controller.on_gesture_move(&mut *stage, &PointerEvent::mouse(pointer.x, pointer.y));
        if let Some(rect) = stage.bounding_box(&id) {
            tracing::info!(
                "Pointer ({:.0}, {:.0}) -> '{}' at ({:.0}, {:.0})",
                pointer.x,
                pointer.y,
                id,
                rect.left,
                rect.top
            );
        }
    }

    controller.on_gesture_end(&mut *stage);
    controller
        .on_hover_leave(&mut *stage, &id)
        .map_err(|e| e.to_string())?;

    let shrunk = Size::new(viewport.width / 2.0, viewport.height / 2.0);
    stage.set_viewport(shrunk);
    let reset = controller.on_viewport_resize(&mut *stage);
    tracing::info!(
        "Resized to {:.0}x{:.0}: {} element(s) returned to their stylesheet position",
        shrunk.width,
        shrunk.height,
        reset
    );
    stage.set_viewport(viewport);

    Ok(())
}

/// Type the first phrase of the tagline into the stage.
async fn play_typewriter(
    stage: Arc<Mutex<MemoryStage>>,
    config: &FolioConfig,
) -> Result<(), String> {
    let typewriter = Typewriter::from_config(&config.typewriter).map_err(|e| e.to_string())?;
    let id = ElementId::from(TYPED_TEXT);

    let sink = stage.clone();
    let text_id = id.clone();
    let mut handle = Animation::new("typewriter", typewriter)
        .on_frame(move |frame| sink.lock().set_text(&text_id, &frame.text))
        .spawn();

    loop {
        let frame = handle.next_frame().await.map_err(|e| e.to_string())?;
        tracing::debug!("Tagline: {:?}", frame.text);
        if frame.phase == Phase::PausedAtFull {
            break;
        }
    }
    handle.stop();

    let text = stage.lock().text(&id).unwrap_or_default().to_string();
    tracing::info!("Tagline typed: {:?}", text);
    Ok(())
}

/// Count a stat up to its target.
async fn play_counter(config: &FolioConfig) {
    let mut handle = Animation::new("counter", CounterAnimation::new(150, &config.counter)).spawn();
    while handle.next_frame().await.is_ok() {}
    tracing::info!("Projects completed: {}", handle.latest().unwrap_or_default());
}

/// Seed the background particle pool.
async fn play_particles(config: &FolioConfig) -> Result<(), String> {
    let mut handle = Animation::new("particles", ParticlePool::new(&config.particles)).spawn();
    let frame = handle.next_frame().await.map_err(|e| e.to_string())?;
    tracing::info!(
        "Seeded {} particle(s); one more every {}ms while below capacity",
        frame.alive,
        config.particles.spawn_interval_ms
    );
    handle.stop();
    Ok(())
}

/// Open the first project's modal and print it.
fn show_project() -> Result<(), String> {
    let catalog = ProjectCatalog::builtin().map_err(|e| e.to_string())?;
    let mut modal = ProjectModal::new(catalog);
    modal.open(&ProjectId::from("project1"));

    if let Some(body) = modal.render() {
        println!("{}", body);
    }
    modal.close();
    Ok(())
}

async fn run(config: FolioConfig) -> Result<(), String> {
    let stage = Arc::new(Mutex::new(MemoryStage::from_config(&config.stage)));
    tracing::info!(
        "Stage {:.0}x{:.0} with {} floating element(s)",
        config.stage.viewport_width,
        config.stage.viewport_height,
        config.stage.floating.len()
    );

    play_drag(&stage, &config)?;
    play_typewriter(stage.clone(), &config).await?;
    play_counter(&config).await;
    play_particles(&config).await?;
    show_project()
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Folio starting...");

    let config = match load() {
        Ok(config) => config,
        Err(ConfigError::NoConfigDir) => {
            tracing::warn!("No config directory found - using default configuration");
            FolioConfig::default()
        }
        Err(e) => {
            tracing::error!("Failed to load config: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = rt.block_on(run(config)) {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
