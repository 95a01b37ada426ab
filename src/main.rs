//! Route Path Editor (headless).
//!
//! Lädt einen Netz-Schnappschuss und optional einen gespeicherten Linienweg,
//! führt die Nachbarsuche am offenen Ende einmal aus und protokolliert das Ergebnis.
//!
//! Aufruf: `route-path-editor <netz.json> [linienweg.json] [--node <id>]`

use anyhow::{Context, Result, bail};
use route_path_editor::app::use_cases::path_editing::next_search_target;
use route_path_editor::{
    EditorOptions, InMemoryGraphService, InteractionEvent, NotificationLevel, PathController,
    PathDirection, PathSession, RoutePath, TransitType,
};
use std::path::PathBuf;

/// Kommandozeilen-Argumente
struct CliArgs {
    graph_file: PathBuf,
    path_file: Option<PathBuf>,
    node_id: Option<u64>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = std::env::args().skip(1);
        let mut positional = Vec::new();
        let mut node_id = None;

        while let Some(arg) = args.next() {
            if arg == "--node" {
                let value = args.next().context("--node erwartet eine Knoten-ID")?;
                node_id = Some(
                    value
                        .parse()
                        .with_context(|| format!("Ungültige Knoten-ID: {}", value))?,
                );
            } else {
                positional.push(PathBuf::from(arg));
            }
        }

        let mut positional = positional.into_iter();
        let Some(graph_file) = positional.next() else {
            bail!("Aufruf: route-path-editor <netz.json> [linienweg.json] [--node <id>]");
        };
        Ok(Self {
            graph_file,
            path_file: positional.next(),
            node_id,
        })
    }
}

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Route Path Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = CliArgs::parse()?;
    let options = EditorOptions::load_from_file(&EditorOptions::config_path());

    let graph_json = std::fs::read_to_string(&args.graph_file).with_context(|| {
        format!("Netz-Datei nicht lesbar: {}", args.graph_file.display())
    })?;
    let service = InMemoryGraphService::from_json(&graph_json)?;

    let path = match &args.path_file {
        Some(file) => route_path_editor::json::load_route_path(file)?,
        None => RoutePath::new("neu", PathDirection::Outbound, TransitType::Bus),
    };

    let mut session = PathSession::with_path(path, options);
    let mut controller = PathController::new();

    let node_id = match args.node_id {
        Some(id) => id,
        None => match next_search_target(&session.path) {
            Some(target) => target.node_id,
            None => {
                log::info!("Kein offenes Ende: {:?}", session.path.state());
                log_summary(&controller, &mut session);
                return Ok(());
            }
        },
    };
    controller.handle_intent(
        &mut session,
        InteractionEvent::NodeSelected {
            node_id,
            boundary: None,
        },
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("Tokio-Runtime konnte nicht erstellt werden")?;
    runtime.block_on(controller.resolve_neighbors(&mut session, &service));

    log_summary(&controller, &mut session);
    Ok(())
}

fn log_summary(controller: &PathController, session: &mut PathSession) {
    let scene = controller.build_render_scene(session);

    log::info!(
        "Linienweg '{}': {} Segmente, {:?}, {:.0} m ({})",
        scene.path.route_id(),
        scene.path.len(),
        scene.state,
        scene.length.meters,
        if scene.length.measured {
            "gemessen"
        } else {
            "aus Geometrie"
        }
    );
    log::info!(
        "{} Polyline(s), {} Richtungspfeile, {} offene Randknoten",
        scene.polylines.len(),
        scene.arrows.len(),
        scene.boundary_nodes.len()
    );
    for candidate in &scene.candidates {
        log::info!(
            "Kandidat: Segment {} ({} weitere Linienwege)",
            candidate.segment_id,
            candidate.usage_count
        );
    }
    for notification in session.drain_notifications() {
        match notification.level {
            NotificationLevel::Info => log::info!("{}", notification.message),
            NotificationLevel::Warning => log::warn!("{}", notification.message),
        }
    }
}
