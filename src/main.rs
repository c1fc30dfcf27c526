//! Logo Grid Editor.
//!
//! Kommandozeilen-Einstieg: lädt ein SVG, gibt die kanonischen Pfade aus und
//! exportiert optional. Mit `--host` werden Host-Nachrichten zeilenweise als
//! JSON von stdin gelesen und Antworten auf stdout geschrieben.

use logo_grid_editor::svg::combined_path_data;
use logo_grid_editor::{segments_to_d, AppController, AppIntent, AppState, EditorOptions};
use std::io::BufRead;

fn main() {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Logo Grid Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = AppRunner::run(std::env::args().skip(1).collect()) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

struct AppRunner;

impl AppRunner {
    fn run(args: Vec<String>) -> anyhow::Result<()> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(options);
        let mut controller = AppController::new();

        if args.first().map(String::as_str) == Some("--host") {
            return Self::run_host_loop(&mut controller, &mut state);
        }

        let Some(input) = args.first() else {
            anyhow::bail!("Aufruf: Logo-Grid-Editor <eingabe.svg> [ausgabe.svg] | --host");
        };

        controller.handle_intent(
            &mut state,
            AppIntent::FileSelected {
                path: input.clone(),
            },
        )?;

        if let Some(doc) = state.document.as_ref() {
            let vb = &doc.view_box;
            log::info!(
                "viewBox {} {} {} {}, {} x {}",
                vb.min_x,
                vb.min_y,
                vb.width,
                vb.height,
                doc.width,
                doc.height
            );
            for (index, path) in doc.paths.iter().enumerate() {
                println!("{}\t{}", index, segments_to_d(&path.segments));
            }
        }

        if let Some(output) = args.get(1) {
            controller.handle_intent(
                &mut state,
                AppIntent::ExportRequested {
                    path: output.clone(),
                },
            )?;
        }

        Ok(())
    }

    /// Liest Host-Nachrichten von stdin und schreibt ausgehende Nachrichten
    /// sofort auf stdout.
    fn run_host_loop(controller: &mut AppController, state: &mut AppState) -> anyhow::Result<()> {
        for line in std::io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            // Ladefehler bleiben im UI-State sichtbar und beenden die Sitzung nicht
            if let Err(e) =
                controller.handle_intent(state, AppIntent::HostMessageReceived { json: line })
            {
                log::warn!("Host-Nachricht nicht verarbeitet: {:#}", e);
            }

            if let Some(doc) = state.document.as_ref() {
                log::debug!("Aktueller Pfad: {}", combined_path_data(doc));
            }

            for message in state.host.take_outbox() {
                println!("{}", message.to_json()?);
            }

            if state.should_exit {
                break;
            }
        }
        Ok(())
    }
}
