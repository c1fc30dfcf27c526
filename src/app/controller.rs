//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::LoadFile { path } => handlers::file_io::load_file(state, path)?,
            AppCommand::LoadSvgText {
                content,
                host_node_id,
            } => handlers::file_io::load_svg_text(state, &content, host_node_id)?,
            AppCommand::ExportSvg { path } => handlers::file_io::export_svg(state, &path)?,

            // === Drag ===
            AppCommand::BeginDrag { target, pointer } => {
                handlers::editing::begin_drag(state, target, pointer)
            }
            AppCommand::UpdateDrag { pointer } => handlers::editing::update_drag(state, pointer),
            AppCommand::EndDrag => handlers::editing::end_drag(state),

            // === Direkte Bearbeitung ===
            AppCommand::MoveHandle {
                path_index,
                handle_index,
                position,
            } => handlers::editing::move_handle(state, path_index, handle_index, position),
            AppCommand::MovePath { path_index, delta } => {
                handlers::editing::move_path(state, path_index, delta)
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Overlays & Raster ===
            AppCommand::SetOverlay { kind, visible } => {
                handlers::view::set_overlay(state, kind, visible)
            }
            AppCommand::ShowAllOverlays => handlers::view::show_all_overlays(state),
            AppCommand::SetSnapToGrid { enabled } => {
                handlers::view::set_snap_to_grid(state, enabled)
            }
            AppCommand::SetGridDivisions { divisions } => {
                handlers::view::set_grid_divisions(state, divisions)
            }

            // === Host & Anwendungssteuerung ===
            AppCommand::UnbindHost => handlers::host::unbind(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
