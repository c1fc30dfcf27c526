//! Mapping von UI-Intents auf mutierende App-Commands.

use super::use_cases::picking::pick_drag_target;
use super::{AppCommand, AppIntent, AppState};
use crate::host::HostInbound;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let dragging = state.drag.is_dragging();

    match intent {
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SvgTextLoaded { content } => vec![AppCommand::LoadSvgText {
            content,
            host_node_id: None,
        }],
        AppIntent::ExportRequested { path } => vec![AppCommand::ExportSvg { path }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],

        AppIntent::PointerPressed { pos } => pick_drag_target(state, pos)
            .map(|target| AppCommand::BeginDrag {
                target,
                pointer: pos,
            })
            .into_iter()
            .collect(),
        AppIntent::PointerMoved { pos } if dragging => {
            vec![AppCommand::UpdateDrag { pointer: pos }]
        }
        AppIntent::PointerMoved { .. } => vec![],
        AppIntent::PointerReleased | AppIntent::PointerLeftCanvas if dragging => {
            vec![AppCommand::EndDrag]
        }
        AppIntent::PointerReleased | AppIntent::PointerLeftCanvas => vec![],

        AppIntent::HandleMoveRequested {
            path_index,
            handle_index,
            position,
        } => vec![AppCommand::MoveHandle {
            path_index,
            handle_index,
            position,
        }],
        AppIntent::PathMoveRequested { path_index, delta } => {
            vec![AppCommand::MovePath { path_index, delta }]
        }

        // Ein laufender Drag wird erst abgeschlossen, damit sein Snapshot zählt
        AppIntent::UndoRequested if dragging => vec![AppCommand::EndDrag, AppCommand::Undo],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested if dragging => vec![AppCommand::EndDrag, AppCommand::Redo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::OverlayToggled { kind } => vec![AppCommand::SetOverlay {
            kind,
            visible: !state.overlays.is_visible(kind),
        }],
        AppIntent::GenerateAllRequested => vec![AppCommand::ShowAllOverlays],
        AppIntent::SnapToGridToggled => vec![AppCommand::SetSnapToGrid {
            enabled: !state.options.snap_to_grid,
        }],
        AppIntent::GridDivisionsChanged { divisions } => {
            vec![AppCommand::SetGridDivisions { divisions }]
        }

        AppIntent::HostMessageReceived { json } => match HostInbound::from_json(&json) {
            Ok(HostInbound::Selection {
                svg_content,
                node_id,
            }) => vec![AppCommand::LoadSvgText {
                content: svg_content,
                host_node_id: Some(node_id),
            }],
            Ok(HostInbound::Deselection) => vec![AppCommand::UnbindHost],
            Err(e) => {
                log::warn!("Host-Nachricht verworfen: {:#}", e);
                vec![]
            }
        },
    }
}
