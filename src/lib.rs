//! Logo Grid Editor Library.
//! Pfad-Engine, SVG-Import/Export und Editor-Sitzung als Library exportiert
//! für Tests, Host-Anbindungen und Wiederverwendung.

pub mod app;
pub mod core;
pub mod host;
pub mod path_data;
pub mod shared;
pub mod svg;

pub use app::{AppCommand, AppController, AppIntent, AppState, DragTarget, UiState};
pub use core::{
    BoundingBox, BoundsProvider, Handle, HandleRef, ParsedSvg, PathCommand, Point, Segment,
    SvgPathData, ViewBox,
};
pub use host::{HostInbound, HostOutbound};
pub use path_data::{handle_move, parse_path_data, path_move, segments_to_d};
pub use shared::{EditorOptions, OverlayKind, RenderScene};
pub use svg::{parse_svg_document, write_svg_document};
