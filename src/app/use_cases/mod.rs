//! Use-Cases: fachliche Abläufe auf dem AppState.

pub mod drag;
pub mod editing;
pub mod file_io;
pub mod host;
pub mod picking;
