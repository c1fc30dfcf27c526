/// UI-bezogener Anwendungszustand (Statuszeile, Fehlermeldung, Dateipfad).
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Pfad der zuletzt geladenen Datei
    pub current_file_path: Option<String>,
    /// Statusmeldung für die Statuszeile
    pub status_message: Option<String>,
    /// Blockierende Fehlermeldung (z.B. fehlgeschlagener Import)
    pub error_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
