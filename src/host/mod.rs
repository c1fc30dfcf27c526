//! Nachrichtenprotokoll zum Design-Tool-Host (JSON über einen opaken Kanal).
//!
//! Der Host meldet Auswahländerungen als exportiertes SVG; der Editor
//! antwortet nach jedem abgeschlossenen Drag mit dem neuen Pfad-String.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Nachrichten vom Host an den Editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum HostInbound {
    /// Ein Vektor-Knoten wurde ausgewählt
    Selection {
        /// Exportiertes SVG des Knotens
        #[serde(rename = "svgContent")]
        svg_content: String,
        /// Host-seitige Knoten-ID
        #[serde(rename = "nodeId")]
        node_id: String,
    },
    /// Auswahl aufgehoben
    Deselection,
}

/// Nachrichten vom Editor an den Host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum HostOutbound {
    /// Ersetzt den Pfad des gebundenen Knotens
    UpdatePath {
        #[serde(rename = "nodeId")]
        node_id: String,
        #[serde(rename = "newD")]
        new_d: String,
    },
}

impl HostInbound {
    /// Dekodiert eine JSON-Nachricht des Hosts.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Ungültige Host-Nachricht")
    }
}

impl HostOutbound {
    /// Kodiert die Nachricht als JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Host-Nachricht kann nicht kodiert werden")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_selection() {
        let msg = HostInbound::from_json(
            r#"{"type":"selection","svgContent":"<svg/>","nodeId":"12:7"}"#,
        )
        .expect("Nachricht erwartet");
        assert_eq!(
            msg,
            HostInbound::Selection {
                svg_content: "<svg/>".into(),
                node_id: "12:7".into(),
            }
        );
    }

    #[test]
    fn decodes_deselection() {
        let msg = HostInbound::from_json(r#"{"type":"deselection"}"#).expect("Nachricht erwartet");
        assert_eq!(msg, HostInbound::Deselection);
    }

    #[test]
    fn rejects_unknown_type() {
        assert!(HostInbound::from_json(r#"{"type":"resize"}"#).is_err());
        assert!(HostInbound::from_json("kein json").is_err());
    }

    #[test]
    fn encodes_update_path() {
        let json = HostOutbound::UpdatePath {
            node_id: "1:2".into(),
            new_d: "M0 0L1 1".into(),
        }
        .to_json()
        .expect("JSON erwartet");

        let value: serde_json::Value = serde_json::from_str(&json).expect("gültiges JSON");
        assert_eq!(value["type"], "update-path");
        assert_eq!(value["nodeId"], "1:2");
        assert_eq!(value["newD"], "M0 0L1 1");
    }
}
