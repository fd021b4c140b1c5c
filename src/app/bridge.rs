//! Host-Brücke: eingehende Kommandos dekodieren, ausgehende Meldungen puffern.
//!
//! Fehlerhafte oder unbekannte Nachrichten werden nie an den Host
//! zurückgemeldet, sondern mit Debug-Log verworfen.

use crate::core::{CurveParams, EditMode};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Empfänger der Parameter-Rückmeldung.
pub const PANEL_EDITOR: &str = "panel-editor";
/// Empfänger von Kontextmenü-Anfragen.
pub const NATIVE: &str = "native";

/// Kommando des Hosts (JSON, Feld `command`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum HostCommand {
    /// Andere Kurve bearbeiten: Neu laden, Ansicht zurücksetzen, Handles neu bauen
    #[serde(rename_all = "camelCase")]
    ChangeId {
        #[serde(default)]
        id: u32,
        #[serde(default)]
        edit_mode: Option<EditMode>,
    },
    /// Nur neu abtasten
    UpdateCurvePath,
    /// Handles aus dem Modell neu aufbauen
    UpdateHandles,
    /// Handle-Positionen nach externer Parameteränderung nachführen
    UpdateHandlePos {
        #[serde(default)]
        params: Option<CurveParams>,
    },
    #[serde(rename_all = "camelCase")]
    UpdateAxisLabelVisibility {
        #[serde(default)]
        show_x_label: Option<bool>,
        #[serde(default)]
        show_y_label: Option<bool>,
    },
    #[serde(rename_all = "camelCase")]
    UpdateHandleVisibility {
        #[serde(default)]
        show_handle: Option<bool>,
    },
    /// Präferenzen (Teilmenge der Optionen, camelCase) anwenden
    ApplyPreferences {
        #[serde(default)]
        preferences: serde_json::Map<String, serde_json::Value>,
    },
}

/// Meldung an den Host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command")]
pub enum HostNotification {
    /// Aktuelle Kurvenparameter nach einer Änderung
    #[serde(rename = "updateParam")]
    UpdateParam {
        mode: EditMode,
        id: u32,
        params: CurveParams,
    },
    /// Kontextmenü an Bildschirmposition anfragen
    #[serde(rename = "contextmenu-graph")]
    ContextMenu { x: f64, y: f64 },
}

impl HostNotification {
    /// Empfänger-Kennung (`to`).
    pub fn recipient(&self) -> &'static str {
        match self {
            Self::UpdateParam { .. } => PANEL_EDITOR,
            Self::ContextMenu { .. } => NATIVE,
        }
    }

    /// JSON-Objekt mit `to` und `command`.
    pub fn to_json(&self) -> anyhow::Result<serde_json::Value> {
        let mut value = serde_json::to_value(self)?;
        let object = value
            .as_object_mut()
            .ok_or_else(|| anyhow::anyhow!("Meldung ist kein JSON-Objekt"))?;
        object.insert("to".to_string(), self.recipient().into());
        Ok(value)
    }

    /// Einzeilige JSON-Kodierung für den Host-Kanal.
    pub fn encode(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(&self.to_json()?)?)
    }
}

/// Ausgangspuffer der Host-Meldungen.
#[derive(Debug, Default)]
pub struct CommandBridge {
    outbox: VecDeque<HostNotification>,
}

impl CommandBridge {
    /// Erstellt eine leere Brücke.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dekodiert eine Host-Nachricht; Ungültiges ergibt `None`.
    pub fn decode(message: &str) -> Option<HostCommand> {
        match serde_json::from_str::<HostCommand>(message) {
            Ok(command) => Some(command),
            Err(e) => {
                log::debug!("Host-Nachricht ignoriert ({}): {}", e, message.trim());
                None
            }
        }
    }

    /// Reiht eine Meldung ein.
    pub fn notify(&mut self, notification: HostNotification) {
        self.outbox.push_back(notification);
    }

    /// Entnimmt alle wartenden Meldungen in Reihenfolge.
    pub fn drain(&mut self) -> Vec<HostNotification> {
        self.outbox.drain(..).collect()
    }

    /// Anzahl wartender Meldungen.
    pub fn pending(&self) -> usize {
        self.outbox.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_commands() {
        assert_eq!(
            CommandBridge::decode(r#"{"command":"changeId","id":7}"#),
            Some(HostCommand::ChangeId {
                id: 7,
                edit_mode: None
            })
        );
        assert_eq!(
            CommandBridge::decode(r#"{"command":"updateCurvePath"}"#),
            Some(HostCommand::UpdateCurvePath)
        );
        assert_eq!(
            CommandBridge::decode(r#"{"command":"updateAxisLabelVisibility","showXLabel":false}"#),
            Some(HostCommand::UpdateAxisLabelVisibility {
                show_x_label: Some(false),
                show_y_label: None
            })
        );
        let prefs = CommandBridge::decode(
            r##"{"command":"applyPreferences","preferences":{"curveColor":"#ff0000"}}"##,
        );
        assert!(matches!(prefs, Some(HostCommand::ApplyPreferences { .. })));
    }

    #[test]
    fn ignores_unknown_and_malformed() {
        assert_eq!(CommandBridge::decode(r#"{"command":"launchRockets"}"#), None);
        assert_eq!(CommandBridge::decode(r#"{"id":3}"#), None);
        assert_eq!(CommandBridge::decode("not json"), None);
        assert_eq!(CommandBridge::decode(r#"{"command":"changeId","id":"x"}"#), None);
    }

    #[test]
    fn notifications_carry_recipient() {
        let n = HostNotification::ContextMenu { x: 12.0, y: 34.5 };
        let json = n.to_json().expect("kodierbar");
        assert_eq!(json["to"], "native");
        assert_eq!(json["command"], "contextmenu-graph");
        assert_eq!(json["y"], 34.5);

        let n = HostNotification::UpdateParam {
            mode: EditMode::Bezier,
            id: 2,
            params: EditMode::Bezier.default_curve().params(),
        };
        let json = n.to_json().expect("kodierbar");
        assert_eq!(json["to"], "panel-editor");
        assert_eq!(json["command"], "updateParam");
        assert_eq!(json["mode"], 2);
        assert_eq!(json["params"]["type"], "segments");
    }

    #[test]
    fn drain_empties_outbox_in_order() {
        let mut bridge = CommandBridge::new();
        bridge.notify(HostNotification::ContextMenu { x: 1.0, y: 1.0 });
        bridge.notify(HostNotification::ContextMenu { x: 2.0, y: 2.0 });
        assert_eq!(bridge.pending(), 2);
        let drained = bridge.drain();
        assert_eq!(drained[0], HostNotification::ContextMenu { x: 1.0, y: 1.0 });
        assert_eq!(bridge.pending(), 0);
    }
}
