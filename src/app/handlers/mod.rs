//! Feature-Handler für EditorCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod curve;
pub mod host;
pub mod interaction;
pub mod view;
