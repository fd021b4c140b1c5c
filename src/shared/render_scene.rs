//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie zeichnet. Alle
//! Positionen sind Bildschirm-Pixel relativ zur linken oberen Viewport-Ecke.

use crate::core::HandleKind;
use glam::Vec2;

/// Ein gezeichnetes Handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleMarker {
    /// Mittelpunkt
    pub position: Vec2,
    /// Anker der Tangentenlinie (nur Bézier)
    pub root: Option<Vec2>,
    /// Darstellungsart
    pub kind: HandleKind,
}

/// Gitterlinien-Positionen (x vertikal, y horizontal).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLines {
    pub major_x: Vec<f32>,
    pub major_y: Vec<f32>,
    pub minor_x: Vec<f32>,
    pub minor_y: Vec<f32>,
}

/// Beschriftung an einer Bildschirmposition.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub position: Vec2,
    pub text: String,
}

/// Hintergrundbild; die Platzierung erfolgt beim Zeichnen mit der Bildgröße.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundLayer {
    /// Dateipfad des Bildes
    pub path: String,
    /// Deckkraft (0.0 = transparent, 1.0 = opak)
    pub opacity: f32,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Abgetastete Kurve
    pub curve_path: Vec<Vec2>,
    /// Kurvenfarbe als Hex-Text aus den Optionen (`#rrggbb` oder `#rrggbbaa`)
    pub curve_color: String,
    /// Linienstärke in Pixeln
    pub curve_thickness: f32,
    pub handles: Vec<HandleMarker>,
    pub show_handles: bool,
    pub grid: GridLines,
    pub x_labels: Vec<AxisLabel>,
    pub y_labels: Vec<AxisLabel>,
    pub show_x_labels: bool,
    pub show_y_labels: bool,
    /// Abgeschattete x-Bereiche außerhalb von [0, 1] (Pixel von, bis)
    pub out_of_range: Vec<[f32; 2]>,
    pub background: Option<BackgroundLayer>,
    /// Pan/Zoom aktiv → "Fit"-Schaltfläche anzeigen
    pub show_fit_button: bool,
}

impl RenderScene {
    /// Gibt zurück, ob eine zeichenbare Kurve vorhanden ist.
    pub fn has_curve(&self) -> bool {
        self.curve_path.len() >= 2
    }
}
