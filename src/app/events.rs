//! EditorEvent- und EditorCommand-Enums für den Event/Command-Datenfluss.

use super::bridge::HostCommand;
use super::gesture::{Modifiers, PointerEvent};
use crate::core::{CurveParams, EditMode};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Eingaben aus Host, UI und System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Dekodiertes Host-Kommando
    Host(HostCommand),
    /// Zeiger-Event im Viewport (Bildschirm-Koordinaten)
    Pointer(PointerEvent),
    /// Viewport-Größe hat sich geändert
    ViewportResized { width: f64, height: f64 },
    /// "Fit to View" (Home-Taste oder Fit-Schaltfläche)
    FitRequested,
    /// Animations-Tick mit vergangener Zeit in Sekunden
    FrameAdvanced { dt: f64 },
}

/// Mutierende Commands, die der Controller an die Handler verteilt.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    // === Kurve ===
    /// Aktuelle Kurve ablegen und (Modus, ID) laden
    LoadCurve { mode: EditMode, id: u32 },
    /// Extern geänderte Parameter übernehmen
    ApplyExternalParams { params: Option<CurveParams> },
    /// Punkt einfügen (Graph-Raum)
    InsertPoint { x: f64, y: f64 },
    /// Punkt entfernen
    RemovePoint { index: usize },
    /// Polyline für den sichtbaren Bereich neu abtasten
    ResampleCurve,
    /// Handles komplett neu aufbauen
    RebuildHandles,
    /// Nur Handle-Positionen nachführen
    SyncHandlePositions,

    // === Handle-Drag ===
    BeginHandleDrag { handle: usize, pointer: DVec2 },
    UpdateHandleDrag { pointer: DVec2, modifiers: Modifiers },
    EndHandleDrag,

    // === Viewport ===
    SetViewportSize { width: f64, height: f64 },
    BeginPan { pointer: DVec2 },
    PanTo { pointer: DVec2 },
    EndPan,
    PanBy { delta: DVec2 },
    ZoomAt { factor: f64, focus: DVec2 },
    /// Dynamische Transformation zurücksetzen, optional animiert
    FitView { duration: f64 },

    // === Darstellung ===
    /// Übergang vom aktuell dargestellten Zustand starten
    BeginTransition { duration: f64 },
    AdvanceAnimation { dt: f64 },
    SetAxisLabelVisibility {
        show_x: Option<bool>,
        show_y: Option<bool>,
    },
    SetHandleVisibility { show: Option<bool> },
    ApplyOptions { options: Box<EditorOptions> },

    // === Host ===
    RequestContextMenu { at: DVec2 },
    /// Parameteränderung vormerken
    MarkParamsChanged,
    /// Vorgemerkte Parameteränderung melden (nicht während eines Drags)
    FlushParamNotification,
}
