//! Zeiger-Events und Gesten-Klassifikation.
//!
//! `classify` ordnet jedem auslösenden Zeiger-Event genau eine Geste zu.
//! Fortsetzungs-Events (Bewegen, Loslassen) werden über den
//! Interaktionszustand im Intent-Mapping aufgelöst und hier ignoriert.

use crate::core::{HandleTarget, ViewGesture};
use glam::DVec2;

/// Zeiger-Taste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// Gehaltene Modifier-Tasten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// Gibt `true` zurück, wenn irgendein Modifier gehalten wird.
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt
    }
}

/// Zeiger-Event in Bildschirm-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down {
        pos: DVec2,
        button: PointerButton,
        modifiers: Modifiers,
    },
    Move {
        pos: DVec2,
        modifiers: Modifiers,
    },
    Up {
        pos: DVec2,
        button: PointerButton,
    },
    DoubleClick {
        pos: DVec2,
        button: PointerButton,
    },
    /// Mausrad; positives `delta.y` scrollt nach unten (zoomt heraus)
    Wheel {
        pos: DVec2,
        delta: DVec2,
        modifiers: Modifiers,
    },
    /// Pinch-Geste mit multiplikativem Zoom-Faktor
    Pinch { pos: DVec2, factor: f64 },
}

/// Ergebnis der Klassifikation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Handle ziehen
    PrimaryDrag { handle: usize },
    /// Ansicht per Drag verschieben
    PanDrag,
    /// Zoom um den Fokuspunkt
    Zoom { factor: f64, focus: DVec2 },
    /// Ansicht per Mausrad verschieben (Mausrad mit Modifier)
    WheelPan { delta: DVec2 },
    /// Kontextmenü beim Host anfragen
    ContextRequest,
    /// Punkt an Graph-Position einfügen
    InsertPoint { at: DVec2 },
    /// Inneren Punkt entfernen
    RemovePoint { index: usize },
    Ignore,
}

impl Gesture {
    /// Viewport-Geste, falls die Klassifikation eine ist.
    pub fn view_gesture(&self) -> Option<ViewGesture> {
        match *self {
            Self::Zoom { factor, focus } => Some(ViewGesture::Zoom { factor, focus }),
            Self::WheelPan { delta } => Some(ViewGesture::Pan { delta }),
            _ => None,
        }
    }
}

/// Zustand, den die Klassifikation zur Event-Position kennen muss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureContext {
    /// Handle unter dem Zeiger (Index + Ziel)
    pub hit: Option<(usize, HandleTarget)>,
    /// Zeiger-Position im Graph-Raum
    pub graph_pos: DVec2,
    /// Kurve erlaubt Einfügen/Entfernen von Punkten
    pub supports_points: bool,
    /// Anzahl Kontrollpunkte (glatte Kurve)
    pub point_count: usize,
    /// Eine Drag- oder Pan-Interaktion läuft
    pub interacting: bool,
    /// Mausrad-Empfindlichkeit für den Zoom-Faktor
    pub wheel_sensitivity: f64,
}

/// Klassifiziert ein Zeiger-Event.
///
/// Reihenfolge bei Druck: Sekundärtaste → Kontextmenü, Mitteltaste → Pan,
/// Primärtaste auf Handle → Drag (auch mit Alt), Alt + Primärtaste → Pan.
pub fn classify(event: &PointerEvent, ctx: &GestureContext) -> Gesture {
    match *event {
        PointerEvent::Down {
            button, modifiers, ..
        } => {
            if ctx.interacting {
                return Gesture::Ignore;
            }
            match button {
                PointerButton::Secondary => Gesture::ContextRequest,
                PointerButton::Middle => Gesture::PanDrag,
                PointerButton::Primary => match ctx.hit {
                    Some((handle, _)) => Gesture::PrimaryDrag { handle },
                    None if modifiers.alt => Gesture::PanDrag,
                    None => Gesture::Ignore,
                },
            }
        }
        PointerEvent::DoubleClick {
            button: PointerButton::Primary,
            ..
        } => {
            if ctx.interacting || !ctx.supports_points {
                return Gesture::Ignore;
            }
            match ctx.hit {
                Some((_, HandleTarget::Point { index }))
                    if index > 0 && index + 1 < ctx.point_count =>
                {
                    Gesture::RemovePoint { index }
                }
                Some(_) => Gesture::Ignore,
                None if (0.0..=1.0).contains(&ctx.graph_pos.x) => Gesture::InsertPoint {
                    at: ctx.graph_pos,
                },
                None => Gesture::Ignore,
            }
        }
        PointerEvent::Wheel {
            pos,
            delta,
            modifiers,
        } => {
            if ctx.interacting {
                return Gesture::Ignore;
            }
            if modifiers.any() {
                // Shift: vertikales Rad verschiebt horizontal
                let delta = if modifiers.shift && delta.x == 0.0 {
                    DVec2::new(delta.y, 0.0)
                } else {
                    delta
                };
                Gesture::WheelPan { delta: -delta }
            } else if delta.y != 0.0 {
                Gesture::Zoom {
                    factor: 2f64.powf(-delta.y * ctx.wheel_sensitivity),
                    focus: pos,
                }
            } else {
                Gesture::Ignore
            }
        }
        PointerEvent::Pinch { pos, factor } if !ctx.interacting => Gesture::Zoom { factor, focus: pos },
        _ => Gesture::Ignore,
    }
}
