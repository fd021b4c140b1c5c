//! Editor-Sitzung: zentrale Datenhaltung.
//!
//! `EditorState` besitzt Kurvenmodell, Viewport-Transformation und Handles
//! exklusiv. Übergänge interpolieren nur die Darstellung; der
//! autoritative Zustand ist immer sofort festgeschrieben.

use super::bridge::CommandBridge;
use super::curve_store::CurveStore;
use super::CommandLog;
use crate::core::{
    sample, BezierDragState, Curve, DynamicTransform, EditMode, HandleSet, HandleTarget, Sample,
    ViewportTransform,
};
use crate::shared::{EditorOptions, Transition};
use glam::DVec2;

/// Laufende Zeiger-Interaktion.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Ein Handle wird gezogen
    HandleDrag {
        handle: usize,
        target: HandleTarget,
        /// Abstand Handle − Zeiger im Graph-Raum beim Greifen
        grab_offset: DVec2,
        constraint: BezierDragState,
    },
    /// Ansicht wird verschoben
    Pan { last: DVec2 },
}

impl InteractionState {
    /// Gibt `true` zurück, wenn gerade gezogen oder gepannt wird.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Gibt `true` zurück, wenn ein Handle gezogen wird.
    pub fn is_dragging_handle(&self) -> bool {
        matches!(self, Self::HandleDrag { .. })
    }
}

/// Darstellbarer Zustand, zwischen dem Übergänge interpolieren.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub dynamic: DynamicTransform,
    /// Handle-Positionen im Graph-Raum
    pub handles: Vec<DVec2>,
    pub samples: Vec<Sample>,
}

impl ViewSnapshot {
    /// Interpoliert zu `target`; Listen unterschiedlicher Länge springen auf das Ziel.
    pub fn interpolate(&self, target: &ViewSnapshot, t: f64) -> ViewSnapshot {
        let handles = if self.handles.len() == target.handles.len() {
            self.handles
                .iter()
                .zip(&target.handles)
                .map(|(a, b)| a.lerp(*b, t))
                .collect()
        } else {
            target.handles.clone()
        };
        let samples = if self.samples.len() == target.samples.len() {
            self.samples
                .iter()
                .zip(&target.samples)
                .map(|(a, b)| Sample {
                    x: a.x + (b.x - a.x) * t,
                    y: a.y + (b.y - a.y) * t,
                })
                .collect()
        } else {
            target.samples.clone()
        };
        ViewSnapshot {
            dynamic: self.dynamic.lerp(&target.dynamic, t),
            handles,
            samples,
        }
    }
}

/// Laufender Übergang vom Startschnappschuss zum aktuellen Zustand.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTransition {
    pub from: ViewSnapshot,
    pub progress: Transition,
}

/// Präsentationszustand.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Zuletzt abgetastete Polyline (Graph-Raum)
    pub samples: Vec<Sample>,
    pub show_handle: bool,
    pub show_x_label: bool,
    pub show_y_label: bool,
    pub transition: Option<ActiveTransition>,
}

impl ViewState {
    fn from_options(options: &EditorOptions) -> Self {
        Self {
            samples: Vec::new(),
            show_handle: options.show_handle,
            show_x_label: options.show_x_label,
            show_y_label: options.show_y_label,
            transition: None,
        }
    }
}

/// Explizite Editor-Sitzung.
pub struct EditorState {
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Modus der aktuell geladenen Kurve
    pub edit_mode: EditMode,
    /// ID der aktuell geladenen Kurve
    pub curve_id: u32,
    pub curve: Curve,
    pub store: CurveStore,
    pub viewport: ViewportTransform,
    pub handles: HandleSet,
    pub interaction: InteractionState,
    pub view: ViewState,
    pub bridge: CommandBridge,
    pub command_log: CommandLog,
    /// Parameteränderung seit der letzten Meldung
    pub param_dirty: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Erstellt eine Sitzung mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt eine Sitzung mit den gegebenen Optionen (bereinigt).
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.sanitized();
        let mut viewport = ViewportTransform::default();
        if let Err(e) = viewport.set_scale_extent(options.zoom_scale_min, options.zoom_scale_max) {
            log::warn!("Zoom-Grenzen nicht übernommen: {}", e);
        }
        let edit_mode = options.edit_mode;
        let curve = edit_mode.default_curve();
        let mut handles = HandleSet::default();
        handles.rebuild(&curve);

        let mut state = Self {
            view: ViewState::from_options(&options),
            options,
            edit_mode,
            curve_id: 0,
            curve,
            store: CurveStore::new(),
            viewport,
            handles,
            interaction: InteractionState::Idle,
            bridge: CommandBridge::new(),
            command_log: CommandLog::new(),
            param_dirty: false,
        };
        state.resample();
        state
    }

    /// Tastet die Kurve im sichtbaren Bereich (plus Überstand) neu ab.
    pub fn resample(&mut self) {
        let range = self
            .viewport
            .visible_graph_x_range(self.options.sample_overscan_px);
        self.view.samples = sample(&self.curve, range, self.options.curve_resolution);
    }

    /// Zielzustand der Darstellung (autoritativ).
    pub fn target_snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            dynamic: self.viewport.dynamic(),
            handles: self.handles.handles().iter().map(|h| h.position).collect(),
            samples: self.view.samples.clone(),
        }
    }

    /// Aktuell dargestellter Zustand (während eines Übergangs interpoliert).
    pub fn presented_snapshot(&self) -> ViewSnapshot {
        let target = self.target_snapshot();
        match &self.view.transition {
            Some(active) => active.from.interpolate(&target, active.progress.eased()),
            None => target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_sampled_and_has_handles() {
        let state = EditorState::new();
        assert_eq!(state.view.samples.len(), state.options.curve_resolution);
        assert_eq!(state.handles.len(), 2);
        assert!(!state.interaction.is_active());
        assert_eq!(state.presented_snapshot(), state.target_snapshot());
    }

    #[test]
    fn snapshot_interpolates_pointwise() {
        let a = ViewSnapshot {
            dynamic: DynamicTransform::IDENTITY,
            handles: vec![DVec2::ZERO],
            samples: vec![Sample { x: 0.0, y: 0.0 }],
        };
        let b = ViewSnapshot {
            dynamic: DynamicTransform {
                k: 3.0,
                translate: DVec2::new(10.0, 0.0),
            },
            handles: vec![DVec2::ONE],
            samples: vec![Sample { x: 1.0, y: 2.0 }],
        };
        let mid = a.interpolate(&b, 0.5);
        assert_eq!(mid.dynamic.k, 2.0);
        assert_eq!(mid.handles[0], DVec2::splat(0.5));
        assert_eq!(mid.samples[0], Sample { x: 0.5, y: 1.0 });
    }

    #[test]
    fn mismatched_lengths_jump_to_target() {
        let a = ViewSnapshot {
            dynamic: DynamicTransform::IDENTITY,
            handles: vec![DVec2::ZERO],
            samples: vec![],
        };
        let b = ViewSnapshot {
            dynamic: DynamicTransform::IDENTITY,
            handles: vec![DVec2::ONE, DVec2::ONE],
            samples: vec![Sample { x: 1.0, y: 1.0 }],
        };
        let mid = a.interpolate(&b, 0.25);
        assert_eq!(mid.handles, b.handles);
        assert_eq!(mid.samples, b.samples);
    }
}
