//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen und reine Hilfsfunktionen, die zwischen `core`, `app`
//! und `ui` geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod background;
pub mod options;
mod render_scene;
pub mod spline_geometry;
pub mod ticks;
pub mod transition;

pub use options::EditorOptions;
pub use render_scene::{AxisLabel, BackgroundLayer, GridLines, HandleMarker, RenderScene};
pub use transition::{cubic_out, Transition};
