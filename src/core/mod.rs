//! Core-Domänentypen: Kurvenmodell, Handles, Viewport-Transformation, Sampler.
//!
//! Reine Daten und Mathematik, ohne Abhängigkeit zum Zeichnen.

/// Kurvenmodell
///
/// - `SmoothCurve`: zentripetaler Catmull-Rom durch beliebig viele Punkte
/// - `SegmentCurve`: unabhängig parametrisierte Segmente (Bézier, Elastic, Bounce)
/// - `Curve`: Summe beider Varianten
pub mod curve;
pub mod drag_constraint;
mod error;
pub mod handle;
pub mod sampler;
pub mod viewport;

pub use curve::{
    BezierSide, ControlPoint, Curve, CurveParams, CurveSegment, CurveShape, EditMode,
    HandleAnchor, HandleTarget, SegmentCurve, SegmentHandleRole, SegmentKind, SmoothCurve,
};
pub use drag_constraint::{BezierDragGeometry, BezierDragState, DragModifiers};
pub use error::CurveError;
pub use handle::{Handle, HandleKind, HandleSet};
pub use sampler::{sample, Sample};
pub use viewport::{BaseTransform, DynamicTransform, LinearScale, ViewGesture, ViewportTransform};
