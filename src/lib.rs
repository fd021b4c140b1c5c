//! Graph Curve Editor Library.
//! Kurvenmodell, Viewport und Interaktion als Library exportiert für Tests und Einbettung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    CommandBridge, EditorCommand, EditorController, EditorEvent, EditorState, HostCommand,
    HostNotification,
};
pub use core::{
    sample, Curve, CurveError, CurveParams, CurveShape, EditMode, HandleSet, Sample,
    SegmentCurve, SegmentKind, SmoothCurve, ViewportTransform,
};
pub use shared::{EditorOptions, RenderScene};
