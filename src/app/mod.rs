//! Application-Layer: Controller, State, Events und Host-Brücke.

pub mod bridge;
pub mod command_log;
pub mod controller;
pub mod curve_store;
pub mod events;
pub mod gesture;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Editor-Sitzung
///
/// Besitzt Kurve, Viewport und Handles und hält den Interaktionszustand.
pub mod state;

pub use bridge::{CommandBridge, HostCommand, HostNotification};
pub use command_log::{CommandLog, LogEntry};
pub use controller::EditorController;
pub use events::{EditorCommand, EditorEvent};
pub use gesture::{Gesture, Modifiers, PointerButton, PointerEvent};
pub use render_scene::build as build_render_scene;
pub use state::{EditorState, InteractionState, ViewState};
