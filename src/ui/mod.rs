//! UI-Layer mit egui: Zeichnen der RenderScene und Viewport-Input.

mod fit_button;
pub mod input;
pub mod painter;

pub use fit_button::render_fit_button;
pub use input::InputState;
pub use painter::paint_scene;
