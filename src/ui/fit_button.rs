//! "Fit"-Schaltfläche in der rechten oberen Viewport-Ecke.

use eframe::egui;

const BUTTON_SIZE: egui::Vec2 = egui::vec2(44.0, 22.0);
const BUTTON_MARGIN: f32 = 8.0;

/// Zeigt die Schaltfläche, falls `visible`; gibt `true` beim Klick zurück.
pub fn render_fit_button(ui: &mut egui::Ui, viewport: egui::Rect, visible: bool) -> bool {
    if !visible {
        return false;
    }
    let min = egui::pos2(
        viewport.right() - BUTTON_MARGIN - BUTTON_SIZE.x,
        viewport.top() + BUTTON_MARGIN,
    );
    let rect = egui::Rect::from_min_size(min, BUTTON_SIZE);
    ui.put(rect, egui::Button::new("Fit"))
        .on_hover_text("Ansicht zurücksetzen (Pos1)")
        .clicked()
}
