//! Zeichnet eine `RenderScene` mit dem egui-Painter.
//!
//! Reihenfolge: Hintergrund, Gitter, Randbereiche, Kurve, Handles, Beschriftung.

use crate::core::HandleKind;
use crate::shared::background::cover_rect;
use crate::shared::options::CURVE_COLOR;
use crate::shared::{BackgroundLayer, RenderScene};
use eframe::egui;
use glam::Vec2;

const MAJOR_GRID_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(60, 60, 60, 110);
const MINOR_GRID_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(30, 30, 30, 55);
const OUT_OF_RANGE_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 90);
const LABEL_COLOR: egui::Color32 = egui::Color32::from_gray(170);
const POINT_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 255, 255);
const BEZIER_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 160, 0);
const PARAMETRIC_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 200, 255);
const HANDLE_RADIUS: f32 = 5.0;
const LABEL_FONT_SIZE: f32 = 11.0;

/// Zeichnet die Szene in `rect` (Viewport-Ursprung = `rect.min`).
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let to_screen = |p: Vec2| rect.min + egui::vec2(p.x, p.y);

    if let Some(background) = &scene.background {
        paint_background(painter, rect, background);
    }

    paint_grid(painter, rect, scene);

    for &[from, to] in &scene.out_of_range {
        let shade = egui::Rect::from_min_max(
            egui::pos2(rect.left() + from, rect.top()),
            egui::pos2(rect.left() + to, rect.bottom()),
        );
        painter.rect_filled(shade, 0.0, OUT_OF_RANGE_COLOR);
    }

    if scene.has_curve() {
        let color = curve_color(&scene.curve_color);
        let points: Vec<egui::Pos2> = scene.curve_path.iter().map(|&p| to_screen(p)).collect();
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(scene.curve_thickness, color),
        ));
    }

    if scene.show_handles {
        for handle in &scene.handles {
            let center = to_screen(handle.position);
            let color = match handle.kind {
                HandleKind::Point => POINT_COLOR,
                HandleKind::Bezier => BEZIER_COLOR,
                HandleKind::Parametric => PARAMETRIC_COLOR,
            };
            if let Some(root) = handle.root {
                painter.line_segment([to_screen(root), center], egui::Stroke::new(1.0, color));
            }
            painter.circle_filled(center, HANDLE_RADIUS, color);
            painter.circle_stroke(center, HANDLE_RADIUS, egui::Stroke::new(1.0, egui::Color32::BLACK));
        }
    }

    let font = egui::FontId::proportional(LABEL_FONT_SIZE);
    if scene.show_x_labels {
        for label in &scene.x_labels {
            painter.text(
                to_screen(label.position),
                egui::Align2::CENTER_BOTTOM,
                &label.text,
                font.clone(),
                LABEL_COLOR,
            );
        }
    }
    if scene.show_y_labels {
        for label in &scene.y_labels {
            painter.text(
                to_screen(label.position),
                egui::Align2::LEFT_CENTER,
                &label.text,
                font.clone(),
                LABEL_COLOR,
            );
        }
    }
}

/// Kurvenfarbe aus dem Hex-Text; ungültige Werte fallen auf die Standardfarbe.
fn curve_color(text: &str) -> egui::Color32 {
    egui::Color32::from_hex(text.trim())
        .or_else(|_| egui::Color32::from_hex(CURVE_COLOR))
        .unwrap_or(egui::Color32::WHITE)
}

/// URI für den Dateilader von egui_extras (entfernt `file://` und liest den Pfad).
///
/// Relative Pfade werden gegen das Arbeitsverzeichnis aufgelöst.
fn background_uri(path: &str) -> String {
    let path = std::path::Path::new(path.trim());
    match std::path::absolute(path) {
        Ok(absolute) => format!("file://{}", absolute.display()),
        Err(e) => {
            log::debug!("Pfad '{}' nicht auflösbar: {}", path.display(), e);
            format!("file://{}", path.display())
        }
    }
}

fn paint_grid(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let vertical = |x: f32, color: egui::Color32| {
        let x = rect.left() + x;
        painter.line_segment(
            [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
            egui::Stroke::new(1.0, color),
        );
    };
    let horizontal = |y: f32, color: egui::Color32| {
        let y = rect.top() + y;
        painter.line_segment(
            [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
            egui::Stroke::new(1.0, color),
        );
    };

    for &x in &scene.grid.minor_x {
        vertical(x, MINOR_GRID_COLOR);
    }
    for &y in &scene.grid.minor_y {
        horizontal(y, MINOR_GRID_COLOR);
    }
    for &x in &scene.grid.major_x {
        vertical(x, MAJOR_GRID_COLOR);
    }
    for &y in &scene.grid.major_y {
        horizontal(y, MAJOR_GRID_COLOR);
    }
}

/// Zeichnet das Hintergrundbild deckend und zentriert (ohne Zoom).
fn paint_background(painter: &egui::Painter, rect: egui::Rect, layer: &BackgroundLayer) {
    let uri = background_uri(&layer.path);
    let poll = painter.ctx().try_load_texture(
        &uri,
        egui::TextureOptions::LINEAR,
        egui::load::SizeHint::default(),
    );
    let texture = match poll {
        Ok(egui::load::TexturePoll::Ready { texture }) => texture,
        Ok(egui::load::TexturePoll::Pending { .. }) => {
            painter.ctx().request_repaint();
            return;
        }
        Err(e) => {
            log::debug!("Hintergrundbild '{}' nicht ladbar: {}", layer.path, e);
            return;
        }
    };

    let image_size = Vec2::new(texture.size.x, texture.size.y);
    let viewport = Vec2::new(rect.width(), rect.height());
    let Some((min, size)) = cover_rect(image_size, viewport) else {
        return;
    };
    let target = egui::Rect::from_min_size(
        rect.min + egui::vec2(min.x, min.y),
        egui::vec2(size.x, size.y),
    );
    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    let tint = egui::Color32::WHITE.gamma_multiply(layer.opacity.clamp(0.0, 1.0));
    painter.with_clip_rect(rect).image(texture.id, target, uv, tint);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_color_parses_hex_and_falls_back() {
        assert_eq!(
            curve_color("#ff0000"),
            egui::Color32::from_rgb(255, 0, 0)
        );
        assert_eq!(
            curve_color(" #00ff0080 "),
            egui::Color32::from_rgba_unmultiplied(0, 255, 0, 128)
        );
        assert_eq!(
            curve_color("kein-hex"),
            egui::Color32::from_rgb(0xa0, 0xa0, 0xff)
        );
    }

    #[test]
    fn background_uri_is_absolute() {
        let uri = background_uri("bilder/hintergrund.png");
        let path = uri.strip_prefix("file://").expect("file-URI");
        assert!(std::path::Path::new(path).is_absolute(), "{uri}");
        assert!(path.ends_with("hintergrund.png"));
    }
}
