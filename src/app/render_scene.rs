//! Builder für Render-Szenen aus dem EditorState.

use crate::app::EditorState;
use crate::shared::ticks::{format_tick, nice_ticks};
use crate::shared::{AxisLabel, BackgroundLayer, GridLines, HandleMarker, RenderScene};
use crate::core::ViewportTransform;
use glam::{DVec2, Vec2};

/// Ticks der y-Achse.
const Y_TICK_COUNT: usize = 5;
/// Abstand der Beschriftungen vom Viewport-Rand in Pixeln.
const LABEL_INSET_PX: f32 = 4.0;

/// Baut eine RenderScene aus dem aktuellen EditorState.
///
/// Während eines Übergangs wird der interpolierte Zustand gezeichnet.
pub fn build(state: &EditorState) -> RenderScene {
    let snapshot = state.presented_snapshot();
    let viewport = state.viewport.with_dynamic(snapshot.dynamic);
    let size = viewport.size();

    let curve_path = snapshot
        .samples
        .iter()
        .map(|s| to_vec2(viewport.graph_to_screen(DVec2::new(s.x, s.y))))
        .collect();

    let handles = state
        .handles
        .handles()
        .iter()
        .zip(&snapshot.handles)
        .map(|(handle, position)| HandleMarker {
            position: to_vec2(viewport.graph_to_screen(*position)),
            root: handle.root.map(|r| to_vec2(viewport.graph_to_screen(r))),
            kind: handle.kind,
        })
        .collect();

    let (grid, x_labels, y_labels) = build_grid(&viewport);

    let background = (state.options.set_background_image
        && !state.options.background_image_path.is_empty())
    .then(|| BackgroundLayer {
        path: state.options.background_image_path.clone(),
        opacity: state.options.background_image_opacity,
    });

    RenderScene {
        viewport_size: [size.x as f32, size.y as f32],
        curve_path,
        curve_color: state.options.curve_color.clone(),
        curve_thickness: state.options.curve_thickness,
        handles,
        show_handles: state.view.show_handle,
        grid,
        x_labels,
        y_labels,
        show_x_labels: state.view.show_x_label,
        show_y_labels: state.view.show_y_label,
        out_of_range: out_of_range(&viewport),
        background,
        show_fit_button: state.viewport.is_transformed(),
    }
}

fn to_vec2(p: DVec2) -> Vec2 {
    p.as_vec2()
}

/// Gitterlinien und Beschriftungen für den sichtbaren Graph-Bereich.
fn build_grid(viewport: &ViewportTransform) -> (GridLines, Vec<AxisLabel>, Vec<AxisLabel>) {
    let size = viewport.size();
    let top_left = viewport.screen_to_graph(DVec2::ZERO);
    let bottom_right = viewport.screen_to_graph(size);
    let (x0, x1) = (top_left.x.min(bottom_right.x), top_left.x.max(bottom_right.x));
    let (y0, y1) = (top_left.y.min(bottom_right.y), top_left.y.max(bottom_right.y));

    // x-Ticks proportional zum Seitenverhältnis
    let x_count = ((size.x / size.y * Y_TICK_COUNT as f64).round() as usize).max(1);

    let screen_x = |x: f64| viewport.graph_to_screen(DVec2::new(x, 0.0)).x as f32;
    let screen_y = |y: f64| viewport.graph_to_screen(DVec2::new(0.0, y)).y as f32;

    let major_x_values = nice_ticks(x0, x1, x_count);
    let major_y_values = nice_ticks(y0, y1, Y_TICK_COUNT);

    let grid = GridLines {
        major_x: major_x_values.iter().map(|&x| screen_x(x)).collect(),
        major_y: major_y_values.iter().map(|&y| screen_y(y)).collect(),
        minor_x: nice_ticks(x0, x1, x_count * 2)
            .into_iter()
            .map(screen_x)
            .collect(),
        minor_y: nice_ticks(y0, y1, Y_TICK_COUNT * 2)
            .into_iter()
            .map(screen_y)
            .collect(),
    };

    let bottom = size.y as f32 - LABEL_INSET_PX;
    let x_labels = major_x_values
        .iter()
        .map(|&x| AxisLabel {
            position: Vec2::new(screen_x(x), bottom),
            text: format_tick(x),
        })
        .collect();
    let y_labels = major_y_values
        .iter()
        .map(|&y| AxisLabel {
            position: Vec2::new(LABEL_INSET_PX, screen_y(y)),
            text: format_tick(y),
        })
        .collect();

    (grid, x_labels, y_labels)
}

/// Bildschirmbereiche links von x=0 und rechts von x=1.
fn out_of_range(viewport: &ViewportTransform) -> Vec<[f32; 2]> {
    let width = viewport.size().x;
    let left = viewport.graph_to_screen(DVec2::ZERO).x.clamp(0.0, width);
    let right = viewport.graph_to_screen(DVec2::X).x.clamp(0.0, width);

    let mut ranges = Vec::with_capacity(2);
    if left > 0.0 {
        ranges.push([0.0, left as f32]);
    }
    if right < width {
        ranges.push([right as f32, width as f32]);
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ViewGesture;

    #[test]
    fn default_scene_shows_curve_handles_and_margins() {
        let state = EditorState::new();
        let scene = build(&state);
        assert!(scene.has_curve());
        assert_eq!(scene.handles.len(), 2);
        assert_eq!(scene.viewport_size, [800.0, 600.0]);
        assert!(!scene.show_fit_button);
        // Rand links und rechts des Einheitsbereichs
        assert_eq!(scene.out_of_range.len(), 2);
        assert!(!scene.grid.major_y.is_empty());
        assert_eq!(scene.x_labels.len(), scene.grid.major_x.len());
    }

    #[test]
    fn zoomed_view_offers_fit() {
        let mut state = EditorState::new();
        state
            .viewport
            .apply_gesture(ViewGesture::Zoom {
                factor: 4.0,
                focus: DVec2::new(400.0, 300.0),
            })
            .expect("Zoom gültig");
        let scene = build(&state);
        assert!(scene.show_fit_button);
        // Bei starkem Zoom in die Mitte liegt [0, 1] über dem ganzen Viewport
        assert!(scene.out_of_range.is_empty());
    }

    #[test]
    fn background_needs_flag_and_path() {
        let mut state = EditorState::new();
        state.options.background_image_path = "bild.png".into();
        assert!(build(&state).background.is_none());
        state.options.set_background_image = true;
        let layer = build(&state).background.expect("Hintergrund erwartet");
        assert_eq!(layer.path, "bild.png");
    }
}
