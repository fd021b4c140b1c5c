//! Handler für Viewport, Übergänge und Darstellungsoptionen.

use crate::app::state::ActiveTransition;
use crate::app::EditorState;
use crate::core::ViewGesture;
use crate::shared::{EditorOptions, Transition};
use glam::DVec2;

/// Aktualisiert die Viewport-Größe; ungültige Größen ändern nichts.
pub fn set_viewport_size(state: &mut EditorState, width: f64, height: f64) -> anyhow::Result<()> {
    state.viewport.set_viewport_size(width, height)?;
    Ok(())
}

/// Verschiebt die Ansicht um ein Bildschirm-Delta.
pub fn pan_by(state: &mut EditorState, delta: DVec2) -> anyhow::Result<()> {
    state.view.transition = None;
    state.viewport.apply_gesture(ViewGesture::Pan { delta })?;
    Ok(())
}

/// Zoomt um einen Bildschirm-Fokuspunkt.
pub fn zoom_at(state: &mut EditorState, factor: f64, focus: DVec2) -> anyhow::Result<()> {
    state.view.transition = None;
    state.viewport.apply_gesture(ViewGesture::Zoom { factor, focus })?;
    Ok(())
}

/// Setzt die dynamische Transformation zurück, animiert bei `duration > 0`.
pub fn fit_view(state: &mut EditorState, duration: f64) {
    begin_transition(state, duration);
    state.viewport.reset();
}

/// Startet einen Übergang vom aktuell dargestellten Zustand.
///
/// Der autoritative Zustand wird danach sofort geändert; nur die
/// Darstellung läuft dem Ziel hinterher.
pub fn begin_transition(state: &mut EditorState, duration: f64) {
    let from = state.presented_snapshot();
    state.view.transition =
        Transition::start(duration).map(|progress| ActiveTransition { from, progress });
}

/// Schreitet einen laufenden Übergang fort.
pub fn advance_animation(state: &mut EditorState, dt: f64) {
    let finished = match state.view.transition.as_mut() {
        Some(active) => {
            active.progress.advance(dt);
            active.progress.is_finished()
        }
        None => false,
    };
    if finished {
        state.view.transition = None;
    }
}

/// Setzt die Sichtbarkeit der Achsenbeschriftungen (fehlende Werte bleiben).
pub fn set_axis_label_visibility(state: &mut EditorState, show_x: Option<bool>, show_y: Option<bool>) {
    if let Some(show) = show_x {
        state.view.show_x_label = show;
    }
    if let Some(show) = show_y {
        state.view.show_y_label = show;
    }
}

/// Setzt die Sichtbarkeit der Handles.
pub fn set_handle_visibility(state: &mut EditorState, show: Option<bool>) {
    if let Some(show) = show {
        state.view.show_handle = show;
    }
}

/// Übernimmt neue Laufzeit-Optionen.
pub fn apply_options(state: &mut EditorState, options: EditorOptions) -> anyhow::Result<()> {
    state
        .viewport
        .set_scale_extent(options.zoom_scale_min, options.zoom_scale_max)?;
    state.view.show_handle = options.show_handle;
    state.view.show_x_label = options.show_x_label;
    state.view.show_y_label = options.show_y_label;
    state.options = options;
    log::info!("Optionen übernommen");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_resets_immediately_and_animates_presentation() {
        let mut state = EditorState::new();
        zoom_at(&mut state, 2.0, DVec2::new(400.0, 300.0)).expect("Zoom gültig");
        fit_view(&mut state, 0.5);
        assert!(!state.viewport.is_transformed());
        let presented = state.presented_snapshot();
        assert!(presented.dynamic.k > 1.0);

        advance_animation(&mut state, 0.25);
        assert!(state.view.transition.is_some());
        advance_animation(&mut state, 1.0);
        assert!(state.view.transition.is_none());
        assert_eq!(state.presented_snapshot(), state.target_snapshot());
    }

    #[test]
    fn zero_duration_fit_is_instant() {
        let mut state = EditorState::new();
        pan_by(&mut state, DVec2::new(20.0, 0.0)).expect("Pan gültig");
        fit_view(&mut state, 0.0);
        assert!(state.view.transition.is_none());
        assert!(!state.viewport.is_transformed());
    }

    #[test]
    fn invalid_size_keeps_previous_viewport() {
        let mut state = EditorState::new();
        let before = state.viewport.size();
        assert!(set_viewport_size(&mut state, 0.0, 300.0).is_err());
        assert_eq!(state.viewport.size(), before);
    }

    #[test]
    fn partial_label_visibility_keeps_other_axis() {
        let mut state = EditorState::new();
        set_axis_label_visibility(&mut state, Some(false), None);
        assert!(!state.view.show_x_label);
        assert_eq!(state.view.show_y_label, state.options.show_y_label);
    }
}
