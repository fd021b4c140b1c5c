//! Handler für Meldungen an den Host.

use crate::app::bridge::HostNotification;
use crate::app::EditorState;
use glam::DVec2;

/// Merkt eine Parameteränderung vor (nur parametrische Modi melden).
pub fn mark_params_changed(state: &mut EditorState) {
    if state.edit_mode.is_parametric() {
        state.param_dirty = true;
    }
}

/// Meldet vorgemerkte Parameter, sobald kein Handle mehr gezogen wird.
pub fn flush_param_notification(state: &mut EditorState) {
    if !state.param_dirty || state.interaction.is_dragging_handle() {
        return;
    }
    state.bridge.notify(HostNotification::UpdateParam {
        mode: state.edit_mode,
        id: state.curve_id,
        params: state.curve.params(),
    });
    state.param_dirty = false;
}

/// Fragt beim Host ein Kontextmenü an der Bildschirmposition an.
pub fn request_context_menu(state: &mut EditorState, at: DVec2) {
    state
        .bridge
        .notify(HostNotification::ContextMenu { x: at.x, y: at.y });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EditMode;

    #[test]
    fn normal_mode_never_reports_params() {
        let mut state = EditorState::new();
        mark_params_changed(&mut state);
        flush_param_notification(&mut state);
        assert_eq!(state.bridge.pending(), 0);
    }

    #[test]
    fn parametric_mode_reports_once() {
        let mut state = EditorState::new();
        state.edit_mode = EditMode::Elastic;
        state.curve = EditMode::Elastic.default_curve();
        mark_params_changed(&mut state);
        flush_param_notification(&mut state);
        flush_param_notification(&mut state);
        let sent = state.bridge.drain();
        assert_eq!(sent.len(), 1);
        assert!(matches!(
            sent[0],
            HostNotification::UpdateParam {
                mode: EditMode::Elastic,
                ..
            }
        ));
    }
}
