//! Handler für Handle-Drag und Drag-Pan.
//!
//! Während eines Drags bleibt der Greif-Versatz konstant, damit das Handle
//! nicht auf den Zeiger springt. Ungültige Zwischenpositionen werden vom
//! Modell abgelehnt und lassen die letzte gültige Position stehen.

use crate::app::gesture::Modifiers;
use crate::app::state::InteractionState;
use crate::app::EditorState;
use crate::core::{
    BezierDragGeometry, BezierDragState, CurveError, Curve, DragModifiers, HandleTarget,
    SegmentHandleRole, ViewGesture,
};
use glam::DVec2;

/// Beginnt das Ziehen eines Handles.
pub fn begin_handle_drag(
    state: &mut EditorState,
    handle: usize,
    pointer: DVec2,
) -> anyhow::Result<()> {
    let Some(h) = state.handles.get(handle) else {
        return Err(CurveError::invalid_argument(format!("Handle {handle} existiert nicht")).into());
    };
    let grab_offset = h.position - state.viewport.screen_to_graph(pointer);
    state.interaction = InteractionState::HandleDrag {
        handle,
        target: h.target,
        grab_offset,
        constraint: BezierDragState::default(),
    };
    state.view.transition = None;
    log::debug!("Drag von Handle {} ({:?}) gestartet", handle, h.target);
    Ok(())
}

/// Führt den Drag zur Zeigerposition nach.
pub fn update_handle_drag(
    state: &mut EditorState,
    pointer: DVec2,
    modifiers: Modifiers,
) -> anyhow::Result<()> {
    let InteractionState::HandleDrag {
        handle,
        target,
        grab_offset,
        constraint,
    } = &mut state.interaction
    else {
        return Ok(());
    };
    let mut proposed = state.viewport.screen_to_graph(pointer) + *grab_offset;
    let mut keep_angle = false;

    match (&state.curve, *target) {
        (Curve::Smooth(s), HandleTarget::Point { index }) => {
            let is_endpoint = index == 0 || index + 1 == s.len();
            if is_endpoint && s.bounds().lock_endpoint_x {
                if let Some(p) = s.points().get(index) {
                    proposed.x = p.x;
                }
            }
        }
        (
            Curve::Segment(s),
            HandleTarget::Segment {
                segment,
                role: SegmentHandleRole::Bezier(side),
            },
        ) => {
            let Some(seg) = s.segment(segment) else {
                return Err(
                    CurveError::invalid_argument(format!("Segment {segment} existiert nicht")).into(),
                );
            };
            let current = state
                .handles
                .get(*handle)
                .map(|h| h.position)
                .unwrap_or(proposed);
            let geometry = BezierDragGeometry {
                origin: seg.bezier_origin(side),
                current,
                start_y: seg.start.y,
                end_y: seg.end.y,
                pixels_per_unit: state.viewport.pixels_per_unit().abs(),
            };
            let (constrained, keep) =
                constraint.constrain(drag_modifiers(modifiers), &geometry, proposed);
            proposed = constrained;
            keep_angle = keep;
        }
        _ => {}
    }

    let target = *target;
    state
        .curve
        .drag_handle(target, proposed, keep_angle, state.options.align_handle)?;
    Ok(())
}

/// Shift rastet ein, Alt hält den Winkel, Strg hält die Länge.
fn drag_modifiers(modifiers: Modifiers) -> DragModifiers {
    DragModifiers {
        snap: modifiers.shift && !modifiers.ctrl,
        lock_angle: modifiers.alt,
        lock_length: modifiers.ctrl && !modifiers.shift,
    }
}

/// Beendet den Drag und löst eingerastete Einschränkungen.
pub fn end_handle_drag(state: &mut EditorState) {
    if let InteractionState::HandleDrag { constraint, .. } = &mut state.interaction {
        constraint.release();
    }
    state.interaction = InteractionState::Idle;
}

/// Beginnt ein Drag-Pan.
pub fn begin_pan(state: &mut EditorState, pointer: DVec2) {
    state.interaction = InteractionState::Pan { last: pointer };
    state.view.transition = None;
}

/// Verschiebt die Ansicht um die Zeigerbewegung seit dem letzten Event.
pub fn pan_to(state: &mut EditorState, pointer: DVec2) -> anyhow::Result<()> {
    let InteractionState::Pan { last } = &mut state.interaction else {
        return Ok(());
    };
    let delta = pointer - *last;
    *last = pointer;
    state.viewport.apply_gesture(ViewGesture::Pan { delta })?;
    Ok(())
}

/// Beendet ein Drag-Pan.
pub fn end_pan(state: &mut EditorState) {
    state.interaction = InteractionState::Idle;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn endpoint_drag_only_moves_vertically() {
        let mut state = EditorState::new();
        let start = state.viewport.graph_to_screen(DVec2::new(1.0, 1.0));
        begin_handle_drag(&mut state, 1, start).expect("Handle vorhanden");
        update_handle_drag(&mut state, start + DVec2::new(-40.0, 60.0), Modifiers::default())
            .expect("gültige Position");
        let Curve::Smooth(s) = &state.curve else {
            panic!("glatte Kurve erwartet");
        };
        assert_relative_eq!(s.points()[1].x, 1.0);
        assert!(s.points()[1].y < 1.0);
    }

    #[test]
    fn grab_offset_prevents_jump() {
        let mut state = EditorState::new();
        let handle = state.viewport.graph_to_screen(DVec2::new(1.0, 1.0));
        let grab = handle + DVec2::new(3.0, 2.0);
        begin_handle_drag(&mut state, 1, grab).expect("Handle vorhanden");
        update_handle_drag(&mut state, grab, Modifiers::default()).expect("gültige Position");
        let Curve::Smooth(s) = &state.curve else {
            panic!("glatte Kurve erwartet");
        };
        assert_relative_eq!(s.points()[1].y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn pan_follows_pointer_delta() {
        let mut state = EditorState::new();
        begin_pan(&mut state, DVec2::new(100.0, 100.0));
        pan_to(&mut state, DVec2::new(110.0, 95.0)).expect("Pan gültig");
        assert_eq!(state.viewport.dynamic().translate, DVec2::new(10.0, -5.0));
        end_pan(&mut state);
        assert!(!state.interaction.is_active());
    }

    #[test]
    fn unknown_handle_is_rejected() {
        let mut state = EditorState::new();
        let err = begin_handle_drag(&mut state, 99, DVec2::ZERO).unwrap_err();
        assert!(err.downcast_ref::<CurveError>().is_some());
        assert!(!state.interaction.is_active());
    }
}
