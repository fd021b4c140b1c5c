//! Handler für Kurvenmodell, Abtastung und Handle-Aufbau.

use crate::app::EditorState;
use crate::core::{CurveParams, EditMode};

/// Legt die aktuelle Kurve ab und lädt (Modus, ID).
pub fn load(state: &mut EditorState, mode: EditMode, id: u32) {
    let previous = std::mem::replace(&mut state.curve, state.store.load(mode, id));
    state
        .store
        .store(state.edit_mode, state.curve_id, previous);
    state.edit_mode = mode;
    state.options.edit_mode = mode;
    state.curve_id = id;
    state.interaction = Default::default();
    state.param_dirty = false;
    log::info!("Kurve {} im Modus {:?} geladen", id, mode);
}

/// Übernimmt extern geänderte Parameter; ohne Parameter bleibt das Modell unverändert.
pub fn apply_external_params(
    state: &mut EditorState,
    params: Option<CurveParams>,
) -> anyhow::Result<()> {
    if let Some(params) = params {
        state.curve.apply_params(&params)?;
    }
    Ok(())
}

/// Fügt einen Kontrollpunkt an der Graph-Position ein.
pub fn insert_point(state: &mut EditorState, x: f64, y: f64) -> anyhow::Result<()> {
    let index = state.curve.insert_point(x, y)?;
    log::debug!("Punkt {} bei ({:.3}, {:.3}) eingefügt", index, x, y);
    Ok(())
}

/// Entfernt einen Kontrollpunkt.
pub fn remove_point(state: &mut EditorState, index: usize) -> anyhow::Result<()> {
    let removed = state.curve.remove_point(index)?;
    log::debug!("Punkt {} ({:.3}, {:.3}) entfernt", index, removed.x, removed.y);
    Ok(())
}

/// Tastet die Kurve im sichtbaren Bereich neu ab.
pub fn resample(state: &mut EditorState) {
    state.resample();
}

/// Baut die Handles aus dem Modell neu auf.
pub fn rebuild_handles(state: &mut EditorState) {
    state.handles.rebuild(&state.curve);
}

/// Führt Handle-Positionen nach; bei Strukturänderung wird neu aufgebaut.
pub fn sync_handle_positions(state: &mut EditorState) {
    if state.handles.refresh_positions(&state.curve) {
        log::debug!("Handle-Struktur geändert, Handles neu aufgebaut");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CurveParams;

    #[test]
    fn load_keeps_previous_curve_in_store() {
        let mut state = EditorState::new();
        state.curve.insert_point(0.5, 0.8).expect("einfügbar");
        load(&mut state, EditMode::Bezier, 3);
        assert_eq!(state.edit_mode, EditMode::Bezier);
        assert_eq!(state.options.edit_mode, EditMode::Bezier);
        assert_eq!(state.curve_id, 3);
        assert!(!state.curve.supports_arbitrary_points());

        load(&mut state, EditMode::Normal, 0);
        match state.curve.params() {
            CurveParams::Points { points } => assert_eq!(points.len(), 3),
            other => panic!("Punkte erwartet: {other:?}"),
        }
    }

    #[test]
    fn mismatched_params_leave_curve_untouched() {
        let mut state = EditorState::new();
        let before = state.curve.params();
        let result = apply_external_params(
            &mut state,
            Some(CurveParams::Segments {
                segments: vec![crate::core::SegmentKind::default_bounce()],
            }),
        );
        assert!(result.is_err());
        assert_eq!(state.curve.params(), before);
    }
}
