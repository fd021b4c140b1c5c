//! Editor Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{EditorCommand, EditorEvent, EditorState};
use crate::core::CurveError;
use crate::shared::RenderScene;

/// Orchestriert Host-, Zeiger- und Frame-Events auf den EditorState.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet ein Event über Event->Command Mapping.
    ///
    /// Lehnt das Modell einen Command ab (`CurveError`), werden die
    /// restlichen Commands dieses Events verworfen und der Zustand bleibt
    /// beim letzten gültigen Stand. Andere Fehler werden weitergereicht.
    pub fn handle_event(&mut self, state: &mut EditorState, event: EditorEvent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_event_to_commands(state, event);
        for command in commands {
            if let Err(e) = self.handle_command(state, command) {
                if let Some(rejected) = e.downcast_ref::<CurveError>() {
                    log::debug!("Command abgelehnt: {}", rejected);
                    return Ok(());
                }
                return Err(e);
            }
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem EditorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        command: EditorCommand,
    ) -> anyhow::Result<()> {
        state
            .command_log
            .record(state.edit_mode, state.curve_id, &command);
        use super::handlers;

        match command {
            // === Kurve ===
            EditorCommand::LoadCurve { mode, id } => handlers::curve::load(state, mode, id),
            EditorCommand::ApplyExternalParams { params } => {
                handlers::curve::apply_external_params(state, params)?
            }
            EditorCommand::InsertPoint { x, y } => handlers::curve::insert_point(state, x, y)?,
            EditorCommand::RemovePoint { index } => handlers::curve::remove_point(state, index)?,
            EditorCommand::ResampleCurve => handlers::curve::resample(state),
            EditorCommand::RebuildHandles => handlers::curve::rebuild_handles(state),
            EditorCommand::SyncHandlePositions => handlers::curve::sync_handle_positions(state),

            // === Handle-Drag ===
            EditorCommand::BeginHandleDrag { handle, pointer } => {
                handlers::interaction::begin_handle_drag(state, handle, pointer)?
            }
            EditorCommand::UpdateHandleDrag { pointer, modifiers } => {
                handlers::interaction::update_handle_drag(state, pointer, modifiers)?
            }
            EditorCommand::EndHandleDrag => handlers::interaction::end_handle_drag(state),

            // === Viewport ===
            EditorCommand::SetViewportSize { width, height } => {
                handlers::view::set_viewport_size(state, width, height)?
            }
            EditorCommand::BeginPan { pointer } => handlers::interaction::begin_pan(state, pointer),
            EditorCommand::PanTo { pointer } => handlers::interaction::pan_to(state, pointer)?,
            EditorCommand::EndPan => handlers::interaction::end_pan(state),
            EditorCommand::PanBy { delta } => handlers::view::pan_by(state, delta)?,
            EditorCommand::ZoomAt { factor, focus } => {
                handlers::view::zoom_at(state, factor, focus)?
            }
            EditorCommand::FitView { duration } => handlers::view::fit_view(state, duration),

            // === Darstellung ===
            EditorCommand::BeginTransition { duration } => {
                handlers::view::begin_transition(state, duration)
            }
            EditorCommand::AdvanceAnimation { dt } => handlers::view::advance_animation(state, dt),
            EditorCommand::SetAxisLabelVisibility { show_x, show_y } => {
                handlers::view::set_axis_label_visibility(state, show_x, show_y)
            }
            EditorCommand::SetHandleVisibility { show } => {
                handlers::view::set_handle_visibility(state, show)
            }
            EditorCommand::ApplyOptions { options } => {
                handlers::view::apply_options(state, *options)?
            }

            // === Host ===
            EditorCommand::RequestContextMenu { at } => {
                handlers::host::request_context_menu(state, at)
            }
            EditorCommand::MarkParamsChanged => handlers::host::mark_params_changed(state),
            EditorCommand::FlushParamNotification => {
                handlers::host::flush_param_notification(state)
            }
        }

        Ok(())
    }

    /// Verarbeitet alle Events eines Frames und baut danach die Szene.
    ///
    /// Ein laufender Übergang schreitet um `dt` Sekunden fort. Fehler
    /// einzelner Events werden protokolliert, die übrigen laufen weiter.
    pub fn handle_frame(
        &mut self,
        state: &mut EditorState,
        events: Vec<EditorEvent>,
        dt: f64,
    ) -> RenderScene {
        for event in events {
            if let Err(e) = self.handle_event(state, event) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
        if state.view.transition.is_some() {
            if let Err(e) = self.handle_event(state, EditorEvent::FrameAdvanced { dt }) {
                log::error!("Animation fehlgeschlagen: {:#}", e);
            }
        }
        self.build_render_scene(state)
    }

    /// Baut die RenderScene aus dem aktuellen State.
    pub fn build_render_scene(&self, state: &EditorState) -> RenderScene {
        render_scene::build(state)
    }
}
