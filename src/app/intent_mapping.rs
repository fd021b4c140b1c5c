//! Mapping von Editor-Events auf mutierende Editor-Commands.

use super::bridge::HostCommand;
use super::gesture::{classify, Gesture, GestureContext, PointerEvent};
use super::state::InteractionState;
use super::{EditorCommand, EditorEvent, EditorState};
use crate::core::{Curve, CurveParams, SegmentKind};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Übersetzt ein `EditorEvent` in eine Sequenz ausführbarer `EditorCommand`s.
pub fn map_event_to_commands(state: &EditorState, event: EditorEvent) -> Vec<EditorCommand> {
    match event {
        EditorEvent::Host(command) => map_host_command(state, command),
        EditorEvent::Pointer(pointer) => map_pointer_event(state, pointer),
        EditorEvent::ViewportResized { width, height } => vec![
            EditorCommand::SetViewportSize { width, height },
            EditorCommand::ResampleCurve,
        ],
        EditorEvent::FitRequested => vec![
            EditorCommand::FitView {
                duration: state.options.fit_seconds(),
            },
            EditorCommand::ResampleCurve,
        ],
        EditorEvent::FrameAdvanced { dt } => {
            if state.view.transition.is_some() {
                vec![EditorCommand::AdvanceAnimation { dt }]
            } else {
                Vec::new()
            }
        }
    }
}

/// Commands nach einer Änderung der Kurvengeometrie.
fn curve_changed(structure_changed: bool) -> [EditorCommand; 4] {
    [
        EditorCommand::ResampleCurve,
        if structure_changed {
            EditorCommand::RebuildHandles
        } else {
            EditorCommand::SyncHandlePositions
        },
        EditorCommand::MarkParamsChanged,
        EditorCommand::FlushParamNotification,
    ]
}

fn map_host_command(state: &EditorState, command: HostCommand) -> Vec<EditorCommand> {
    match command {
        HostCommand::ChangeId { id, edit_mode } => vec![
            EditorCommand::LoadCurve {
                mode: edit_mode.unwrap_or(state.edit_mode),
                id,
            },
            EditorCommand::FitView { duration: 0.0 },
            EditorCommand::RebuildHandles,
            EditorCommand::ResampleCurve,
            EditorCommand::MarkParamsChanged,
            EditorCommand::FlushParamNotification,
        ],
        HostCommand::UpdateCurvePath => vec![
            EditorCommand::ResampleCurve,
            EditorCommand::MarkParamsChanged,
            EditorCommand::FlushParamNotification,
        ],
        HostCommand::UpdateHandles => vec![EditorCommand::RebuildHandles],
        HostCommand::UpdateHandlePos { params } => {
            let mut commands = Vec::new();
            let multi_segment = match &params {
                Some(CurveParams::Segments { segments }) => {
                    segments
                        .iter()
                        .filter(|k| !matches!(k, SegmentKind::Linear))
                        .count()
                        > 1
                }
                Some(CurveParams::Points { .. }) => false,
                None => state.curve.editable_segment_count() > 1,
            };
            if !multi_segment {
                commands.push(EditorCommand::BeginTransition {
                    duration: state.options.transition_seconds(),
                });
            }
            commands.push(EditorCommand::ApplyExternalParams { params });
            commands.extend(curve_changed(multi_segment));
            commands
        }
        HostCommand::UpdateAxisLabelVisibility {
            show_x_label,
            show_y_label,
        } => vec![EditorCommand::SetAxisLabelVisibility {
            show_x: show_x_label,
            show_y: show_y_label,
        }],
        HostCommand::UpdateHandleVisibility { show_handle } => {
            vec![EditorCommand::SetHandleVisibility { show: show_handle }]
        }
        HostCommand::ApplyPreferences { preferences } => {
            let requests_mode = preferences.contains_key("editMode");
            let Some(options) = merge_preferences(&state.options, preferences) else {
                return Vec::new();
            };
            let mode_changed = requests_mode && options.edit_mode != state.edit_mode;
            let mode = options.edit_mode;
            let mut commands = vec![EditorCommand::ApplyOptions {
                options: Box::new(options),
            }];
            if mode_changed {
                commands.push(EditorCommand::LoadCurve {
                    mode,
                    id: state.curve_id,
                });
                commands.push(EditorCommand::RebuildHandles);
            }
            commands.extend([
                EditorCommand::ResampleCurve,
                EditorCommand::MarkParamsChanged,
                EditorCommand::FlushParamNotification,
            ]);
            commands
        }
    }
}

/// Überlagert die aktuellen Optionen mit den übergebenen Präferenzen.
fn merge_preferences(
    current: &EditorOptions,
    preferences: serde_json::Map<String, serde_json::Value>,
) -> Option<EditorOptions> {
    let mut merged = match serde_json::to_value(current) {
        Ok(serde_json::Value::Object(map)) => map,
        Ok(_) => return None,
        Err(e) => {
            log::error!("Optionen nicht serialisierbar: {}", e);
            return None;
        }
    };
    merged.extend(preferences);
    match serde_json::from_value::<EditorOptions>(serde_json::Value::Object(merged)) {
        Ok(options) => Some(options.sanitized()),
        Err(e) => {
            log::debug!("Präferenzen ignoriert: {}", e);
            None
        }
    }
}

fn gesture_context(state: &EditorState, pos: DVec2) -> GestureContext {
    let hit = state
        .handles
        .hit_test(pos, &state.viewport, state.options.handle_hit_radius_px)
        .and_then(|i| state.handles.get(i).map(|h| (i, h.target)));
    let point_count = match &state.curve {
        Curve::Smooth(s) => s.len(),
        Curve::Segment(_) => 0,
    };
    GestureContext {
        hit: if state.view.show_handle { hit } else { None },
        graph_pos: state.viewport.screen_to_graph(pos),
        supports_points: state.curve.supports_arbitrary_points(),
        point_count,
        interacting: state.interaction.is_active(),
        wheel_sensitivity: state.options.wheel_zoom_sensitivity,
    }
}

fn event_position(event: &PointerEvent) -> DVec2 {
    match *event {
        PointerEvent::Down { pos, .. }
        | PointerEvent::Move { pos, .. }
        | PointerEvent::Up { pos, .. }
        | PointerEvent::DoubleClick { pos, .. }
        | PointerEvent::Wheel { pos, .. }
        | PointerEvent::Pinch { pos, .. } => pos,
    }
}

fn map_pointer_event(state: &EditorState, event: PointerEvent) -> Vec<EditorCommand> {
    // Fortsetzung einer laufenden Interaktion
    match (&state.interaction, event) {
        (InteractionState::HandleDrag { .. }, PointerEvent::Move { pos, modifiers }) => {
            let mut commands = vec![EditorCommand::UpdateHandleDrag {
                pointer: pos,
                modifiers,
            }];
            commands.extend(curve_changed(false));
            return commands;
        }
        (InteractionState::HandleDrag { .. }, PointerEvent::Up { .. }) => {
            return vec![
                EditorCommand::EndHandleDrag,
                EditorCommand::FlushParamNotification,
            ];
        }
        (InteractionState::Pan { .. }, PointerEvent::Move { pos, .. }) => {
            return vec![
                EditorCommand::PanTo { pointer: pos },
                EditorCommand::ResampleCurve,
            ];
        }
        (InteractionState::Pan { .. }, PointerEvent::Up { .. }) => {
            return vec![EditorCommand::EndPan];
        }
        _ => {}
    }

    let pos = event_position(&event);
    let gesture = classify(&event, &gesture_context(state, pos));
    match gesture {
        Gesture::PrimaryDrag { handle } => vec![EditorCommand::BeginHandleDrag {
            handle,
            pointer: pos,
        }],
        Gesture::PanDrag => vec![EditorCommand::BeginPan { pointer: pos }],
        Gesture::Zoom { factor, focus } => vec![
            EditorCommand::ZoomAt { factor, focus },
            EditorCommand::ResampleCurve,
        ],
        Gesture::WheelPan { delta } => vec![
            EditorCommand::PanBy { delta },
            EditorCommand::ResampleCurve,
        ],
        Gesture::ContextRequest => vec![EditorCommand::RequestContextMenu { at: pos }],
        Gesture::InsertPoint { at } => {
            let mut commands = vec![
                EditorCommand::BeginTransition {
                    duration: state.options.transition_seconds(),
                },
                EditorCommand::InsertPoint { x: at.x, y: at.y },
            ];
            commands.extend(curve_changed(true));
            commands
        }
        Gesture::RemovePoint { index } => {
            let mut commands = vec![
                EditorCommand::BeginTransition {
                    duration: state.options.transition_seconds(),
                },
                EditorCommand::RemovePoint { index },
            ];
            commands.extend(curve_changed(true));
            commands
        }
        Gesture::Ignore => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::gesture::{Modifiers, PointerButton};
    use crate::core::EditMode;

    #[test]
    fn change_id_reloads_fits_and_rebuilds() {
        let state = EditorState::new();
        let commands = map_event_to_commands(
            &state,
            EditorEvent::Host(HostCommand::ChangeId {
                id: 4,
                edit_mode: None,
            }),
        );
        assert_eq!(
            &commands[..4],
            &[
                EditorCommand::LoadCurve {
                    mode: EditMode::Normal,
                    id: 4
                },
                EditorCommand::FitView { duration: 0.0 },
                EditorCommand::RebuildHandles,
                EditorCommand::ResampleCurve,
            ]
        );
    }

    #[test]
    fn update_handle_pos_animates_single_segment() {
        let mut state = EditorState::new();
        state.curve = EditMode::Bezier.default_curve();
        let commands = map_event_to_commands(
            &state,
            EditorEvent::Host(HostCommand::UpdateHandlePos { params: None }),
        );
        assert!(matches!(
            commands[0],
            EditorCommand::BeginTransition { duration } if duration > 0.0
        ));
        assert!(commands.contains(&EditorCommand::SyncHandlePositions));
    }

    #[test]
    fn update_handle_pos_is_immediate_for_multiple_segments() {
        let state = EditorState::new();
        let params = CurveParams::Segments {
            segments: vec![
                SegmentKind::default_bezier(),
                SegmentKind::default_elastic(),
            ],
        };
        let commands = map_event_to_commands(
            &state,
            EditorEvent::Host(HostCommand::UpdateHandlePos {
                params: Some(params),
            }),
        );
        assert!(!commands
            .iter()
            .any(|c| matches!(c, EditorCommand::BeginTransition { .. })));
        assert!(commands.contains(&EditorCommand::RebuildHandles));
    }

    #[test]
    fn apply_preferences_switches_curve_on_mode_change() {
        let state = EditorState::new();
        let mut prefs = serde_json::Map::new();
        prefs.insert("editMode".into(), 3.into());
        prefs.insert("curveThickness".into(), 4.0.into());
        let commands = map_event_to_commands(
            &state,
            EditorEvent::Host(HostCommand::ApplyPreferences { preferences: prefs }),
        );
        match &commands[0] {
            EditorCommand::ApplyOptions { options } => {
                assert_eq!(options.edit_mode, EditMode::Elastic);
                assert_eq!(options.curve_thickness, 4.0);
                assert_eq!(options.curve_resolution, state.options.curve_resolution);
            }
            other => panic!("ApplyOptions erwartet, erhalten: {other:?}"),
        }
        assert!(commands.contains(&EditorCommand::LoadCurve {
            mode: EditMode::Elastic,
            id: 0
        }));
    }

    #[test]
    fn preferences_without_mode_keep_loaded_curve() {
        let mut state = EditorState::new();
        state.edit_mode = EditMode::Bezier;
        let mut prefs = serde_json::Map::new();
        prefs.insert("curveColor".into(), "#ff0000".into());
        let commands = map_event_to_commands(
            &state,
            EditorEvent::Host(HostCommand::ApplyPreferences { preferences: prefs }),
        );
        assert!(!commands
            .iter()
            .any(|c| matches!(c, EditorCommand::LoadCurve { .. })));
        assert_eq!(
            commands.last(),
            Some(&EditorCommand::FlushParamNotification)
        );
    }

    #[test]
    fn malformed_preferences_are_ignored() {
        let state = EditorState::new();
        let mut prefs = serde_json::Map::new();
        prefs.insert("curveResolution".into(), "viele".into());
        let commands = map_event_to_commands(
            &state,
            EditorEvent::Host(HostCommand::ApplyPreferences { preferences: prefs }),
        );
        assert!(commands.is_empty());
    }

    #[test]
    fn primary_down_on_handle_starts_drag() {
        let state = EditorState::new();
        let handle_screen = state
            .viewport
            .graph_to_screen(state.handles.handles()[1].position);
        let commands = map_event_to_commands(
            &state,
            EditorEvent::Pointer(PointerEvent::Down {
                pos: handle_screen,
                button: PointerButton::Primary,
                modifiers: Modifiers::default(),
            }),
        );
        assert_eq!(
            commands,
            vec![EditorCommand::BeginHandleDrag {
                handle: 1,
                pointer: handle_screen
            }]
        );
    }

    #[test]
    fn hidden_handles_cannot_be_grabbed() {
        let mut state = EditorState::new();
        state.view.show_handle = false;
        let handle_screen = state
            .viewport
            .graph_to_screen(state.handles.handles()[1].position);
        let commands = map_event_to_commands(
            &state,
            EditorEvent::Pointer(PointerEvent::Down {
                pos: handle_screen,
                button: PointerButton::Primary,
                modifiers: Modifiers::default(),
            }),
        );
        assert!(commands.is_empty());
    }

    #[test]
    fn frame_ticks_without_transition_are_dropped() {
        let state = EditorState::new();
        assert!(map_event_to_commands(&state, EditorEvent::FrameAdvanced { dt: 0.016 }).is_empty());
    }
}
