//! Viewport-Input-Handling: egui-Eingaben → `EditorEvent`.
//!
//! Positionen werden relativ zur linken oberen Viewport-Ecke übergeben.
//! Die Klassifikation in Gesten übernimmt die App-Schicht.

use crate::app::{EditorEvent, Modifiers, PointerButton, PointerEvent};
use eframe::egui;
use glam::DVec2;

/// Verwaltet den Input-Zustand für das Viewport.
#[derive(Default)]
pub struct InputState {
    /// Taste, deren Druck im Viewport begann
    pressed: Option<PointerButton>,
    /// Zuletzt gemeldete Viewport-Größe
    last_size: Option<egui::Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<EditorEvent> {
        let rect = response.rect;
        let mut events = Vec::new();

        let size = rect.size();
        if self.last_size != Some(size) {
            self.last_size = Some(size);
            events.push(EditorEvent::ViewportResized {
                width: f64::from(size.x),
                height: f64::from(size.y),
            });
        }

        if response.hovered() && ui.input(|i| i.key_pressed(egui::Key::Home)) {
            events.push(EditorEvent::FitRequested);
        }

        let local = |pos: egui::Pos2| {
            let p = pos - rect.min;
            DVec2::new(f64::from(p.x), f64::from(p.y))
        };
        let (raw_events, current_modifiers) = ui.input(|i| (i.events.clone(), i.modifiers));

        for event in raw_events {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed,
                    modifiers,
                    ..
                } => {
                    let Some(button) = map_button(button) else {
                        continue;
                    };
                    if pressed && self.pressed.is_none() && rect.contains(pos) {
                        self.pressed = Some(button);
                        events.push(EditorEvent::Pointer(PointerEvent::Down {
                            pos: local(pos),
                            button,
                            modifiers: map_modifiers(modifiers),
                        }));
                    } else if !pressed && self.pressed == Some(button) {
                        self.pressed = None;
                        events.push(EditorEvent::Pointer(PointerEvent::Up {
                            pos: local(pos),
                            button,
                        }));
                    }
                }
                egui::Event::PointerMoved(pos) if self.pressed.is_some() => {
                    events.push(EditorEvent::Pointer(PointerEvent::Move {
                        pos: local(pos),
                        modifiers: map_modifiers(current_modifiers),
                    }));
                }
                _ => {}
            }
        }

        if response.double_clicked_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(EditorEvent::Pointer(PointerEvent::DoubleClick {
                    pos: local(pos),
                    button: PointerButton::Primary,
                }));
            }
        }

        self.collect_scroll(ui, response, &local, &mut events);
        events
    }

    /// Mausrad und Pinch auf die aktuelle Mausposition.
    fn collect_scroll(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        local: &dyn Fn(egui::Pos2) -> DVec2,
        events: &mut Vec<EditorEvent>,
    ) {
        let Some(hover) = response.hover_pos() else {
            return;
        };
        let (scroll, zoom, modifiers) =
            ui.input(|i| (i.raw_scroll_delta, i.zoom_delta(), i.modifiers));
        events.extend(
            scroll_event(local(hover), scroll, zoom, map_modifiers(modifiers))
                .map(EditorEvent::Pointer),
        );
    }
}

/// Rad- oder Zoom-Eingabe eines Frames als höchstens ein Zeiger-Event.
///
/// egui meldet Strg+Rad und Touch-Pinch als Zoom-Faktor, das Scroll-Delta
/// desselben Frames gehört dann zur Zoom-Geste.
fn scroll_event(
    pos: DVec2,
    scroll: egui::Vec2,
    zoom: f32,
    modifiers: Modifiers,
) -> Option<PointerEvent> {
    if (zoom - 1.0).abs() > f32::EPSILON {
        return Some(PointerEvent::Pinch {
            pos,
            factor: f64::from(zoom),
        });
    }
    (scroll != egui::Vec2::ZERO).then(|| PointerEvent::Wheel {
        pos,
        // egui: positiv = nach oben; hier: positiv = nach unten
        delta: DVec2::new(-f64::from(scroll.x), -f64::from(scroll.y)),
        modifiers,
    })
}

fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

fn map_modifiers(modifiers: egui::Modifiers) -> Modifiers {
    Modifiers {
        shift: modifiers.shift,
        ctrl: modifiers.ctrl || modifiers.command,
        alt: modifiers.alt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_counts_as_ctrl() {
        let m = map_modifiers(egui::Modifiers {
            command: true,
            ..Default::default()
        });
        assert!(m.ctrl);
        assert!(!m.shift);
    }

    #[test]
    fn ctrl_wheel_zooms_without_panning() {
        let ctrl = Modifiers {
            ctrl: true,
            ..Default::default()
        };
        let event = scroll_event(DVec2::new(10.0, 20.0), egui::vec2(0.0, 50.0), 1.2, ctrl);
        assert!(matches!(
            event,
            Some(PointerEvent::Pinch { factor, .. }) if (factor - 1.2).abs() < 1e-6
        ));
    }

    #[test]
    fn plain_wheel_is_forwarded_inverted() {
        let event = scroll_event(DVec2::ZERO, egui::vec2(0.0, 50.0), 1.0, Modifiers::default());
        assert!(matches!(
            event,
            Some(PointerEvent::Wheel { delta, .. }) if delta == DVec2::new(0.0, -50.0)
        ));
        assert!(scroll_event(DVec2::ZERO, egui::Vec2::ZERO, 1.0, Modifiers::default()).is_none());
    }

    #[test]
    fn extra_buttons_are_ignored() {
        assert_eq!(map_button(egui::PointerButton::Extra1), None);
        assert_eq!(
            map_button(egui::PointerButton::Middle),
            Some(PointerButton::Middle)
        );
    }
}
