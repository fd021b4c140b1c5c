//! Graph Curve Editor.
//!
//! Interaktiver Editor für eine parametrische 1D-Antwortkurve. Der Host
//! schickt JSON-Kommandos zeilenweise über stdin, Meldungen gehen
//! zeilenweise über stdout. Logs landen auf stderr.

use eframe::egui;
use graph_curve_editor::{
    ui, CommandBridge, EditorController, EditorEvent, EditorOptions, EditorState, HostCommand,
};
use std::io::{BufRead, Write};
use std::sync::mpsc;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Graph Curve Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([800.0, 600.0])
                .with_title("Graph Curve Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Graph Curve Editor",
            options,
            Box::new(|cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(EditorApp::new(cc.egui_ctx.clone())))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: EditorState,
    controller: EditorController,
    input: ui::InputState,
    host_rx: mpsc::Receiver<String>,
}

impl EditorApp {
    fn new(ctx: egui::Context) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: EditorState::with_options(editor_options),
            controller: EditorController::new(),
            input: ui::InputState::new(),
            host_rx: spawn_host_reader(ctx),
        }
    }
}

fn is_preference_update(event: &EditorEvent) -> bool {
    matches!(event, EditorEvent::Host(HostCommand::ApplyPreferences { .. }))
}

/// Liest Host-Nachrichten zeilenweise von stdin in einem eigenen Thread.
fn spawn_host_reader(ctx: egui::Context) -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line).is_err() {
                break;
            }
            ctx.request_repaint();
        }
        log::info!("Host-Kanal geschlossen");
    });
    rx
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let host_events = self.collect_host_events();

        let (has_meaningful_events, fit_clicked) = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                // Erst Events dieses Frames verarbeiten, dann zeichnen
                let mut events = host_events;
                events.extend(self.input.collect_viewport_events(ui, &response));
                let has_meaningful_events = events
                    .iter()
                    .any(|e| !matches!(e, EditorEvent::ViewportResized { .. }));
                let persist = events.iter().any(is_preference_update);
                let dt = ctx.input(|i| f64::from(i.stable_dt));
                let scene = self.controller.handle_frame(&mut self.state, events, dt);
                if persist {
                    self.save_options();
                }

                ui::paint_scene(&ui.painter_at(rect), rect, &scene);
                let fit_clicked = ui::render_fit_button(ui, rect, scene.show_fit_button);

                (has_meaningful_events, fit_clicked)
            })
            .inner;

        // Der Klick wird erst nach dem Zeichnen des Buttons bekannt
        if fit_clicked {
            if let Err(e) = self
                .controller
                .handle_event(&mut self.state, EditorEvent::FitRequested)
            {
                log::error!("Einpassen fehlgeschlagen: {:#}", e);
            }
        }

        self.flush_notifications();

        self.maybe_request_repaint(ctx, has_meaningful_events || fit_clicked);
    }
}

impl EditorApp {
    fn collect_host_events(&mut self) -> Vec<EditorEvent> {
        self.host_rx
            .try_iter()
            .filter_map(|line| CommandBridge::decode(&line))
            .map(EditorEvent::Host)
            .collect()
    }

    fn save_options(&self) {
        if let Err(e) = self.state.options.save_to_file(&EditorOptions::config_path()) {
            log::warn!("Optionen nicht gespeichert: {:#}", e);
        }
    }

    /// Schreibt wartende Host-Meldungen als JSON-Zeilen auf stdout.
    fn flush_notifications(&mut self) {
        let notifications = self.state.bridge.drain();
        if notifications.is_empty() {
            return;
        }
        let mut stdout = std::io::stdout().lock();
        for notification in notifications {
            match notification.encode() {
                Ok(line) => {
                    if let Err(e) = writeln!(stdout, "{}", line) {
                        log::error!("Host-Meldung nicht gesendet: {}", e);
                    }
                }
                Err(e) => log::error!("Host-Meldung nicht kodierbar: {:#}", e),
            }
        }
        if let Err(e) = stdout.flush() {
            log::error!("stdout flush fehlgeschlagen: {}", e);
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.view.transition.is_some()
        {
            ctx.request_repaint();
        }
    }
}
