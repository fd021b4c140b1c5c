//! Zentrale Konfiguration des Kurven-Editors.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte. Die Feldnamen
//! folgen auf dem Draht den Host-Präferenzen (camelCase); die `const`-Werte
//! bleiben als Fallback/Default erhalten.

use crate::core::EditMode;
use serde::{Deserialize, Serialize};

// ── Sampling ────────────────────────────────────────────────────────

/// Standard-Anzahl Samples der Kurven-Polyline.
pub const CURVE_RESOLUTION: usize = 200;
/// Mindestanzahl Samples (Start + Ende).
pub const CURVE_RESOLUTION_MIN: usize = 2;
/// Überstand links/rechts beim Sampling in Pixeln.
pub const SAMPLE_OVERSCAN_PX: f64 = 200.0;

// ── Interaktion ─────────────────────────────────────────────────────

/// Trefferradius von Handles in Screen-Pixeln.
pub const HANDLE_HIT_RADIUS_PX: f64 = 10.0;
/// Zoom-Empfindlichkeit des Mausrads (Faktor = 2^(-delta·s)).
pub const WHEEL_ZOOM_SENSITIVITY: f64 = 0.002;
/// Minimaler Zoom-Faktor.
pub const ZOOM_SCALE_MIN: f64 = 1e-4;
/// Maximaler Zoom-Faktor.
pub const ZOOM_SCALE_MAX: f64 = 1e4;

// ── Animation ───────────────────────────────────────────────────────

/// Dauer animierter Übergänge in Millisekunden.
pub const ANIMATION_DURATION_MS: u64 = 180;
/// Dauer des "Fit to View"-Übergangs in Millisekunden.
pub const FIT_DURATION_MS: u64 = 700;

// ── Darstellung ─────────────────────────────────────────────────────

/// Standard-Kurvenfarbe (Hex).
pub const CURVE_COLOR: &str = "#a0a0ff";
/// Standard-Linienstärke der Kurve in Pixeln.
pub const CURVE_THICKNESS: f32 = 2.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `graph_curve_editor.toml` neben der Binary gespeichert und
/// vom Host per `applyPreferences` überschrieben.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorOptions {
    // ── Kurve ───────────────────────────────────────────────────
    /// Bearbeitungsmodus (wählt die Kurvenvariante)
    pub edit_mode: EditMode,
    /// Anzahl Samples der Polyline
    pub curve_resolution: usize,
    /// Kurvenfarbe als Hex-String
    pub curve_color: String,
    /// Linienstärke in Pixeln
    pub curve_thickness: f32,

    // ── Sichtbarkeit ────────────────────────────────────────────
    pub show_handle: bool,
    pub show_x_label: bool,
    pub show_y_label: bool,

    // ── Hintergrund ─────────────────────────────────────────────
    /// Hintergrundbild anzeigen
    pub set_background_image: bool,
    /// Pfad zum Hintergrundbild
    pub background_image_path: String,
    /// Deckkraft des Hintergrundbilds (0.0..=1.0)
    pub background_image_opacity: f32,

    // ── Animation ───────────────────────────────────────────────
    /// Eased Übergänge statt sofortiger Sprünge
    pub enable_animation: bool,
    pub animation_duration_ms: u64,
    pub fit_duration_ms: u64,

    // ── Interaktion ─────────────────────────────────────────────
    /// Trefferradius für Handles in Screen-Pixeln
    pub handle_hit_radius_px: f64,
    /// Überstand beim Sampling in Pixeln
    pub sample_overscan_px: f64,
    /// Gegenüberliegendes Bézier-Handle beim Ziehen ausrichten
    pub align_handle: bool,
    pub zoom_scale_min: f64,
    pub zoom_scale_max: f64,
    /// Zoom-Empfindlichkeit des Mausrads
    pub wheel_zoom_sensitivity: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            edit_mode: EditMode::Normal,
            curve_resolution: CURVE_RESOLUTION,
            curve_color: CURVE_COLOR.to_string(),
            curve_thickness: CURVE_THICKNESS,

            show_handle: true,
            show_x_label: true,
            show_y_label: true,

            set_background_image: false,
            background_image_path: String::new(),
            background_image_opacity: 1.0,

            enable_animation: true,
            animation_duration_ms: ANIMATION_DURATION_MS,
            fit_duration_ms: FIT_DURATION_MS,

            handle_hit_radius_px: HANDLE_HIT_RADIUS_PX,
            sample_overscan_px: SAMPLE_OVERSCAN_PX,
            align_handle: false,
            zoom_scale_min: ZOOM_SCALE_MIN,
            zoom_scale_max: ZOOM_SCALE_MAX,
            wheel_zoom_sensitivity: WHEEL_ZOOM_SENSITIVITY,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("graph-curve-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("graph_curve_editor.toml")
    }

    /// Klemmt unsinnige Werte auf gültige Bereiche.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.curve_resolution = self.curve_resolution.max(CURVE_RESOLUTION_MIN);
        self.background_image_opacity = if self.background_image_opacity.is_finite() {
            self.background_image_opacity.clamp(0.0, 1.0)
        } else {
            defaults.background_image_opacity
        };
        if !(self.curve_thickness.is_finite() && self.curve_thickness > 0.0) {
            self.curve_thickness = defaults.curve_thickness;
        }
        if !(self.handle_hit_radius_px.is_finite() && self.handle_hit_radius_px >= 0.0) {
            self.handle_hit_radius_px = defaults.handle_hit_radius_px;
        }
        if !(self.sample_overscan_px.is_finite() && self.sample_overscan_px >= 0.0) {
            self.sample_overscan_px = defaults.sample_overscan_px;
        }
        if !self.wheel_zoom_sensitivity.is_finite() {
            self.wheel_zoom_sensitivity = defaults.wheel_zoom_sensitivity;
        }
        let scale_ok = self.zoom_scale_min > 0.0
            && self.zoom_scale_max.is_finite()
            && self.zoom_scale_min <= self.zoom_scale_max;
        if !scale_ok {
            self.zoom_scale_min = defaults.zoom_scale_min;
            self.zoom_scale_max = defaults.zoom_scale_max;
        }
        self
    }

    /// Dauer eines normalen Übergangs in Sekunden (0 bei deaktivierter Animation).
    pub fn transition_seconds(&self) -> f64 {
        self.seconds(self.animation_duration_ms)
    }

    /// Dauer des "Fit to View"-Übergangs in Sekunden.
    pub fn fit_seconds(&self) -> f64 {
        self.seconds(self.fit_duration_ms)
    }

    fn seconds(&self, ms: u64) -> f64 {
        if self.enable_animation {
            ms as f64 / 1000.0
        } else {
            0.0
        }
    }
}
