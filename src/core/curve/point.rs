//! Kontrollpunkt im Graph-Raum.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Minimaler x-Abstand zweier Kontrollpunkte; darunter gelten sie als kollidierend.
pub const POINT_X_EPSILON: f64 = 1e-6;

/// Ein Kontrollpunkt der Kurve (x ∈ [0, 1], y unbeschränkt).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Eingangswert (normalisiert)
    pub x: f64,
    /// Ausgangswert (nominal [0, 1], während der Bearbeitung nicht geklemmt)
    pub y: f64,
}

impl ControlPoint {
    /// Erstellt einen neuen Kontrollpunkt.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Position als Vektor.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Gibt `true` zurück, wenn beide Koordinaten endlich sind.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for ControlPoint {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for ControlPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
