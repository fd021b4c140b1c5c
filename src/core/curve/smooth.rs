//! Glatte Kurve: zentripetaler Catmull-Rom-Spline durch beliebig viele Punkte.

use super::point::{ControlPoint, POINT_X_EPSILON};
use super::{CurveShape, HandleAnchor, HandleTarget};
use crate::core::CurveError;
use crate::shared::spline_geometry::{
    catmull_rom_controls, cubic_bezier, end_tangent, slope_of, solve_bezier_t_for_x,
    start_tangent, CENTRIPETAL_ALPHA,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Grenzen für `move_point` / `insert_point`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditBounds {
    /// Endpunkte dürfen nur vertikal verschoben werden
    pub lock_endpoint_x: bool,
    /// Optionales Klemm-Rechteck (min, max) für bearbeitete Punkte
    pub clamp: Option<(DVec2, DVec2)>,
}

impl Default for EditBounds {
    fn default() -> Self {
        Self {
            lock_endpoint_x: true,
            clamp: None,
        }
    }
}

impl EditBounds {
    fn apply(&self, pos: DVec2) -> DVec2 {
        match self.clamp {
            Some((min, max)) => pos.clamp(min, max),
            None => pos,
        }
    }
}

/// Interpolierende Kurve durch eine sortierte Punktliste (mindestens 2 Punkte).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothCurve {
    points: Vec<ControlPoint>,
    #[serde(default)]
    bounds: EditBounds,
}

impl Default for SmoothCurve {
    fn default() -> Self {
        Self {
            points: vec![ControlPoint::new(0.0, 0.0), ControlPoint::new(1.0, 1.0)],
            bounds: EditBounds::default(),
        }
    }
}

impl SmoothCurve {
    /// Mindestanzahl an Punkten.
    pub const MIN_POINTS: usize = 2;

    /// Erstellt eine Kurve aus bereits sortierten Punkten.
    pub fn new(points: Vec<ControlPoint>) -> Result<Self, CurveError> {
        let bounds = EditBounds::default();
        Self::validate(&points, bounds)?;
        Ok(Self { points, bounds })
    }

    /// Setzt die Bearbeitungsgrenzen (Builder-Stil).
    pub fn with_bounds(mut self, bounds: EditBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Aktuelle Bearbeitungsgrenzen.
    pub fn bounds(&self) -> EditBounds {
        self.bounds
    }

    /// Read-only Sicht auf die Punkte.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Eine gültige Kurve ist nie leer; für Clippy-Konsistenz vorhanden.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Ersetzt alle Punkte (z.B. nach externer Änderung durch den Host).
    ///
    /// Es gelten dieselben Regeln wie beim Bearbeiten: x in [0, 1], bei
    /// gesperrten Endpunkten liegen diese auf x = 0 und x = 1.
    pub fn replace_points(&mut self, points: Vec<ControlPoint>) -> Result<(), CurveError> {
        Self::validate(&points, self.bounds)?;
        self.points = points;
        Ok(())
    }

    fn validate(points: &[ControlPoint], bounds: EditBounds) -> Result<(), CurveError> {
        if points.len() < Self::MIN_POINTS {
            return Err(CurveError::invalid_operation(format!(
                "Kurve braucht mindestens {} Punkte, erhalten: {}",
                Self::MIN_POINTS,
                points.len()
            )));
        }
        if let Some(p) = points.iter().find(|p| !p.is_finite()) {
            return Err(CurveError::invalid_argument(format!(
                "nicht-endlicher Punkt ({}, {})",
                p.x, p.y
            )));
        }
        if points
            .windows(2)
            .any(|w| w[1].x - w[0].x < POINT_X_EPSILON)
        {
            return Err(CurveError::invalid_argument(
                "Punkte müssen streng nach x sortiert sein",
            ));
        }
        if let Some(p) = points.iter().find(|p| !(0.0..=1.0).contains(&p.x)) {
            return Err(CurveError::invalid_argument(format!(
                "x={} liegt nicht in [0, 1]",
                p.x
            )));
        }
        let (first, last) = (points[0].x, points[points.len() - 1].x);
        if bounds.lock_endpoint_x && (first != 0.0 || last != 1.0) {
            return Err(CurveError::invalid_argument(format!(
                "Endpunkte müssen auf x=0 und x=1 liegen, erhalten: {first} und {last}"
            )));
        }
        Ok(())
    }

    /// Fügt einen Punkt sortiert ein und gibt seinen Index zurück.
    pub fn insert_point(&mut self, x: f64, y: f64) -> Result<usize, CurveError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(CurveError::invalid_argument("nicht-endliche Koordinate"));
        }
        if x <= 0.0 || x >= 1.0 {
            return Err(CurveError::invalid_argument(format!(
                "x={x} liegt nicht in (0, 1)"
            )));
        }
        if self
            .points
            .iter()
            .any(|p| (p.x - x).abs() < POINT_X_EPSILON)
        {
            return Err(CurveError::invalid_argument(format!(
                "x={x} kollidiert mit einem bestehenden Punkt"
            )));
        }

        let y = self.bounds.apply(DVec2::new(x, y)).y;
        let index = self.points.partition_point(|p| p.x < x);
        self.points.insert(index, ControlPoint::new(x, y));
        Ok(index)
    }

    /// Verschiebt einen Punkt unter Wahrung der x-Reihenfolge.
    pub fn move_point(&mut self, index: usize, new_x: f64, new_y: f64) -> Result<(), CurveError> {
        let last = self.points.len() - 1;
        let Some(current) = self.points.get(index).copied() else {
            return Err(CurveError::invalid_argument(format!(
                "Punkt-Index {index} existiert nicht"
            )));
        };
        if !new_x.is_finite() || !new_y.is_finite() {
            return Err(CurveError::invalid_argument("nicht-endliche Koordinate"));
        }

        let target = self.bounds.apply(DVec2::new(new_x, new_y));
        let is_endpoint = index == 0 || index == last;
        if is_endpoint && self.bounds.lock_endpoint_x && (target.x - current.x).abs() > f64::EPSILON
        {
            return Err(CurveError::invalid_argument(format!(
                "Endpunkt {index} darf nur vertikal verschoben werden"
            )));
        }

        if index > 0 && target.x - self.points[index - 1].x < POINT_X_EPSILON {
            return Err(CurveError::invalid_argument(format!(
                "x={} würde den linken Nachbarn überholen",
                target.x
            )));
        }
        if index < last && self.points[index + 1].x - target.x < POINT_X_EPSILON {
            return Err(CurveError::invalid_argument(format!(
                "x={} würde den rechten Nachbarn überholen",
                target.x
            )));
        }

        self.points[index] = ControlPoint::new(target.x, target.y);
        Ok(())
    }

    /// Entfernt einen Punkt; es bleiben immer mindestens 2 Punkte.
    pub fn remove_point(&mut self, index: usize) -> Result<ControlPoint, CurveError> {
        if self.points.len() <= Self::MIN_POINTS {
            return Err(CurveError::invalid_operation(format!(
                "Kurve muss mindestens {} Punkte behalten",
                Self::MIN_POINTS
            )));
        }
        if index >= self.points.len() {
            return Err(CurveError::invalid_argument(format!(
                "Punkt-Index {index} existiert nicht"
            )));
        }
        if self.bounds.lock_endpoint_x && (index == 0 || index == self.points.len() - 1) {
            return Err(CurveError::invalid_operation(
                "Endpunkte können nicht entfernt werden",
            ));
        }
        Ok(self.points.remove(index))
    }

    /// Bézier-Form des Segments `i` (von Punkt i nach i+1).
    fn segment_bezier(&self, i: usize) -> [DVec2; 4] {
        let n = self.points.len();
        let p1 = self.points[i].position();
        let p2 = self.points[i + 1].position();
        let p0 = if i > 0 { self.points[i - 1].position() } else { p1 };
        let p3 = if i + 2 < n {
            self.points[i + 2].position()
        } else {
            p2
        };
        let (c1, c2) = catmull_rom_controls(p0, p1, p2, p3, CENTRIPETAL_ALPHA);
        [p1, c1, c2, p2]
    }
}

impl CurveShape for SmoothCurve {
    fn evaluate(&self, x: f64) -> f64 {
        if !x.is_finite() {
            return f64::NAN;
        }
        let first = self.points[0];
        let last_index = self.points.len() - 1;
        let last = self.points[last_index];

        // Außerhalb: Tangente am nächsten Endpunkt fortsetzen
        if x <= first.x {
            let [b0, b1, b2, b3] = self.segment_bezier(0);
            return first.y + slope_of(start_tangent(b0, b1, b2, b3)) * (x - first.x);
        }
        if x >= last.x {
            let [b0, b1, b2, b3] = self.segment_bezier(last_index - 1);
            return last.y + slope_of(end_tangent(b0, b1, b2, b3)) * (x - last.x);
        }

        let i = self.points.partition_point(|p| p.x <= x).saturating_sub(1);
        if self.points[i].x == x {
            return self.points[i].y;
        }

        let [b0, b1, b2, b3] = self.segment_bezier(i);
        let t = solve_bezier_t_for_x(b0, b1, b2, b3, x);
        cubic_bezier(b0, b1, b2, b3, t).y
    }

    fn handle_anchors(&self) -> Vec<HandleAnchor> {
        self.points
            .iter()
            .enumerate()
            .map(|(index, p)| HandleAnchor {
                position: p.position(),
                root: None,
                target: HandleTarget::Point { index },
            })
            .collect()
    }
}
