//! Segment-Kurve: eine Folge unabhängig parametrisierter Teilkurven.
//!
//! Jedes Segment verläuft von `start` nach `end` und bildet den lokalen
//! Fortschritt t ∈ [0, 1] auf eine normierte Ausgabe s(t) ab
//! (s(0) = 0, s(1) = 1). Handles ändern ausschließlich die Parameter
//! ihres Segments, nie die Ankerpunkte.

use super::{CurveShape, HandleAnchor, HandleTarget, SegmentHandleRole};
use crate::core::CurveError;
use crate::shared::spline_geometry::{cubic_bezier, solve_bezier_t_for_x};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Frequenzbereich der Elastic-Schwingung (Schwingungen pro Segment).
pub const ELASTIC_FREQUENCY_RANGE: (f64, f64) = (0.75, 20.0);
/// Bereich der Elastic-Dämpfung.
pub const ELASTIC_DECAY_RANGE: (f64, f64) = (0.0, 50.0);
/// Bereich der Bounce-Anzahl.
pub const BOUNCE_COUNT_RANGE: (f64, f64) = (0.75, 10.0);
/// Bereich des Bounce-Dämpfungsexponenten.
pub const BOUNCE_DAMPING_RANGE: (f64, f64) = (0.1, 20.0);

/// Minimaler Höhenunterschied eines Segments, ab dem Handles y-Parameter steuern.
const MIN_SEGMENT_RISE: f64 = 1e-9;

/// Kubische Bézier-Parameter als Offsets relativ zu den Ankern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierParams {
    /// Offset des linken Handles relativ zu `start`
    pub left: DVec2,
    /// Offset des rechten Handles relativ zu `end`
    pub right: DVec2,
}

/// Gedämpfte Schwingung um den Zielwert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElasticParams {
    /// Schwingungen über die Segmentbreite
    pub frequency: f64,
    /// Exponentielle Dämpfung
    pub decay: f64,
}

/// Abprallen am Zielwert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BounceParams {
    /// Anzahl der (kontinuierlichen) Aufpraller
    pub bounces: f64,
    /// Exponent, mit dem die Sprunghöhe abnimmt
    pub damping: f64,
}

/// Interpolationsregel eines Segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SegmentKind {
    /// Gerade, keine Handles
    Linear,
    /// Kubische Bézier-Kurve, zwei Handles
    Bezier(BezierParams),
    /// Elastische Schwingung, ein Handle
    Elastic(ElasticParams),
    /// Abprallen, ein Handle
    Bounce(BounceParams),
}

impl SegmentKind {
    /// Standard-Bézier (ease-in-out).
    pub fn default_bezier() -> Self {
        Self::Bezier(BezierParams {
            left: DVec2::new(0.42, 0.0),
            right: DVec2::new(-0.42, 0.0),
        })
    }

    /// Standard-Elastic.
    pub fn default_elastic() -> Self {
        Self::Elastic(ElasticParams {
            frequency: 2.5,
            decay: 3.0,
        })
    }

    /// Standard-Bounce.
    pub fn default_bounce() -> Self {
        Self::Bounce(BounceParams {
            bounces: 3.0,
            damping: 1.5,
        })
    }
}

/// Seite eines Bézier-Handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BezierSide {
    /// Handle am Startanker
    Left,
    /// Handle am Endanker
    Right,
}

/// Ein Segment zwischen zwei Ankern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSegment {
    /// Startanker
    pub start: DVec2,
    /// Endanker
    pub end: DVec2,
    /// Interpolationsregel
    pub kind: SegmentKind,
}

impl CurveSegment {
    /// Erstellt ein Segment.
    pub fn new(start: DVec2, end: DVec2, kind: SegmentKind) -> Self {
        Self { start, end, kind }
    }

    fn width(&self) -> f64 {
        self.end.x - self.start.x
    }

    fn rise(&self) -> f64 {
        self.end.y - self.start.y
    }

    /// Wertet das Segment an einem x innerhalb seiner Breite aus.
    pub fn evaluate(&self, x: f64) -> f64 {
        let x = x.clamp(self.start.x, self.end.x);
        if x == self.start.x {
            return self.start.y;
        }
        if x == self.end.x {
            return self.end.y;
        }
        let t = (x - self.start.x) / self.width();
        match self.kind {
            SegmentKind::Linear => self.start.y + self.rise() * t,
            SegmentKind::Bezier(p) => {
                let [b0, b1, b2, b3] = self.bezier_points(p);
                let u = solve_bezier_t_for_x(b0, b1, b2, b3, x);
                cubic_bezier(b0, b1, b2, b3, u).y
            }
            SegmentKind::Elastic(p) => self.start.y + self.rise() * elastic_progress(p, t),
            SegmentKind::Bounce(p) => self.start.y + self.rise() * bounce_progress(p, t),
        }
    }

    fn bezier_points(&self, p: BezierParams) -> [DVec2; 4] {
        [self.start, self.start + p.left, self.end + p.right, self.end]
    }

    /// Absolute Position eines Bézier-Handles, falls das Segment eines hat.
    pub fn bezier_handle(&self, side: BezierSide) -> Option<DVec2> {
        match (self.kind, side) {
            (SegmentKind::Bezier(p), BezierSide::Left) => Some(self.start + p.left),
            (SegmentKind::Bezier(p), BezierSide::Right) => Some(self.end + p.right),
            _ => None,
        }
    }

    /// Anker, an dem ein Bézier-Handle hängt.
    pub fn bezier_origin(&self, side: BezierSide) -> DVec2 {
        match side {
            BezierSide::Left => self.start,
            BezierSide::Right => self.end,
        }
    }

    /// Setzt den Offset eines Bézier-Handles; x wird auf die Segmentbreite begrenzt.
    ///
    /// Mit `keep_angle` wird y beim Kürzen proportional mitskaliert.
    pub fn set_bezier_offset(
        &mut self,
        side: BezierSide,
        offset: DVec2,
        keep_angle: bool,
    ) -> Result<(), CurveError> {
        if !offset.is_finite() {
            return Err(CurveError::invalid_argument("nicht-endlicher Handle-Offset"));
        }
        let width = match side {
            BezierSide::Left => self.width(),
            BezierSide::Right => -self.width(),
        };
        let limited = limit_range(offset, width, keep_angle);
        match (&mut self.kind, side) {
            (SegmentKind::Bezier(p), BezierSide::Left) => p.left = limited,
            (SegmentKind::Bezier(p), BezierSide::Right) => p.right = limited,
            _ => {
                return Err(CurveError::invalid_argument(
                    "Segment hat keine Bézier-Handles",
                ))
            }
        }
        Ok(())
    }

    /// Position des Form-Handles (Elastic/Bounce).
    pub fn shape_handle(&self) -> Option<DVec2> {
        let t = match self.kind {
            SegmentKind::Elastic(p) => elastic_handle_t(p),
            SegmentKind::Bounce(p) => bounce_handle_t(p),
            _ => return None,
        };
        let x = self.start.x + self.width() * t;
        Some(DVec2::new(x, self.evaluate(x)))
    }

    /// Leitet Elastic-/Bounce-Parameter aus einer Handle-Position ab.
    pub fn set_shape_handle(&mut self, pos: DVec2) -> Result<(), CurveError> {
        if !pos.is_finite() {
            return Err(CurveError::invalid_argument("nicht-endliche Handle-Position"));
        }
        let t = (pos.x - self.start.x) / self.width();
        let rise = self.rise();
        let progress = (rise.abs() > MIN_SEGMENT_RISE).then(|| (pos.y - self.start.y) / rise);

        match &mut self.kind {
            SegmentKind::Elastic(p) => {
                let (f_min, f_max) = ELASTIC_FREQUENCY_RANGE;
                p.frequency = (0.5 / t.max(f64::EPSILON)).clamp(f_min, f_max);
                if let Some(s) = progress {
                    let t_h = elastic_handle_t(*p);
                    let overshoot = s - 1.0;
                    let (d_min, d_max) = ELASTIC_DECAY_RANGE;
                    p.decay = if overshoot <= 0.0 {
                        d_max
                    } else {
                        (-(overshoot / (1.0 - t_h)).ln() / t_h).clamp(d_min, d_max)
                    };
                }
            }
            SegmentKind::Bounce(p) => {
                let (b_min, b_max) = BOUNCE_COUNT_RANGE;
                p.bounces = (1.0 / t.max(f64::EPSILON) - 0.5).clamp(b_min, b_max);
                if let Some(s) = progress {
                    let t_h = bounce_handle_t(*p);
                    let remaining = 1.0 - s;
                    let (k_min, k_max) = BOUNCE_DAMPING_RANGE;
                    p.damping = if remaining <= 0.0 {
                        k_max
                    } else if remaining >= 1.0 {
                        k_min
                    } else {
                        (remaining.ln() / (1.0 - t_h).ln()).clamp(k_min, k_max)
                    };
                }
            }
            _ => {
                return Err(CurveError::invalid_argument(
                    "Segment hat kein Form-Handle",
                ))
            }
        }
        Ok(())
    }
}

impl CurveSegment {
    /// Begrenzt Parameter auf die Wertebereiche, die Handles erreichen können.
    fn limit_kind(&self, kind: SegmentKind) -> Result<SegmentKind, CurveError> {
        let limited = match kind {
            SegmentKind::Linear => SegmentKind::Linear,
            SegmentKind::Bezier(p) => {
                if !p.left.is_finite() || !p.right.is_finite() {
                    return Err(CurveError::invalid_argument("nicht-endlicher Handle-Offset"));
                }
                SegmentKind::Bezier(BezierParams {
                    left: limit_range(p.left, self.width(), false),
                    right: limit_range(p.right, -self.width(), false),
                })
            }
            SegmentKind::Elastic(p) => {
                if !p.frequency.is_finite() || !p.decay.is_finite() {
                    return Err(CurveError::invalid_argument("nicht-endliche Elastic-Parameter"));
                }
                let (f_min, f_max) = ELASTIC_FREQUENCY_RANGE;
                let (d_min, d_max) = ELASTIC_DECAY_RANGE;
                SegmentKind::Elastic(ElasticParams {
                    frequency: p.frequency.clamp(f_min, f_max),
                    decay: p.decay.clamp(d_min, d_max),
                })
            }
            SegmentKind::Bounce(p) => {
                if !p.bounces.is_finite() || !p.damping.is_finite() {
                    return Err(CurveError::invalid_argument("nicht-endliche Bounce-Parameter"));
                }
                let (b_min, b_max) = BOUNCE_COUNT_RANGE;
                let (k_min, k_max) = BOUNCE_DAMPING_RANGE;
                SegmentKind::Bounce(BounceParams {
                    bounces: p.bounces.clamp(b_min, b_max),
                    damping: p.damping.clamp(k_min, k_max),
                })
            }
        };
        Ok(limited)
    }
}

/// Begrenzt einen Handle-Offset auf die Segmentbreite (vorzeichenbehaftet).
///
/// Liegt der Offset auf der falschen Seite, fällt x auf 0; ist er breiter
/// als das Segment, wird x auf die Breite gekürzt.
pub fn limit_range(mut offset: DVec2, width: f64, keep_angle: bool) -> DVec2 {
    if offset.x * width.signum() < 0.0 {
        offset.x = 0.0;
    } else if width.abs() < offset.x.abs() {
        let original = offset.x;
        offset.x = width;
        if keep_angle {
            offset.y *= width / original;
        }
    }
    offset
}

/// s(t) = 1 − (1−t)·e^(−decay·t)·cos(2π·frequency·t)
pub fn elastic_progress(p: ElasticParams, t: f64) -> f64 {
    1.0 - (1.0 - t) * (-p.decay * t).exp() * (2.0 * PI * p.frequency * t).cos()
}

/// s(t) = 1 − |cos(π·(bounces + ½)·t)|·(1−t)^damping
pub fn bounce_progress(p: BounceParams, t: f64) -> f64 {
    1.0 - (PI * (p.bounces + 0.5) * t).cos().abs() * (1.0 - t).max(0.0).powf(p.damping)
}

/// Erstes Überschwingen: halbe Periode.
fn elastic_handle_t(p: ElasticParams) -> f64 {
    0.5 / p.frequency
}

/// Scheitel des ersten Rückpralls.
fn bounce_handle_t(p: BounceParams) -> f64 {
    1.0 / (p.bounces + 0.5)
}

/// Kurve aus zusammenhängenden Segmenten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentCurve {
    segments: Vec<CurveSegment>,
}

impl SegmentCurve {
    /// Erstellt eine Segment-Kurve; Segmente müssen lückenlos und nach x sortiert sein.
    pub fn new(segments: Vec<CurveSegment>) -> Result<Self, CurveError> {
        if segments.is_empty() {
            return Err(CurveError::invalid_operation(
                "Segment-Kurve braucht mindestens ein Segment",
            ));
        }
        for (i, seg) in segments.iter().enumerate() {
            if !seg.start.is_finite() || !seg.end.is_finite() {
                return Err(CurveError::invalid_argument(format!(
                    "Segment {i} hat nicht-endliche Anker"
                )));
            }
            if seg.end.x - seg.start.x <= f64::EPSILON {
                return Err(CurveError::invalid_argument(format!(
                    "Segment {i} hat keine positive Breite"
                )));
            }
        }
        if segments.windows(2).any(|w| w[0].end != w[1].start) {
            return Err(CurveError::invalid_argument(
                "Segmente müssen lückenlos aneinander anschließen",
            ));
        }
        Ok(Self { segments })
    }

    /// Einzelnes Segment von (0,0) nach (1,1).
    pub fn single(kind: SegmentKind) -> Self {
        Self {
            segments: vec![CurveSegment::new(DVec2::ZERO, DVec2::ONE, kind)],
        }
    }

    /// Read-only Sicht auf die Segmente.
    pub fn segments(&self) -> &[CurveSegment] {
        &self.segments
    }

    /// Anzahl der Segmente mit mindestens einem Handle.
    pub fn editable_segment_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| !matches!(s.kind, SegmentKind::Linear))
            .count()
    }

    /// Mutable Zugriff auf ein Segment.
    pub fn segment_mut(&mut self, index: usize) -> Result<&mut CurveSegment, CurveError> {
        let count = self.segments.len();
        self.segments.get_mut(index).ok_or_else(|| {
            CurveError::invalid_argument(format!(
                "Segment-Index {index} existiert nicht ({count} Segmente)"
            ))
        })
    }

    /// Read-only Zugriff auf ein Segment.
    pub fn segment(&self, index: usize) -> Option<&CurveSegment> {
        self.segments.get(index)
    }

    /// Übernimmt die Parameter (nicht die Anker) aus einer anderen Segmentliste.
    ///
    /// Externe Werte durchlaufen dieselben Grenzen wie Handle-Drags.
    pub fn replace_kinds(&mut self, kinds: &[SegmentKind]) -> Result<(), CurveError> {
        if kinds.len() != self.segments.len() {
            return Err(CurveError::invalid_argument(format!(
                "{} Parametersätze für {} Segmente",
                kinds.len(),
                self.segments.len()
            )));
        }
        let mut next = self.segments.clone();
        for (i, (seg, kind)) in next.iter_mut().zip(kinds).enumerate() {
            if std::mem::discriminant(&seg.kind) != std::mem::discriminant(kind) {
                return Err(CurveError::invalid_argument(format!(
                    "Segment {i}: Parametertyp passt nicht"
                )));
            }
            seg.kind = seg.limit_kind(*kind).map_err(|e| {
                CurveError::invalid_argument(format!("Segment {i}: {e}"))
            })?;
        }
        self.segments = next;
        Ok(())
    }
}

impl CurveShape for SegmentCurve {
    fn evaluate(&self, x: f64) -> f64 {
        let index = self
            .segments
            .partition_point(|s| s.end.x < x)
            .min(self.segments.len() - 1);
        self.segments[index].evaluate(x)
    }

    fn handle_anchors(&self) -> Vec<HandleAnchor> {
        let mut anchors = Vec::new();
        for (segment, seg) in self.segments.iter().enumerate() {
            match seg.kind {
                SegmentKind::Linear => {}
                SegmentKind::Bezier(p) => {
                    anchors.push(HandleAnchor {
                        position: seg.start + p.left,
                        root: Some(seg.start),
                        target: HandleTarget::Segment {
                            segment,
                            role: SegmentHandleRole::Bezier(BezierSide::Left),
                        },
                    });
                    anchors.push(HandleAnchor {
                        position: seg.end + p.right,
                        root: Some(seg.end),
                        target: HandleTarget::Segment {
                            segment,
                            role: SegmentHandleRole::Bezier(BezierSide::Right),
                        },
                    });
                }
                SegmentKind::Elastic(_) | SegmentKind::Bounce(_) => {
                    if let Some(position) = seg.shape_handle() {
                        anchors.push(HandleAnchor {
                            position,
                            root: None,
                            target: HandleTarget::Segment {
                                segment,
                                role: SegmentHandleRole::Shape,
                            },
                        });
                    }
                }
            }
        }
        anchors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn progress_functions_hit_endpoints() {
        let e = ElasticParams {
            frequency: 2.5,
            decay: 3.0,
        };
        assert_relative_eq!(elastic_progress(e, 0.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(elastic_progress(e, 1.0), 1.0, epsilon = 1e-12);

        let b = BounceParams {
            bounces: 3.0,
            damping: 1.5,
        };
        assert_relative_eq!(bounce_progress(b, 0.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(bounce_progress(b, 1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn linear_bezier_is_identity() {
        let curve = SegmentCurve::single(SegmentKind::Bezier(BezierParams {
            left: DVec2::new(0.25, 0.25),
            right: DVec2::new(-0.25, -0.25),
        }));
        for x in [0.0, 0.1, 0.5, 0.77, 1.0] {
            assert_relative_eq!(curve.evaluate(x), x, epsilon = 1e-9);
        }
    }

    #[test]
    fn limit_range_clips_wrong_side_and_overlong_offsets() {
        // Falsche Seite → x = 0
        let o = limit_range(DVec2::new(-0.2, 0.4), 1.0, false);
        assert_eq!(o, DVec2::new(0.0, 0.4));
        // Zu lang → auf Breite kürzen, y mit Winkel mitskalieren
        let o = limit_range(DVec2::new(2.0, 1.0), 1.0, true);
        assert_relative_eq!(o.x, 1.0);
        assert_relative_eq!(o.y, 0.5);
        // Rechte Seite hat negative Breite
        let o = limit_range(DVec2::new(0.3, 0.1), -1.0, false);
        assert_eq!(o.x, 0.0);
    }

    #[test]
    fn bezier_handle_drag_only_changes_params() {
        let mut curve = SegmentCurve::single(SegmentKind::default_bezier());
        let seg = curve.segment_mut(0).expect("Segment 0");
        seg.set_bezier_offset(BezierSide::Left, DVec2::new(0.3, 0.8), false)
            .expect("Offset setzen");
        assert_eq!(seg.start, DVec2::ZERO);
        assert_eq!(seg.end, DVec2::ONE);
        assert_eq!(seg.bezier_handle(BezierSide::Left), Some(DVec2::new(0.3, 0.8)));
    }

    #[test]
    fn elastic_handle_round_trips_parameters() {
        let mut curve = SegmentCurve::single(SegmentKind::default_elastic());
        let seg = curve.segment_mut(0).expect("Segment 0");
        let handle = seg.shape_handle().expect("Elastic hat ein Handle");
        let before = seg.kind;
        seg.set_shape_handle(handle).expect("Handle setzen");
        match (before, seg.kind) {
            (SegmentKind::Elastic(a), SegmentKind::Elastic(b)) => {
                assert_relative_eq!(a.frequency, b.frequency, epsilon = 1e-9);
                assert_relative_eq!(a.decay, b.decay, epsilon = 1e-9);
            }
            other => panic!("unerwartete Segmentart: {other:?}"),
        }
    }

    #[test]
    fn bounce_handle_round_trips_parameters() {
        let mut curve = SegmentCurve::single(SegmentKind::default_bounce());
        let seg = curve.segment_mut(0).expect("Segment 0");
        let handle = seg.shape_handle().expect("Bounce hat ein Handle");
        let before = seg.kind;
        seg.set_shape_handle(handle).expect("Handle setzen");
        match (before, seg.kind) {
            (SegmentKind::Bounce(a), SegmentKind::Bounce(b)) => {
                assert_relative_eq!(a.bounces, b.bounces, epsilon = 1e-9);
                assert_relative_eq!(a.damping, b.damping, epsilon = 1e-9);
            }
            other => panic!("unerwartete Segmentart: {other:?}"),
        }
    }

    #[test]
    fn replaced_bezier_params_are_limited_to_segment_width() {
        let mut curve = SegmentCurve::single(SegmentKind::default_bezier());
        curve
            .replace_kinds(&[SegmentKind::Bezier(BezierParams {
                left: DVec2::new(1.8, 0.0),
                right: DVec2::new(-1.8, 1.0),
            })])
            .expect("Parameter werden begrenzt übernommen");
        let seg = curve.segment(0).expect("Segment 0");
        assert_eq!(seg.bezier_handle(BezierSide::Left), Some(DVec2::new(1.0, 0.0)));
        assert_eq!(seg.bezier_handle(BezierSide::Right), Some(DVec2::new(0.0, 2.0)));

        // x(t) bleibt monoton, jede Auswertung trifft den passenden Kurvenpunkt
        let SegmentKind::Bezier(p) = seg.kind else {
            panic!("Bézier erwartet");
        };
        let [b0, b1, b2, b3] = seg.bezier_points(p);
        for x in [0.1, 0.3, 0.5, 0.7, 0.9] {
            let t = solve_bezier_t_for_x(b0, b1, b2, b3, x);
            assert_relative_eq!(cubic_bezier(b0, b1, b2, b3, t).x, x, epsilon = 1e-6);
        }
    }

    #[test]
    fn replaced_shape_params_are_clamped() {
        let mut curve = SegmentCurve::single(SegmentKind::default_elastic());
        curve
            .replace_kinds(&[SegmentKind::Elastic(ElasticParams {
                frequency: 1000.0,
                decay: -5.0,
            })])
            .expect("Parameter werden geklemmt");
        assert_eq!(
            curve.segment(0).map(|s| s.kind),
            Some(SegmentKind::Elastic(ElasticParams {
                frequency: ELASTIC_FREQUENCY_RANGE.1,
                decay: ELASTIC_DECAY_RANGE.0,
            }))
        );

        let before = curve.clone();
        let result = curve.replace_kinds(&[SegmentKind::Elastic(ElasticParams {
            frequency: f64::NAN,
            decay: 1.0,
        })]);
        assert!(matches!(result, Err(CurveError::InvalidArgument(_))));
        assert_eq!(curve, before);
    }

    #[test]
    fn new_rejects_gaps() {
        let result = SegmentCurve::new(vec![
            CurveSegment::new(DVec2::ZERO, DVec2::new(0.5, 0.5), SegmentKind::Linear),
            CurveSegment::new(DVec2::new(0.6, 0.5), DVec2::ONE, SegmentKind::Linear),
        ]);
        assert!(matches!(result, Err(CurveError::InvalidArgument(_))));
    }

    #[test]
    fn multi_segment_evaluates_each_piece() {
        let mid = DVec2::new(0.5, 0.2);
        let curve = SegmentCurve::new(vec![
            CurveSegment::new(DVec2::ZERO, mid, SegmentKind::Linear),
            CurveSegment::new(mid, DVec2::ONE, SegmentKind::default_bezier()),
        ])
        .expect("gültige Segmente");
        assert_relative_eq!(curve.evaluate(0.25), 0.1, epsilon = 1e-12);
        assert_eq!(curve.evaluate(0.5), 0.2);
        assert_eq!(curve.evaluate(1.0), 1.0);
        assert_eq!(curve.editable_segment_count(), 1);
        assert_eq!(curve.handle_anchors().len(), 2);
    }
}
