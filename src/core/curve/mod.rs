//! Kurvenmodell: Kontrollpunkte, glatte Kurve und Segment-Kurve.
//!
//! Beide Varianten teilen die Fähigkeit `CurveShape` (Auswerten +
//! editierbare Handle-Anker). `Curve` ist die geschlossene Summe der
//! Varianten und leitet Handle-Drags an die passende Mutation weiter.

pub mod point;
pub mod segment;
pub mod smooth;

pub use point::{ControlPoint, POINT_X_EPSILON};
pub use segment::{
    limit_range, BezierParams, BezierSide, BounceParams, CurveSegment, ElasticParams,
    SegmentCurve, SegmentKind,
};
pub use smooth::{EditBounds, SmoothCurve};

use crate::core::CurveError;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Gemeinsame Fähigkeit aller Kurvenvarianten.
pub trait CurveShape {
    /// Wertet die Kurve bei `x` aus (deterministisch, ohne Seiteneffekte).
    fn evaluate(&self, x: f64) -> f64;

    /// Editierbare Freiheitsgrade in stabiler Reihenfolge.
    fn handle_anchors(&self) -> Vec<HandleAnchor>;

    /// Nur die Graph-Positionen der Handles.
    fn handle_positions(&self) -> Vec<DVec2> {
        self.handle_anchors().iter().map(|a| a.position).collect()
    }
}

/// Welcher Parameter eines Segments von einem Handle bearbeitet wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentHandleRole {
    /// Bézier-Kontrollpunkt links oder rechts
    Bezier(BezierSide),
    /// Form-Handle von Elastic/Bounce
    Shape,
}

/// Rückverweis eines Handles auf das bearbeitete Kurvenelement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleTarget {
    /// Kontrollpunkt einer glatten Kurve
    Point { index: usize },
    /// Parameter eines Segments
    Segment {
        segment: usize,
        role: SegmentHandleRole,
    },
}

/// Graph-Position eines editierbaren Freiheitsgrads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleAnchor {
    /// Position im Graph-Raum
    pub position: DVec2,
    /// Anker, an dem das Handle hängt (für Tangentenlinien)
    pub root: Option<DVec2>,
    /// Bearbeitetes Element
    pub target: HandleTarget,
}

/// Bearbeitungsmodus des Hosts (Nummerierung 0..=5 auf dem Draht).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum EditMode {
    /// Freie Punkte, glatte Kurve
    #[default]
    Normal,
    /// Einzelnes Bézier-Segment ohne Parameter-Rückmeldung
    Value,
    /// Einzelnes Bézier-Segment
    Bezier,
    /// Einzelnes Elastic-Segment
    Elastic,
    /// Einzelnes Bounce-Segment
    Bounce,
    /// Per Skript gesteuert, keine Handles
    Script,
}

impl EditMode {
    /// Alle Modi in Host-Reihenfolge.
    pub const ALL: [EditMode; 6] = [
        EditMode::Normal,
        EditMode::Value,
        EditMode::Bezier,
        EditMode::Elastic,
        EditMode::Bounce,
        EditMode::Script,
    ];

    /// Gibt `true` zurück, wenn der Host Parameteränderungen zurückgemeldet bekommt.
    pub fn is_parametric(self) -> bool {
        matches!(self, Self::Bezier | Self::Elastic | Self::Bounce)
    }

    /// Startkurve eines Modus.
    pub fn default_curve(self) -> Curve {
        match self {
            Self::Normal => Curve::Smooth(SmoothCurve::default()),
            Self::Value | Self::Bezier => {
                Curve::Segment(SegmentCurve::single(SegmentKind::default_bezier()))
            }
            Self::Elastic => Curve::Segment(SegmentCurve::single(SegmentKind::default_elastic())),
            Self::Bounce => Curve::Segment(SegmentCurve::single(SegmentKind::default_bounce())),
            Self::Script => Curve::Segment(SegmentCurve::single(SegmentKind::Linear)),
        }
    }
}

impl TryFrom<u32> for EditMode {
    type Error = CurveError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| CurveError::invalid_argument(format!("unbekannter Modus {value}")))
    }
}

impl From<EditMode> for u32 {
    fn from(mode: EditMode) -> Self {
        mode as u32
    }
}

/// Aktuelle Parameter einer Kurve, wie sie dem Host gemeldet werden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CurveParams {
    /// Punktliste einer glatten Kurve
    Points { points: Vec<ControlPoint> },
    /// Parameter je Segment
    Segments { segments: Vec<SegmentKind> },
}

/// Die bearbeitete Kurve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "camelCase")]
pub enum Curve {
    /// Catmull-Rom durch beliebig viele Punkte
    Smooth(SmoothCurve),
    /// Unabhängig parametrisierte Segmente
    Segment(SegmentCurve),
}

impl Default for Curve {
    fn default() -> Self {
        EditMode::Normal.default_curve()
    }
}

impl Curve {
    /// Gibt `true` zurück, wenn Punkte eingefügt/entfernt werden dürfen.
    pub fn supports_arbitrary_points(&self) -> bool {
        matches!(self, Self::Smooth(_))
    }

    /// Anzahl der Segmente mit eigenen Handles (glatte Kurve: 0).
    pub fn editable_segment_count(&self) -> usize {
        match self {
            Self::Smooth(_) => 0,
            Self::Segment(s) => s.editable_segment_count(),
        }
    }

    /// Momentaufnahme der Parameter.
    pub fn params(&self) -> CurveParams {
        match self {
            Self::Smooth(s) => CurveParams::Points {
                points: s.points().to_vec(),
            },
            Self::Segment(s) => CurveParams::Segments {
                segments: s.segments().iter().map(|seg| seg.kind).collect(),
            },
        }
    }

    /// Übernimmt extern geänderte Parameter; bei Fehler bleibt die Kurve unverändert.
    pub fn apply_params(&mut self, params: &CurveParams) -> Result<(), CurveError> {
        match (self, params) {
            (Self::Smooth(s), CurveParams::Points { points }) => s.replace_points(points.clone()),
            (Self::Segment(s), CurveParams::Segments { segments }) => s.replace_kinds(segments),
            _ => Err(CurveError::invalid_argument(
                "Parameter passen nicht zur Kurvenvariante",
            )),
        }
    }

    /// Fügt einen Punkt ein (nur glatte Kurve).
    pub fn insert_point(&mut self, x: f64, y: f64) -> Result<usize, CurveError> {
        match self {
            Self::Smooth(s) => s.insert_point(x, y),
            Self::Segment(_) => Err(CurveError::invalid_operation(
                "Segment-Kurven haben keine freien Punkte",
            )),
        }
    }

    /// Verschiebt einen Punkt (nur glatte Kurve).
    pub fn move_point(&mut self, index: usize, x: f64, y: f64) -> Result<(), CurveError> {
        match self {
            Self::Smooth(s) => s.move_point(index, x, y),
            Self::Segment(_) => Err(CurveError::invalid_operation(
                "Segment-Kurven haben keine freien Punkte",
            )),
        }
    }

    /// Entfernt einen Punkt (nur glatte Kurve).
    pub fn remove_point(&mut self, index: usize) -> Result<ControlPoint, CurveError> {
        match self {
            Self::Smooth(s) => s.remove_point(index),
            Self::Segment(_) => Err(CurveError::invalid_operation(
                "Segment-Kurven haben keine freien Punkte",
            )),
        }
    }

    /// Setzt den Freiheitsgrad `target` auf die Graph-Position `pos`.
    ///
    /// `keep_angle` skaliert y beim Kürzen eines Bézier-Handles mit;
    /// `align` richtet das gegenüberliegende Handle am gemeinsamen Anker aus.
    pub fn drag_handle(
        &mut self,
        target: HandleTarget,
        pos: DVec2,
        keep_angle: bool,
        align: bool,
    ) -> Result<(), CurveError> {
        match (self, target) {
            (Self::Smooth(s), HandleTarget::Point { index }) => s.move_point(index, pos.x, pos.y),
            (Self::Segment(s), HandleTarget::Segment { segment, role }) => {
                let mut next = s.clone();
                match role {
                    SegmentHandleRole::Bezier(side) => {
                        let seg = next.segment_mut(segment)?;
                        let origin = seg.bezier_origin(side);
                        seg.set_bezier_offset(side, pos - origin, keep_angle)?;
                        if align {
                            align_opposite(&mut next, segment, side)?;
                        }
                    }
                    SegmentHandleRole::Shape => next.segment_mut(segment)?.set_shape_handle(pos)?,
                }
                *s = next;
                Ok(())
            }
            _ => Err(CurveError::invalid_argument(
                "Handle gehört nicht zur aktuellen Kurvenvariante",
            )),
        }
    }
}

/// Spiegelt die Richtung des Nachbar-Handles am gemeinsamen Anker, Länge bleibt.
///
/// Fehlt ein Nachbar mit Bézier-Handle, bleibt die Kurve unverändert.
fn align_opposite(
    curve: &mut SegmentCurve,
    segment: usize,
    side: BezierSide,
) -> Result<(), CurveError> {
    let (neighbour, neighbour_side) = match side {
        BezierSide::Left if segment > 0 => (segment - 1, BezierSide::Right),
        BezierSide::Right if segment + 1 < curve.segments().len() => {
            (segment + 1, BezierSide::Left)
        }
        _ => return Ok(()),
    };
    let Some(own) = curve
        .segment(segment)
        .and_then(|seg| seg.bezier_handle(side).map(|h| h - seg.bezier_origin(side)))
    else {
        return Ok(());
    };
    let other = curve.segment_mut(neighbour)?;
    let Some(other_handle) = other.bezier_handle(neighbour_side) else {
        return Ok(());
    };
    let length = (other_handle - other.bezier_origin(neighbour_side)).length();
    let direction = -own.normalize_or_zero();
    if direction == DVec2::ZERO {
        return Ok(());
    }
    other.set_bezier_offset(neighbour_side, direction * length, true)
}

impl CurveShape for Curve {
    fn evaluate(&self, x: f64) -> f64 {
        match self {
            Self::Smooth(s) => s.evaluate(x),
            Self::Segment(s) => s.evaluate(x),
        }
    }

    fn handle_anchors(&self) -> Vec<HandleAnchor> {
        match self {
            Self::Smooth(s) => s.handle_anchors(),
            Self::Segment(s) => s.handle_anchors(),
        }
    }
}
