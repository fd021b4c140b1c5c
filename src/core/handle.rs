//! Handles: ziehbare Stellvertreter der editierbaren Kurvenparameter.

use super::curve::{CurveShape, HandleAnchor, HandleTarget, SegmentHandleRole};
use super::viewport::ViewportTransform;
use glam::DVec2;

/// Darstellungsart eines Handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// Kontrollpunkt auf der Kurve
    Point,
    /// Bézier-Kontrollpunkt mit Tangentenlinie
    Bezier,
    /// Form-Parameter eines Segments
    Parametric,
}

/// Ein Handle mit Graph-Position und Rückverweis auf sein Kurvenelement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// Position im Graph-Raum
    pub position: DVec2,
    /// Anker für die Tangentenlinie (nur Bézier)
    pub root: Option<DVec2>,
    /// Bearbeitetes Kurvenelement
    pub target: HandleTarget,
    /// Darstellungsart
    pub kind: HandleKind,
}

impl From<HandleAnchor> for Handle {
    fn from(anchor: HandleAnchor) -> Self {
        let kind = match anchor.target {
            HandleTarget::Point { .. } => HandleKind::Point,
            HandleTarget::Segment {
                role: SegmentHandleRole::Bezier(_),
                ..
            } => HandleKind::Bezier,
            HandleTarget::Segment {
                role: SegmentHandleRole::Shape,
                ..
            } => HandleKind::Parametric,
        };
        Self {
            position: anchor.position,
            root: anchor.root,
            target: anchor.target,
            kind,
        }
    }
}

/// Transiente Handle-Liste; wird bei Strukturänderungen komplett neu aufgebaut.
#[derive(Debug, Clone, Default)]
pub struct HandleSet {
    handles: Vec<Handle>,
    generation: u64,
}

impl HandleSet {
    /// Baut alle Handles aus dem aktuellen Kurvenzustand neu auf.
    pub fn rebuild(&mut self, curve: &impl CurveShape) {
        self.handles = curve.handle_anchors().into_iter().map(Handle::from).collect();
        self.generation += 1;
    }

    /// Aktualisiert nur Positionen; bei geänderter Struktur wird neu aufgebaut.
    ///
    /// Gibt `true` zurück, wenn ein Neuaufbau nötig war.
    pub fn refresh_positions(&mut self, curve: &impl CurveShape) -> bool {
        let anchors = curve.handle_anchors();
        let same_structure = anchors.len() == self.handles.len()
            && anchors
                .iter()
                .zip(&self.handles)
                .all(|(a, h)| a.target == h.target);
        if !same_structure {
            self.rebuild(curve);
            return true;
        }
        for (handle, anchor) in self.handles.iter_mut().zip(anchors) {
            handle.position = anchor.position;
            handle.root = anchor.root;
        }
        false
    }

    /// Zähler, der bei jedem Neuaufbau steigt.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only Sicht auf die Handles.
    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    /// Handle an Index.
    pub fn get(&self, index: usize) -> Option<&Handle> {
        self.handles.get(index)
    }

    /// Index des Handles mit diesem Ziel.
    pub fn index_of(&self, target: HandleTarget) -> Option<usize> {
        self.handles.iter().position(|h| h.target == target)
    }

    /// Anzahl der Handles.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Gibt `true` zurück, wenn keine Handles existieren.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Sucht das nächstgelegene Handle innerhalb `radius_px` um einen Bildschirmpunkt.
    pub fn hit_test(
        &self,
        screen_pos: DVec2,
        viewport: &ViewportTransform,
        radius_px: f64,
    ) -> Option<usize> {
        let radius_sq = radius_px * radius_px;
        self.handles
            .iter()
            .enumerate()
            .map(|(i, h)| (i, viewport.graph_to_screen(h.position).distance_squared(screen_pos)))
            .filter(|(_, d)| *d <= radius_sq)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::curve::{EditMode, SmoothCurve};

    fn viewport() -> ViewportTransform {
        ViewportTransform::new(400.0, 300.0).expect("gültige Größe")
    }

    #[test]
    fn test_rebuild_follows_curve_and_bumps_generation() {
        let mut set = HandleSet::default();
        let mut curve = SmoothCurve::default();
        set.rebuild(&curve);
        assert_eq!(set.len(), 2);
        assert_eq!(set.generation(), 1);

        curve.insert_point(0.5, 0.2).expect("Einfügen");
        assert!(set.refresh_positions(&curve));
        assert_eq!(set.len(), 3);
        assert_eq!(set.generation(), 2);
        assert_eq!(set.get(1).map(|h| h.kind), Some(HandleKind::Point));
    }

    #[test]
    fn test_refresh_keeps_structure() {
        let mut set = HandleSet::default();
        let mut curve = SmoothCurve::default();
        set.rebuild(&curve);
        curve.move_point(1, 1.0, 0.6).expect("vertikal");
        assert!(!set.refresh_positions(&curve));
        assert_eq!(set.generation(), 1);
        assert_eq!(set.get(1).map(|h| h.position.y), Some(0.6));
    }

    #[test]
    fn test_hit_test_picks_nearest_within_radius() {
        let vp = viewport();
        let mut set = HandleSet::default();
        set.rebuild(&EditMode::Bezier.default_curve());
        assert_eq!(set.get(0).map(|h| h.kind), Some(HandleKind::Bezier));

        let left = vp.graph_to_screen(set.handles()[0].position);
        assert_eq!(set.hit_test(left + DVec2::new(3.0, -2.0), &vp, 10.0), Some(0));
        assert_eq!(set.hit_test(left + DVec2::new(30.0, 0.0), &vp, 10.0), None);
    }
}
