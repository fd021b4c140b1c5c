//! Viewport-Transformation zwischen Graph-Raum und Bildschirm-Pixeln.
//!
//! Zusammengesetzt aus einer festen Basis-Abbildung (abhängig von der
//! Viewport-Größe) und einer dynamischen Pan/Zoom-Transformation, die auf
//! die Basis angewendet wird.

use super::CurveError;
use glam::DVec2;

/// Überstand des Wertebereichs über den Viewport-Rand hinaus (Pixel).
pub const EDGE_BLEED_PX: f64 = 2.0;
/// Obergrenze des Rands um den Einheitsbereich (Pixel).
pub const MAX_MARGIN_PX: f64 = 50.0;
/// Rand als Anteil der kürzeren Viewport-Seite.
pub const MARGIN_RATIO: f64 = 0.1;
/// Viewport-Größe vor dem ersten Resize.
pub const DEFAULT_VIEWPORT_SIZE: (f64, f64) = (800.0, 600.0);
/// Standard-Grenzen des Zoom-Faktors.
pub const DEFAULT_SCALE_EXTENT: (f64, f64) = (1e-4, 1e4);

/// Lineare Abbildung eines Intervalls auf ein anderes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Erstellt eine Skala `domain → range`.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Pixel pro Domain-Einheit (vorzeichenbehaftet).
    pub fn factor(&self) -> f64 {
        (self.range.1 - self.range.0) / (self.domain.1 - self.domain.0)
    }

    /// Domain → Range.
    pub fn apply(&self, v: f64) -> f64 {
        self.range.0 + (v - self.domain.0) * self.factor()
    }

    /// Range → Domain.
    pub fn invert(&self, p: f64) -> f64 {
        self.domain.0 + (p - self.range.0) / self.factor()
    }
}

/// Feste Abbildung des Einheitsquadrats (plus Rand) auf die Pixelfläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseTransform {
    x: LinearScale,
    y: LinearScale,
    size: DVec2,
}

impl BaseTransform {
    /// Leitet Rand und Skalen aus der Viewport-Größe ab.
    pub fn for_size(width: f64, height: f64) -> Result<Self, CurveError> {
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(CurveError::invalid_argument(format!(
                "Viewport-Größe {width}×{height} ist nicht positiv"
            )));
        }
        Ok(Self::compute(width, height))
    }

    fn compute(width: f64, height: f64) -> Self {
        let margin_x = MAX_MARGIN_PX.min(width * MARGIN_RATIO).min(height * MARGIN_RATIO);
        let inner_w = width - 2.0 * margin_x;
        // Quadratische Fläche: Höhe nie größer als Breite, Rest als y-Rand
        let inner_h = (height - 2.0 * margin_x).min(inner_w);
        let margin_y = (height - inner_h) / 2.0;

        let x = LinearScale::new(
            (-margin_x / inner_w, 1.0 + margin_x / inner_w),
            (-EDGE_BLEED_PX, width + EDGE_BLEED_PX),
        );
        let y = LinearScale::new(
            (-margin_y / inner_h, 1.0 + margin_y / inner_h),
            (height + EDGE_BLEED_PX, -EDGE_BLEED_PX),
        );
        Self {
            x,
            y,
            size: DVec2::new(width, height),
        }
    }

    /// Graph → Basis-Pixel.
    pub fn apply(&self, p: DVec2) -> DVec2 {
        DVec2::new(self.x.apply(p.x), self.y.apply(p.y))
    }

    /// Basis-Pixel → Graph.
    pub fn invert(&self, p: DVec2) -> DVec2 {
        DVec2::new(self.x.invert(p.x), self.y.invert(p.y))
    }

    /// Pixel pro Graph-Einheit (vorzeichenbehaftet, y negativ).
    pub fn factor(&self) -> DVec2 {
        DVec2::new(self.x.factor(), self.y.factor())
    }

    /// Viewport-Größe, für die diese Basis berechnet wurde.
    pub fn size(&self) -> DVec2 {
        self.size
    }
}

/// Uniformer Zoom `k` plus Translation, angewendet auf Basis-Pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicTransform {
    /// Zoom-Faktor
    pub k: f64,
    /// Translation in Pixeln
    pub translate: DVec2,
}

impl DynamicTransform {
    /// Identität ("Fit").
    pub const IDENTITY: Self = Self {
        k: 1.0,
        translate: DVec2::ZERO,
    };

    /// Basis-Pixel → Bildschirm.
    pub fn apply(&self, p: DVec2) -> DVec2 {
        p * self.k + self.translate
    }

    /// Bildschirm → Basis-Pixel.
    pub fn invert(&self, p: DVec2) -> DVec2 {
        (p - self.translate) / self.k
    }

    /// Gibt `true` zurück, wenn die Transformation exakt die Identität ist.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Lineare Interpolation zwischen zwei Transformationen.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            k: self.k + (other.k - self.k) * t,
            translate: self.translate.lerp(other.translate, t),
        }
    }
}

impl Default for DynamicTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Pan- oder Zoom-Geste in Bildschirm-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewGesture {
    /// Verschiebung um `delta` Pixel
    Pan { delta: DVec2 },
    /// Zoom um `factor`, `focus` bleibt auf dem Bildschirm stehen
    Zoom { factor: f64, focus: DVec2 },
}

/// Zusammengesetzte Transformation `dynamic ∘ base`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportTransform {
    base: BaseTransform,
    dynamic: DynamicTransform,
    scale_extent: (f64, f64),
}

impl Default for ViewportTransform {
    fn default() -> Self {
        let (width, height) = DEFAULT_VIEWPORT_SIZE;
        Self {
            base: BaseTransform::compute(width, height),
            dynamic: DynamicTransform::IDENTITY,
            scale_extent: DEFAULT_SCALE_EXTENT,
        }
    }
}

impl ViewportTransform {
    /// Erstellt eine Transformation für die gegebene Viewport-Größe.
    pub fn new(width: f64, height: f64) -> Result<Self, CurveError> {
        Ok(Self {
            base: BaseTransform::for_size(width, height)?,
            dynamic: DynamicTransform::IDENTITY,
            scale_extent: DEFAULT_SCALE_EXTENT,
        })
    }

    /// Setzt die Zoom-Grenzen und klemmt den aktuellen Zoom neu.
    pub fn set_scale_extent(&mut self, min: f64, max: f64) -> Result<(), CurveError> {
        if !(min > 0.0 && max >= min && max.is_finite()) {
            return Err(CurveError::invalid_argument(format!(
                "ungültige Zoom-Grenzen [{min}, {max}]"
            )));
        }
        self.scale_extent = (min, max);
        let mut candidate = self.dynamic;
        candidate.k = candidate.k.clamp(min, max);
        self.commit(candidate)
    }

    /// Aktuelle Zoom-Grenzen.
    pub fn scale_extent(&self) -> (f64, f64) {
        self.scale_extent
    }

    /// Berechnet die Basis für eine neue Viewport-Größe.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) -> Result<(), CurveError> {
        let base = BaseTransform::for_size(width, height)?;
        let previous = self.base;
        self.base = base;
        // Translations-Grenzen hängen von der Breite ab
        if let Err(e) = self.commit(self.dynamic) {
            self.base = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Viewport-Größe in Pixeln.
    pub fn size(&self) -> DVec2 {
        self.base.size()
    }

    /// Basis-Abbildung.
    pub fn base(&self) -> &BaseTransform {
        &self.base
    }

    /// Dynamische Pan/Zoom-Transformation.
    pub fn dynamic(&self) -> DynamicTransform {
        self.dynamic
    }

    /// Kopie mit ersetzter dynamischer Transformation (für Übergangs-Darstellung).
    pub fn with_dynamic(&self, dynamic: DynamicTransform) -> Self {
        Self {
            dynamic,
            ..self.clone()
        }
    }

    /// Graph → Bildschirm.
    pub fn graph_to_screen(&self, p: DVec2) -> DVec2 {
        self.dynamic.apply(self.base.apply(p))
    }

    /// Bildschirm → Graph.
    pub fn screen_to_graph(&self, p: DVec2) -> DVec2 {
        self.base.invert(self.dynamic.invert(p))
    }

    /// Pixel pro Graph-Einheit inklusive Zoom (vorzeichenbehaftet).
    pub fn pixels_per_unit(&self) -> DVec2 {
        self.base.factor() * self.dynamic.k
    }

    /// Sichtbarer x-Bereich im Graph-Raum, links und rechts um `overscan_px` erweitert.
    pub fn visible_graph_x_range(&self, overscan_px: f64) -> (f64, f64) {
        let width = self.size().x;
        let left = self.screen_to_graph(DVec2::new(-overscan_px, 0.0)).x;
        let right = self.screen_to_graph(DVec2::new(width + overscan_px, 0.0)).x;
        (left, right)
    }

    /// Gibt `true` zurück, wenn seit dem letzten Reset gepannt oder gezoomt wurde.
    pub fn is_transformed(&self) -> bool {
        !self.dynamic.is_identity()
    }

    /// Setzt die dynamische Transformation auf die Identität ("Fit").
    pub fn reset(&mut self) {
        self.dynamic = DynamicTransform::IDENTITY;
    }

    /// Wendet eine Pan/Zoom-Geste an; bei Fehler bleibt der Zustand unverändert.
    pub fn apply_gesture(&mut self, gesture: ViewGesture) -> Result<(), CurveError> {
        let current = self.dynamic;
        let candidate = match gesture {
            ViewGesture::Pan { delta } => DynamicTransform {
                k: current.k,
                translate: current.translate + delta,
            },
            ViewGesture::Zoom { factor, focus } => {
                if !(factor > 0.0) || !factor.is_finite() {
                    return Err(CurveError::invalid_argument(format!(
                        "ungültiger Zoom-Faktor {factor}"
                    )));
                }
                let (min, max) = self.scale_extent;
                let k = (current.k * factor).clamp(min, max);
                let anchored = current.invert(focus);
                DynamicTransform {
                    k,
                    translate: focus - anchored * k,
                }
            }
        };
        self.commit(candidate)
    }

    /// Klemmt die Translation und übernimmt die Transformation, falls invertierbar.
    fn commit(&mut self, candidate: DynamicTransform) -> Result<(), CurveError> {
        let constrained = self.constrain(candidate);
        let invertible = constrained.k.is_finite()
            && constrained.k > 0.0
            && constrained.translate.is_finite()
            && self.base.factor().x != 0.0
            && self.base.factor().y != 0.0;
        if !invertible {
            return Err(CurveError::TransformSingularity);
        }
        self.dynamic = constrained;
        Ok(())
    }

    /// Hält den sichtbaren Basis-Bereich in x innerhalb [-w, 2w]; y ist unbegrenzt.
    fn constrain(&self, t: DynamicTransform) -> DynamicTransform {
        let width = self.size().x;
        let (extent_min, extent_max) = (-width, 2.0 * width);
        let dx0 = (0.0 - t.translate.x) / t.k - extent_min;
        let dx1 = (width - t.translate.x) / t.k - extent_max;
        let shift = if dx1 > dx0 {
            (dx0 + dx1) / 2.0
        } else if dx0.min(0.0) != 0.0 {
            dx0.min(0.0)
        } else {
            dx1.max(0.0)
        };
        DynamicTransform {
            k: t.k,
            translate: DVec2::new(t.translate.x + t.k * shift, t.translate.y),
        }
    }
}
