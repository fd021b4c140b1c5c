//! Reine Geometrie-Funktionen für zentripetale Catmull-Rom-Splines und
//! kubische Bézier-Segmente.
//!
//! Layer-neutral: wird von `core::curve` (Auswertung) und vom Bench
//! importiert, ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::DVec2;

/// Spannungs-Exponent der zentripetalen Parametrisierung.
pub const CENTRIPETAL_ALPHA: f64 = 0.5;

/// Unterhalb dieser Knotenlänge gilt ein Nachbar als dupliziert.
const KNOT_EPSILON: f64 = 1e-12;

/// Anzahl Bisektionsschritte beim Auflösen von x(t) = x.
const SOLVE_ITERATIONS: usize = 64;

/// Berechnet die inneren Bézier-Kontrollpunkte eines Catmull-Rom-Segments
/// von `p1` nach `p2` mit Nachbarn `p0` und `p3`.
///
/// Ist ein Nachbar mit dem Segmentpunkt identisch (dupliziert am Rand),
/// fällt der zugehörige Kontrollpunkt auf den Segmentpunkt zurück. Bei
/// zwei duplizierten Rändern entsteht damit eine exakte Gerade.
pub fn catmull_rom_controls(
    p0: DVec2,
    p1: DVec2,
    p2: DVec2,
    p3: DVec2,
    alpha: f64,
) -> (DVec2, DVec2) {
    let l01_2a = p0.distance_squared(p1).powf(alpha);
    let l12_2a = p1.distance_squared(p2).powf(alpha);
    let l23_2a = p2.distance_squared(p3).powf(alpha);
    let l01_a = l01_2a.sqrt();
    let l12_a = l12_2a.sqrt();
    let l23_a = l23_2a.sqrt();

    let mut c1 = p1;
    if l01_a > KNOT_EPSILON {
        let a = 2.0 * l01_2a + 3.0 * l01_a * l12_a + l12_2a;
        let n = 3.0 * l01_a * (l01_a + l12_a);
        c1 = (p1 * a - p0 * l12_2a + p2 * l01_2a) / n;
    }

    let mut c2 = p2;
    if l23_a > KNOT_EPSILON {
        let b = 2.0 * l23_2a + 3.0 * l23_a * l12_a + l12_2a;
        let m = 3.0 * l23_a * (l23_a + l12_a);
        c2 = (p2 * b + p1 * l23_2a - p3 * l12_2a) / m;
    }

    (c1, c2)
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    inv * inv * inv * p0 + 3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t * p3
}

/// Sucht den Bézier-Parameter t ∈ [0, 1], an dem die x-Komponente `x` erreicht.
///
/// Bisektion über das Vorzeichen von x(t) - x; die Ränder werden exakt
/// zurückgegeben, damit die Kurve Kontrollpunkte bitgenau trifft.
pub fn solve_bezier_t_for_x(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, x: f64) -> f64 {
    if x <= p0.x {
        return 0.0;
    }
    if x >= p3.x {
        return 1.0;
    }

    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    for _ in 0..SOLVE_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        if cubic_bezier(p0, p1, p2, p3, mid).x < x {
            lo = mid;
        } else {
            hi = mid;
        }
        if hi - lo <= f64::EPSILON {
            break;
        }
    }
    0.5 * (lo + hi)
}

/// Steigung dy/dx einer Richtung; senkrechte Richtungen liefern 0.
pub fn slope_of(direction: DVec2) -> f64 {
    if direction.x.abs() <= KNOT_EPSILON {
        0.0
    } else {
        direction.y / direction.x
    }
}

/// Erste nicht-degenerierte Tangentenrichtung am Start eines Bézier-Segments.
pub fn start_tangent(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> DVec2 {
    [p1 - p0, p2 - p0, p3 - p0]
        .into_iter()
        .find(|d| d.length_squared() > KNOT_EPSILON * KNOT_EPSILON)
        .unwrap_or(DVec2::X)
}

/// Erste nicht-degenerierte Tangentenrichtung am Ende eines Bézier-Segments.
pub fn end_tangent(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> DVec2 {
    [p3 - p2, p3 - p1, p3 - p0]
        .into_iter()
        .find(|d| d.length_squared() > KNOT_EPSILON * KNOT_EPSILON)
        .unwrap_or(DVec2::X)
}
