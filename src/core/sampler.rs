//! Abtastung einer Kurve zu einer Polyline für die Darstellung.

use super::curve::CurveShape;
use serde::{Deserialize, Serialize};

/// Ein abgetasteter Kurvenpunkt im Graph-Raum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// Tastet `curve` mit `resolution` gleichmäßig verteilten x-Werten ab.
///
/// Der Bereich wird mit [0, 1] geschnitten. Ein leerer Schnitt (oder
/// Auflösung 0) liefert keine Samples, ein auf einen Punkt
/// zusammengefallener Bereich genau ein Sample.
pub fn sample(curve: &impl CurveShape, visible_x: (f64, f64), resolution: usize) -> Vec<Sample> {
    if resolution == 0 || visible_x.0.is_nan() || visible_x.1.is_nan() {
        return Vec::new();
    }
    let start = visible_x.0.max(0.0);
    let end = visible_x.1.min(1.0);
    if start > end {
        return Vec::new();
    }
    if start == end || resolution == 1 {
        return vec![Sample {
            x: start,
            y: curve.evaluate(start),
        }];
    }

    let step = (end - start) / (resolution - 1) as f64;
    (0..resolution)
        .map(|i| {
            // Letzter Wert exakt auf `end`, ohne Rundungsdrift
            let x = if i + 1 == resolution {
                end
            } else {
                start + step * i as f64
            };
            Sample {
                x,
                y: curve.evaluate(x),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::curve::SmoothCurve;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamps_to_unit_range() {
        let curve = SmoothCurve::default();
        let samples = sample(&curve, (-0.5, 1.5), 5);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0].x, 0.0);
        assert_eq!(samples[4].x, 1.0);
        assert_relative_eq!(samples[2].x, 0.5);
        assert_relative_eq!(samples[2].y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_ranges() {
        let curve = SmoothCurve::default();
        assert!(sample(&curve, (1.2, 1.5), 10).is_empty());
        assert!(sample(&curve, (0.2, 0.1), 10).is_empty());
        assert!(sample(&curve, (0.0, 1.0), 0).is_empty());
        assert!(sample(&curve, (f64::NAN, 1.0), 10).is_empty());

        let single = sample(&curve, (1.0, 3.0), 10);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].x, 1.0);
        assert_eq!(sample(&curve, (0.2, 0.8), 1).len(), 1);
    }

    #[test]
    fn test_even_spacing() {
        let curve = SmoothCurve::default();
        let samples = sample(&curve, (0.1, 0.7), 7);
        for w in samples.windows(2) {
            assert_relative_eq!(w[1].x - w[0].x, 0.1, epsilon = 1e-12);
        }
    }
}
