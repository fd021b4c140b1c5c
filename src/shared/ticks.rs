//! "Schöne" Achsen-Ticks in 1-2-5-Schritten.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Liefert etwa `count` gleichmäßig verteilte, gerundete Werte in [start, stop].
///
/// Bei negativer Zehnerpotenz wird durch den Kehrwert geteilt, damit
/// Werte wie 0.3 ohne Rundungsrest entstehen.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() || start > stop {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        let lo = (start * inv).ceil() as i64;
        let hi = (stop * inv).floor() as i64;
        (lo..=hi).map(|i| i as f64 / inv).collect()
    } else {
        let inc = 10f64.powf(power) * factor;
        let lo = (start / inc).ceil() as i64;
        let hi = (stop / inc).floor() as i64;
        (lo..=hi).map(|i| i as f64 * inc).collect()
    }
}

/// Kurze Beschriftung eines Tick-Werts ("0.3", "1", "-0.25").
pub fn format_tick(value: f64) -> String {
    // -0 vermeiden
    let v = if value == 0.0 { 0.0 } else { value };
    format!("{v}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_range_in_fifths() {
        assert_eq!(nice_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_tenths_are_exact() {
        let ticks = nice_ticks(-0.1, 1.1, 10);
        assert!(ticks.contains(&0.3));
        assert_eq!(format_tick(ticks[0]), "-0.1");
    }

    #[test]
    fn test_large_steps() {
        assert_eq!(nice_ticks(0.0, 1000.0, 4), vec![0.0, 200.0, 400.0, 600.0, 800.0, 1000.0]);
    }

    #[test]
    fn test_degenerate_input() {
        assert!(nice_ticks(1.0, 0.0, 5).is_empty());
        assert!(nice_ticks(0.0, 1.0, 0).is_empty());
        assert_eq!(nice_ticks(0.5, 0.5, 5), vec![0.5]);
        assert_eq!(format_tick(-0.0), "0");
    }
}
