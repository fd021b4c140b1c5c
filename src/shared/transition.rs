//! Zeitgesteuerte Übergänge mit Easing.

/// Cubic-Out-Easing: schneller Start, weiches Ende.
pub fn cubic_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) - 1.0;
    t * t * t + 1.0
}

/// Fortschritt eines laufenden Übergangs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    elapsed: f64,
    duration: f64,
}

impl Transition {
    /// Startet einen Übergang; Dauer ≤ 0 ergibt `None` (sofortiger Sprung).
    pub fn start(duration_secs: f64) -> Option<Self> {
        (duration_secs.is_finite() && duration_secs > 0.0).then_some(Self {
            elapsed: 0.0,
            duration: duration_secs,
        })
    }

    /// Schreitet um `dt` Sekunden fort.
    pub fn advance(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
    }

    /// Gibt `true` zurück, wenn der Übergang abgeschlossen ist.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Linearer Fortschritt in [0, 1].
    pub fn linear(&self) -> f64 {
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Eased Fortschritt in [0, 1].
    pub fn eased(&self) -> f64 {
        cubic_out(self.linear())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cubic_out_endpoints_and_shape() {
        assert_eq!(cubic_out(0.0), 0.0);
        assert_eq!(cubic_out(1.0), 1.0);
        assert!(cubic_out(0.5) > 0.5);
        assert_eq!(cubic_out(2.0), 1.0);
    }

    #[test]
    fn zero_duration_is_immediate() {
        assert!(Transition::start(0.0).is_none());
        assert!(Transition::start(f64::NAN).is_none());
    }

    #[test]
    fn advance_saturates() {
        let mut t = Transition::start(0.2).expect("positive Dauer");
        t.advance(0.1);
        assert_relative_eq!(t.linear(), 0.5);
        assert!(!t.is_finished());
        t.advance(1.0);
        assert!(t.is_finished());
        assert_eq!(t.eased(), 1.0);
    }
}
