//! Fehlertypen für Kurven- und Viewport-Operationen.

use thiserror::Error;

/// Fehler einer abgelehnten Kurven- oder Transform-Mutation.
///
/// Eine fehlgeschlagene Operation lässt den vorherigen Zustand immer
/// unverändert (keine Teil-Updates).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Wert außerhalb des gültigen Bereichs oder Verletzung der x-Reihenfolge
    #[error("ungültiges Argument: {0}")]
    InvalidArgument(String),
    /// Strukturelle Invariante verletzt (z.B. weniger als 2 Punkte)
    #[error("ungültige Operation: {0}")]
    InvalidOperation(String),
    /// Zusammengesetzte Transformation nicht invertierbar
    #[error("Transformation ist singulär")]
    TransformSingularity,
}

impl CurveError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_contains_message() {
        let err = CurveError::invalid_argument("x=1.5 außerhalb (0,1)");
        assert!(err.to_string().contains("x=1.5"));

        let err = CurveError::invalid_operation("mindestens 2 Punkte");
        assert!(err.to_string().contains("mindestens 2 Punkte"));
    }

    #[test]
    fn is_std_error() {
        let err = CurveError::TransformSingularity;
        let _: &dyn std::error::Error = &err;
    }
}
