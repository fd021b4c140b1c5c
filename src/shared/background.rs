//! Platzierung des Hintergrundbilds ("cover": füllt den Viewport, zentriert).

use glam::Vec2;

/// Berechnet Position und Größe eines Bildes, das `viewport` vollständig
/// bedeckt, ohne das Seitenverhältnis zu verzerren.
///
/// Gibt `None` zurück, wenn eine der Größen nicht positiv ist.
pub fn cover_rect(image_size: Vec2, viewport: Vec2) -> Option<(Vec2, Vec2)> {
    if image_size.min_element() <= 0.0 || viewport.min_element() <= 0.0 {
        return None;
    }
    let scale = (viewport.x / image_size.x).max(viewport.y / image_size.y);
    let size = image_size * scale;
    let min = (viewport - size) * 0.5;
    Some((min, size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn wide_image_is_cropped_horizontally() {
        let (min, size) =
            cover_rect(Vec2::new(200.0, 100.0), Vec2::new(300.0, 300.0)).expect("gültig");
        assert_relative_eq!(size.y, 300.0);
        assert_relative_eq!(size.x, 600.0);
        assert_relative_eq!(min.x, -150.0);
        assert_relative_eq!(min.y, 0.0);
    }

    #[test]
    fn tall_image_is_cropped_vertically() {
        let (min, size) =
            cover_rect(Vec2::new(100.0, 400.0), Vec2::new(400.0, 300.0)).expect("gültig");
        assert_relative_eq!(size.x, 400.0);
        assert_relative_eq!(min.y, -650.0);
    }

    #[test]
    fn empty_sizes_yield_none() {
        assert!(cover_rect(Vec2::ZERO, Vec2::new(10.0, 10.0)).is_none());
        assert!(cover_rect(Vec2::ONE, Vec2::new(0.0, 10.0)).is_none());
    }
}
