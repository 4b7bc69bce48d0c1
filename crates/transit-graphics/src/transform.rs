//! Layer transform issued to the host driver

/// Reference point a [`LayerTransform`] scales around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransformOrigin {
    /// The node's own center. Scale and translation compose so that a
    /// scaled proxy re-centers onto its target.
    Center,
    /// The node's top-left corner.
    #[default]
    TopLeft,
}

/// Translation plus non-uniform scale applied to a flight proxy.
///
/// The engine only ever produces the end value; interpolation between the
/// identity start state and this end state belongs to the host driver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerTransform {
    pub translation_x: f32,
    pub translation_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Default for LayerTransform {
    fn default() -> Self {
        Self {
            translation_x: 0.0,
            translation_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl LayerTransform {
    /// A translation-only transform.
    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            translation_x: x,
            translation_y: y,
            ..Self::default()
        }
    }

    /// Adds a non-uniform scale to this transform.
    pub fn with_scale(mut self, scale_x: f32, scale_y: f32) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Applies this transform to a point relative to the transform origin.
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x * self.scale_x + self.translation_x,
            y * self.scale_y + self.translation_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        let transform = LayerTransform::default();
        assert!(transform.is_identity());
        assert_eq!(transform.apply(3.0, 4.0), (3.0, 4.0));
    }

    #[test]
    fn translate_moves_points() {
        let transform = LayerTransform::translate(10.0, -5.0);
        assert_eq!(transform.apply(1.0, 1.0), (11.0, -4.0));
    }

    #[test]
    fn scale_composes_with_translation() {
        let transform = LayerTransform::translate(10.0, 10.0).with_scale(2.0, 0.5);
        assert_eq!(transform.apply(4.0, 4.0), (18.0, 12.0));
        assert!(!transform.is_identity());
    }
}
