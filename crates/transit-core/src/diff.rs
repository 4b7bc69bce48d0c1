//! Flight planning
//!
//! Computes the end values that move a proxy onto its paired target. Two
//! mutually exclusive strategies exist: plain translation, and morph, which
//! adds a non-uniform scale plus a style reconciliation snapshot.

use transit_graphics::{Bounds, LayerTransform, Size, TransformOrigin};

use crate::style::StyleSnapshot;

/// The computed end state for one proxy's flight.
#[derive(Clone, Debug, PartialEq)]
pub struct FlightPlan {
    pub transform: LayerTransform,
    pub origin: TransformOrigin,
    /// Style properties reconciled toward the target. Empty when translating.
    pub style: StyleSnapshot,
}

/// Plain translation: component-wise delta between the two positions.
pub fn plan_translate(source: Bounds, target: Bounds) -> FlightPlan {
    let delta = source.delta_to(&target);
    FlightPlan {
        transform: LayerTransform::translate(delta.x, delta.y),
        origin: TransformOrigin::TopLeft,
        style: StyleSnapshot::new(),
    }
}

/// Morph: non-uniform scale from the target's intrinsic size ratio, a
/// translation that re-centers the scaled proxy onto the target's bounds, and
/// the target style values for every reconciled property.
///
/// The scale divides rendered bounds by the target's *unscaled* offset size,
/// so it reflects the intrinsic ratio rather than one already affected by an
/// ancestor transform. Scale composes around the proxy's own center.
pub fn plan_morph(
    source: Bounds,
    target: Bounds,
    target_offset: Size,
    target_style: &StyleSnapshot,
    properties: &[String],
) -> FlightPlan {
    let (scale_x, translation_x) =
        morph_axis(source.left, target.left, target.width, target_offset.width);
    let (scale_y, translation_y) =
        morph_axis(source.top, target.top, target.height, target_offset.height);
    FlightPlan {
        transform: LayerTransform::translate(translation_x, translation_y)
            .with_scale(scale_x, scale_y),
        origin: TransformOrigin::Center,
        style: target_style.subset(properties),
    }
}

/// One axis of the morph math: scale factor plus the translation component
/// `target + (rendered - rendered/scale)/2 - source`.
fn morph_axis(source_pos: f32, target_pos: f32, rendered: f32, offset: f32) -> (f32, f32) {
    // Non-positive offset dimensions would divide to infinity; a unit scale
    // degrades the axis to plain translation.
    let scale = if offset > 0.0 { rendered / offset } else { 1.0 };
    let unscaled = if scale > 0.0 { rendered / scale } else { rendered };
    let translation = target_pos + (rendered - unscaled) / 2.0 - source_pos;
    (scale, translation)
}
