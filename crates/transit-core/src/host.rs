//! Host abstraction boundary
//!
//! These traits delegate tree structure, style, geometry, and animation
//! responsibilities to the host environment. The engine reads geometry and
//! style through [`VisualTree`], mutates proxies through the same trait, and
//! hands transition intent plus end values to the [`TransitionDriver`]. The
//! driver owns interpolation; the engine never computes in-between frames.

use std::time::Duration;

use thiserror::Error;
use transit_graphics::{Bounds, LayerTransform, Size, TransformOrigin};

use crate::style::StyleSnapshot;

/// Identifier of a node within the host visual tree.
pub type NodeId = usize;

/// Failures surfaced by the host tree.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("node {id} is not present in the host tree")]
    Missing { id: NodeId },
    #[error("host tree is detached")]
    Detached,
}

/// The host visual tree the engine operates on.
///
/// Reads are observational and only valid until the next mutation; the engine
/// samples bounds once at clone time and once at plan time, never in between
/// mutations that could invalidate them.
pub trait VisualTree {
    /// Deep-duplicates `node` and its descendants, returning the detached
    /// duplicate's root. The duplicate is not attached anywhere yet.
    fn clone_subtree(&mut self, node: NodeId) -> Result<NodeId, HostError>;

    /// All descendants of `node` in document order, excluding `node` itself.
    fn descendants(&self, node: NodeId) -> Vec<NodeId>;

    /// The fully resolved style of `node` at this instant.
    fn computed_style(&self, node: NodeId) -> Result<StyleSnapshot, HostError>;

    /// The rectangle `node` currently occupies in host coordinates.
    fn bounds(&self, node: NodeId) -> Result<Bounds, HostError>;

    /// The intrinsic (layout) size of `node`, unaffected by any ancestor
    /// transform. Distinct from `bounds` when an ancestor scales the node.
    fn offset_size(&self, node: NodeId) -> Result<Size, HostError>;

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<(), HostError>;

    /// Removes identity attributes (id/class) so a duplicate can never clash
    /// with its original or re-match ambient stylesheet rules.
    fn strip_identity(&mut self, node: NodeId) -> Result<(), HostError>;

    /// Toggles the visibility flag. This is a flag, not removal and not
    /// opacity; hidden nodes keep their layout.
    fn set_visible(&mut self, node: NodeId, visible: bool) -> Result<(), HostError>;

    /// Attaches a detached node to the host's top layer.
    fn insert(&mut self, node: NodeId) -> Result<(), HostError>;

    /// Detaches `node` (and its subtree) from the host tree.
    fn remove(&mut self, node: NodeId) -> Result<(), HostError>;
}

/// Timing curve identifiers the engine can declare.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

/// What a node's transition will animate, for how long, and when it may
/// begin. Declared to the driver before end values are issued.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionIntent {
    /// Property names participating in the transition. Always starts with
    /// `transform`; morph sessions append their reconciled properties.
    pub properties: Vec<String>,
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl TransitionIntent {
    /// An intent animating only the transform.
    pub fn transform_only(duration: Duration, easing: Easing) -> Self {
        Self {
            properties: vec![crate::style::properties::TRANSFORM.to_owned()],
            duration,
            delay: Duration::ZERO,
            easing,
        }
    }

    /// Appends further animated properties.
    pub fn with_properties(mut self, properties: &[String]) -> Self {
        self.properties.extend(properties.iter().cloned());
        self
    }

    /// Sets the stagger delay before this node's transition begins.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// The final visual state a proxy must be reconciled toward.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EndState {
    /// Geometric end value, when the node moves or scales.
    pub transform: Option<LayerTransform>,
    pub origin: TransformOrigin,
    /// Style properties reconciled toward the target's computed values.
    pub style: StyleSnapshot,
}

/// The host's declarative animation driver.
///
/// The engine sets the start state implicitly by stamping the captured clone,
/// then issues the end state here. Interpolating between the two (frames,
/// curves, compositing) happens asynchronously in the host, outside the
/// engine's control.
pub trait TransitionDriver {
    /// Announces which properties will animate on `node`, with what timing.
    fn declare(&mut self, node: NodeId, intent: &TransitionIntent);

    /// Issues the final transform/style values that trigger reconciliation.
    fn animate(&mut self, node: NodeId, end: &EndState);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_starts_with_transform() {
        let intent = TransitionIntent::transform_only(Duration::from_millis(300), Easing::EaseIn);
        assert_eq!(intent.properties, vec!["transform".to_owned()]);
        assert_eq!(intent.delay, Duration::ZERO);
    }

    #[test]
    fn intent_appends_morph_properties_after_transform() {
        let intent = TransitionIntent::transform_only(Duration::from_millis(200), Easing::Linear)
            .with_properties(&["width".to_owned(), "height".to_owned()])
            .with_delay(Duration::from_millis(60));
        assert_eq!(intent.properties[0], "transform");
        assert_eq!(intent.properties.len(), 3);
        assert_eq!(intent.delay, Duration::from_millis(60));
    }

    #[test]
    fn default_easing_is_ease_in_out() {
        assert_eq!(Easing::default(), Easing::EaseInOut);
    }
}
