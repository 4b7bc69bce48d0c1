//! Proxy factory
//!
//! Builds the freestanding duplicate that actually flies. The duplicate is
//! stamped with the full computed style of its source (per paired node) so it
//! renders pixel-identically without any stylesheet context, stripped of
//! identity attributes, positioned at the captured source bounds, and handed
//! a transition intent. The factory produces the node; it never inserts it.

use log::{info, warn};

use transit_graphics::Bounds;

use crate::config::TransportConfig;
use crate::error::TransportError;
use crate::host::{NodeId, TransitionIntent, VisualTree};
use crate::style::{properties, px};

/// A freestanding duplicate of one source node, owned by its session.
#[derive(Clone, Debug)]
pub struct CloneProxy {
    /// Root of the duplicate subtree in the host tree.
    pub node: NodeId,
    /// The source this proxy duplicates. Read-only reference, never owned.
    pub source: NodeId,
    /// Source bounds at capture time.
    pub captured: Bounds,
    pub stack_order: i32,
    /// Which properties animate, for how long, and after what stagger delay.
    pub intent: TransitionIntent,
}

/// Deep-duplicates `source` and prepares the duplicate as a positioned proxy.
pub(crate) fn build_proxy(
    tree: &mut dyn VisualTree,
    source: NodeId,
    index: usize,
    config: &TransportConfig,
) -> Result<CloneProxy, TransportError> {
    if config.log {
        info!("cloning node {source}");
    }
    let clone = tree.clone_subtree(source)?;

    // Paired traversal over the two same-shaped subtrees. Immediately after
    // a clone the shapes match; if they ever diverge the pairing truncates
    // to the shorter side rather than indexing out of range.
    let originals = tree.descendants(source);
    let duplicates = tree.descendants(clone);
    if originals.len() != duplicates.len() {
        warn!(
            "descendant counts diverged while cloning node {source} ({} vs {}); pairing truncated",
            originals.len(),
            duplicates.len()
        );
    }
    let pairs = std::iter::once((source, clone))
        .chain(originals.into_iter().zip(duplicates));
    for (original, duplicate) in pairs {
        let computed = tree.computed_style(original)?;
        tree.strip_identity(duplicate)?;
        for (property, value) in computed.iter() {
            tree.set_style(duplicate, property, value)?;
        }
    }

    let captured = tree.bounds(source)?;

    // Freestanding positioning at the captured bounds. Margin and transform
    // are cleared so inherited values cannot shift the stamped position.
    tree.set_style(clone, properties::POSITION, "fixed")?;
    tree.set_style(clone, properties::LEFT, &px(captured.left))?;
    tree.set_style(clone, properties::TOP, &px(captured.top))?;
    tree.set_style(clone, properties::Z_INDEX, &config.stack_order.to_string())?;
    tree.set_style(clone, properties::MARGIN, "0")?;
    tree.set_style(clone, properties::TRANSFORM, "none")?;
    if config.will_change_hint {
        tree.set_style(clone, properties::WILL_CHANGE, properties::TRANSFORM)?;
    }

    let mut intent = TransitionIntent::transform_only(config.duration, config.easing)
        .with_delay(config.stagger * index as u32);
    if config.morph {
        intent = intent.with_properties(&config.morph_properties);
    }

    stamp_text_fill(tree, clone)?;
    if config.morph && config.morph_children {
        for descendant in tree.descendants(clone) {
            stamp_text_fill(tree, descendant)?;
        }
    }

    Ok(CloneProxy {
        node: clone,
        source,
        captured,
        stack_order: config.stack_order,
        intent,
    })
}

/// Duplicated text renders with an empty fill on some hosts unless the fill
/// is stamped explicitly from the computed text color.
fn stamp_text_fill(tree: &mut dyn VisualTree, node: NodeId) -> Result<(), TransportError> {
    let computed = tree.computed_style(node)?;
    if let Some(color) = computed.get(properties::COLOR) {
        tree.set_style(node, properties::TEXT_FILL_COLOR, color)?;
    }
    Ok(())
}
