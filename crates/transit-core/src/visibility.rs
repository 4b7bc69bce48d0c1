//! Source/target visibility control
//!
//! Exactly one visual representation of each transported element should be
//! shown at any instant: the proxy while in flight, the originals otherwise.
//! Visibility is a flag on the node, never removal and never opacity.

use log::info;

use crate::error::TransportError;
use crate::host::{NodeId, VisualTree};

/// Applies the visibility flags to every source and target node.
pub fn set_visibility(
    tree: &mut dyn VisualTree,
    sources: &[NodeId],
    targets: &[NodeId],
    show_source: bool,
    show_target: bool,
    trace: bool,
) -> Result<(), TransportError> {
    for &node in sources {
        if trace {
            info!(
                "{} original {node}",
                if show_source { "showing" } else { "hiding" }
            );
        }
        tree.set_visible(node, show_source)?;
    }
    for &node in targets {
        if trace {
            info!(
                "{} target {node}",
                if show_target { "showing" } else { "hiding" }
            );
        }
        tree.set_visible(node, show_target)?;
    }
    Ok(())
}
