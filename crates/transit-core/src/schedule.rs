//! Transition scheduling
//!
//! Issues each proxy's flight to the host driver, synchronously and in source
//! order: declare the intent (what animates, duration, stagger delay, curve),
//! then hand over the end values. Proxy `i` carries a delay of `i * stagger`,
//! so visual completion times differ by `(count - 1) * stagger`; the engine
//! itself never waits here.

use log::{info, warn};

use crate::clone::CloneProxy;
use crate::config::TransportConfig;
use crate::diff::{plan_morph, plan_translate};
use crate::error::TransportError;
use crate::host::{EndState, NodeId, TransitionDriver, VisualTree};

/// Picks the target paired with source index `i`. Excess sources fall back
/// to the first target.
pub(crate) fn paired_target(targets: &[NodeId], index: usize) -> Option<NodeId> {
    targets.get(index).or_else(|| targets.first()).copied()
}

/// Computes and issues the end state for every proxy.
pub(crate) fn dispatch(
    tree: &mut dyn VisualTree,
    driver: &mut dyn TransitionDriver,
    proxies: &[CloneProxy],
    targets: &[NodeId],
    config: &TransportConfig,
) -> Result<(), TransportError> {
    for (index, proxy) in proxies.iter().enumerate() {
        let Some(target) = paired_target(targets, index) else {
            continue;
        };
        // Fresh reads: the proxy sits at its stamped capture position, the
        // target wherever layout put it. Nothing mutates between these reads
        // and the values issued below.
        let proxy_bounds = tree.bounds(proxy.node)?;
        let target_bounds = tree.bounds(target)?;

        let plan = if config.morph {
            if config.log {
                info!("morphing proxy {} onto target {target}", proxy.node);
            }
            let target_offset = tree.offset_size(target)?;
            let target_style = tree.computed_style(target)?;
            plan_morph(
                proxy_bounds,
                target_bounds,
                target_offset,
                &target_style,
                &config.morph_properties,
            )
        } else {
            if config.log {
                info!("translating proxy {} onto target {target}", proxy.node);
            }
            plan_translate(proxy_bounds, target_bounds)
        };

        driver.declare(proxy.node, &proxy.intent);
        driver.animate(
            proxy.node,
            &EndState {
                transform: Some(plan.transform),
                origin: plan.origin,
                style: plan.style,
            },
        );

        if config.morph && config.morph_children {
            reconcile_descendants(tree, driver, proxy, target, config)?;
        }
    }
    Ok(())
}

/// Style-only reconciliation of paired proxy/target descendants. Pairing is
/// positional over the two tree walks and truncates to the shorter side.
fn reconcile_descendants(
    tree: &mut dyn VisualTree,
    driver: &mut dyn TransitionDriver,
    proxy: &CloneProxy,
    target: NodeId,
    config: &TransportConfig,
) -> Result<(), TransportError> {
    let proxy_descendants = tree.descendants(proxy.node);
    let target_descendants = tree.descendants(target);
    if proxy_descendants.len() != target_descendants.len() {
        warn!(
            "descendant pairing truncated for proxy {} ({} vs {})",
            proxy.node,
            proxy_descendants.len(),
            target_descendants.len()
        );
    }
    for (child, counterpart) in proxy_descendants.into_iter().zip(target_descendants) {
        let style = tree
            .computed_style(counterpart)?
            .subset(&config.morph_properties);
        driver.declare(child, &proxy.intent);
        driver.animate(
            child,
            &EndState {
                transform: None,
                origin: Default::default(),
                style,
            },
        );
    }
    Ok(())
}
