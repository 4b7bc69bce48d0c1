//! Session lifecycle
//!
//! Owns the temporal contract: when teardown may fire and what it does. The
//! teardown deadline accounts for the stagger of the slowest proxy plus a
//! guard margin absorbing scheduling jitter, so cleanup never lands before
//! the last transition visually completes.

use std::time::Duration;

use log::info;

use crate::clone::CloneProxy;
use crate::config::TransportConfig;
use crate::error::TransportError;
use crate::host::{NodeId, VisualTree};
use crate::visibility;

/// Margin added to every teardown deadline.
pub const TEARDOWN_GUARD: Duration = Duration::from_millis(10);

/// Total delay before a session may tear down:
/// `duration + stagger * (count - 1) + guard`, safe for `count == 0`.
pub fn total_delay(duration: Duration, stagger: Duration, count: usize) -> Duration {
    duration + stagger * count.saturating_sub(1) as u32 + TEARDOWN_GUARD
}

/// Teardown actions: restore visibility and detach every proxy. The target
/// side is always restored so the page is never left with both
/// representations hidden; the source side follows `restore_source`.
///
/// All proxies are detached even if one removal fails; the first failure is
/// reported after the sweep.
pub(crate) fn tear_down(
    tree: &mut dyn VisualTree,
    sources: &[NodeId],
    targets: &[NodeId],
    proxies: &[CloneProxy],
    config: &TransportConfig,
) -> Result<(), TransportError> {
    // The sweep runs even if visibility restoration fails part-way; zero
    // residual proxies takes precedence over reporting early.
    let restored =
        visibility::set_visibility(tree, sources, targets, config.restore_source, true, config.log);
    if config.log {
        info!("removing {} proxy node(s)", proxies.len());
    }
    let mut first_failure = None;
    for proxy in proxies {
        if let Err(err) = tree.remove(proxy.node) {
            first_failure.get_or_insert(err);
        }
    }
    restored?;
    match first_failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_accounts_for_stagger_of_the_slowest_proxy() {
        let delay = total_delay(Duration::from_millis(300), Duration::from_millis(30), 3);
        assert_eq!(delay, Duration::from_millis(300 + 30 * 2) + TEARDOWN_GUARD);
    }

    #[test]
    fn delay_is_safe_for_empty_and_single_sessions() {
        let duration = Duration::from_millis(300);
        let stagger = Duration::from_millis(30);
        assert_eq!(
            total_delay(duration, stagger, 0),
            duration + TEARDOWN_GUARD
        );
        assert_eq!(
            total_delay(duration, stagger, 1),
            duration + TEARDOWN_GUARD
        );
    }
}
