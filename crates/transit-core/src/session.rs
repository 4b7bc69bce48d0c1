//! Transport sessions
//!
//! One call to [`transport`] creates one session: proxies are built and
//! inserted, originals are hidden, end values are issued, and the session is
//! returned in the `Transitioning` state. The host then pumps
//! [`TransportSession::poll`] with its clock; once the teardown deadline
//! elapses the session restores visibility, detaches its proxies, fires the
//! completion callback, and becomes terminal.
//!
//! Sessions are one-shot. There is no cancellation mid-flight and no
//! re-entry; transporting again means constructing a new session.

use std::time::Duration;

use log::info;

use crate::clone::{self, CloneProxy};
use crate::config::TransportConfig;
use crate::error::TransportError;
use crate::host::{NodeId, TransitionDriver, VisualTree};
use crate::lifecycle;
use crate::schedule;
use crate::visibility;

/// Progress of a session through its lifecycle.
///
/// No transition skips a state and `TornDown` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Created,
    Cloned,
    Inserted,
    Transitioning,
    TornDown,
}

/// One invocation's unit of work. Owns its proxies exclusively; never shares
/// state with other sessions.
pub struct TransportSession {
    sources: Vec<NodeId>,
    targets: Vec<NodeId>,
    config: TransportConfig,
    proxies: Vec<CloneProxy>,
    state: SessionState,
    /// Armed by the first poll; the deadline is relative to this instant.
    start: Option<Duration>,
    total_delay: Duration,
}

/// Flies every source onto its paired target.
///
/// `sources` and `targets` are index-paired; a single-element target list
/// fans out to all sources. If either side is empty the session degrades to
/// a no-op with zero proxies: the completion callback still fires at the
/// (clamped) deadline and no visibility is touched.
///
/// On success the session is already `Transitioning`; keep pumping
/// [`TransportSession::poll`] until it reports `TornDown`.
pub fn transport(
    tree: &mut dyn VisualTree,
    driver: &mut dyn TransitionDriver,
    sources: &[NodeId],
    targets: &[NodeId],
    config: TransportConfig,
) -> Result<TransportSession, TransportError> {
    if config.log {
        info!(
            "transporting {} source(s) > {} target(s)",
            sources.len(),
            targets.len()
        );
    }
    let mut session = TransportSession {
        sources: sources.to_vec(),
        targets: targets.to_vec(),
        total_delay: lifecycle::total_delay(config.duration, config.stagger, sources.len()),
        config,
        proxies: Vec::new(),
        state: SessionState::Created,
        start: None,
    };

    if session.sources.is_empty() || session.targets.is_empty() {
        if session.config.log {
            info!("nothing to transport; session is a no-op");
        }
        // Clone, insert, and visibility passes are all vacuous here; the
        // session goes straight to waiting out its (clamped) deadline.
        session.state = SessionState::Transitioning;
        return Ok(session);
    }

    for (index, &source) in sources.iter().enumerate() {
        let proxy = clone::build_proxy(tree, source, index, &session.config)?;
        session.proxies.push(proxy);
    }
    session.state = SessionState::Cloned;

    // Insert every proxy before any visibility mutation, so a failing host
    // leaves the page exactly as it was.
    for proxy in &session.proxies {
        if let Err(err) = tree.insert(proxy.node) {
            abandon_proxies(tree, &session.proxies);
            return Err(TransportError::Insertion(err));
        }
    }
    session.state = SessionState::Inserted;

    visibility::set_visibility(
        tree,
        &session.sources,
        &session.targets,
        !session.config.hide_source,
        !session.config.hide_target,
        session.config.log,
    )?;

    schedule::dispatch(
        tree,
        driver,
        &session.proxies,
        &session.targets,
        &session.config,
    )?;
    session.state = SessionState::Transitioning;
    Ok(session)
}

/// Best-effort detach of proxies from an aborting session. Never-inserted
/// clones are detached storage-side as well, so an abort leaves zero
/// residual nodes.
fn abandon_proxies(tree: &mut dyn VisualTree, proxies: &[CloneProxy]) {
    for proxy in proxies {
        let _ = tree.remove(proxy.node);
    }
}

impl TransportSession {
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn proxies(&self) -> &[CloneProxy] {
        &self.proxies
    }

    pub fn proxy_count(&self) -> usize {
        self.proxies.len()
    }

    /// Delay between the first poll and teardown:
    /// `duration + stagger * (count - 1) + guard`.
    pub fn total_delay(&self) -> Duration {
        self.total_delay
    }

    /// The instant teardown will fire, once the first poll has armed it.
    pub fn deadline(&self) -> Option<Duration> {
        self.start.map(|start| start + self.total_delay)
    }

    pub fn is_complete(&self) -> bool {
        self.state == SessionState::TornDown
    }

    /// Advances the session against the host clock. The first call arms the
    /// teardown deadline; the call that reaches it performs teardown and
    /// fires the completion callback. Further calls are no-ops; teardown
    /// cannot fire twice.
    pub fn poll(
        &mut self,
        now: Duration,
        tree: &mut dyn VisualTree,
    ) -> Result<SessionState, TransportError> {
        if self.state != SessionState::Transitioning {
            return Ok(self.state);
        }
        let start = *self.start.get_or_insert(now);
        if now >= start + self.total_delay {
            let result = self.tear_down(tree);
            if let Some(on_complete) = self.config.on_complete.take() {
                on_complete();
            }
            result?;
        }
        Ok(self.state)
    }

    fn tear_down(&mut self, tree: &mut dyn VisualTree) -> Result<(), TransportError> {
        if self.config.log {
            info!("cleaning up");
        }
        let result = if self.config.remove_proxies_after && !self.proxies.is_empty() {
            lifecycle::tear_down(tree, &self.sources, &self.targets, &self.proxies, &self.config)
        } else {
            Ok(())
        };
        // Terminal regardless of the sweep's outcome; a failed host removal
        // must not leave the session re-armable.
        self.state = SessionState::TornDown;
        result
    }
}
