//! Headless session harness

use std::time::Duration;

use transit_core::{
    transport, NodeId, SessionState, TransportConfig, TransportError, TransportSession,
};

use crate::driver::RecordingDriver;
use crate::tree::MemoryTree;

/// Headless harness for exercising transport sessions in tests.
///
/// Owns a memory tree, a recording driver, and a manually advanced clock, so
/// a test can start a session and step it to completion deterministically.
#[derive(Default)]
pub struct TransportTestRule {
    tree: MemoryTree,
    driver: RecordingDriver,
    now: Duration,
}

impl TransportTestRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tree(&self) -> &MemoryTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut MemoryTree {
        &mut self.tree
    }

    pub fn driver(&self) -> &RecordingDriver {
        &self.driver
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Starts a session against the harness tree and driver.
    pub fn transport(
        &mut self,
        sources: &[NodeId],
        targets: &[NodeId],
        config: TransportConfig,
    ) -> Result<TransportSession, TransportError> {
        transport(&mut self.tree, &mut self.driver, sources, targets, config)
    }

    /// Advances the clock by `by` and polls the session once.
    pub fn advance(
        &mut self,
        session: &mut TransportSession,
        by: Duration,
    ) -> Result<SessionState, TransportError> {
        self.now += by;
        session.poll(self.now, &mut self.tree)
    }

    /// Steps past the session's teardown deadline.
    pub fn run_to_completion(
        &mut self,
        session: &mut TransportSession,
    ) -> Result<SessionState, TransportError> {
        // Arm the deadline, then step past it.
        let past_deadline = session.total_delay() + Duration::from_millis(1);
        self.advance(session, Duration::ZERO)?;
        self.advance(session, past_deadline)
    }
}
