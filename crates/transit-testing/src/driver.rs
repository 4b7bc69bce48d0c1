//! Recording transition driver

use transit_core::{EndState, NodeId, TransitionDriver, TransitionIntent};

/// A driver that records everything the engine issues and animates nothing.
///
/// Because interpolation is delegated, recording the declared intents and
/// issued end states is a complete observation of the engine's output.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    declared: Vec<(NodeId, TransitionIntent)>,
    animated: Vec<(NodeId, EndState)>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(node, intent)` declaration, in issue order.
    pub fn declared(&self) -> &[(NodeId, TransitionIntent)] {
        &self.declared
    }

    /// Every `(node, end state)` issuance, in issue order.
    pub fn animated(&self) -> &[(NodeId, EndState)] {
        &self.animated
    }

    pub fn intent_for(&self, node: NodeId) -> Option<&TransitionIntent> {
        self.declared
            .iter()
            .find(|(declared, _)| *declared == node)
            .map(|(_, intent)| intent)
    }

    pub fn end_state_for(&self, node: NodeId) -> Option<&EndState> {
        self.animated
            .iter()
            .find(|(animated, _)| *animated == node)
            .map(|(_, end)| end)
    }

    pub fn clear(&mut self) {
        self.declared.clear();
        self.animated.clear();
    }
}

impl TransitionDriver for RecordingDriver {
    fn declare(&mut self, node: NodeId, intent: &TransitionIntent) {
        self.declared.push((node, intent.clone()));
    }

    fn animate(&mut self, node: NodeId, end: &EndState) {
        self.animated.push((node, end.clone()));
    }
}
