//! Testing utilities and headless host for the transit engine
//!
//! Provides an in-memory [`VisualTree`](transit_core::VisualTree)
//! implementation, a [`TransitionDriver`](transit_core::TransitionDriver)
//! that records everything the engine issues, and a rule that drives a
//! session to completion without a windowing backend.

mod driver;
mod rule;
mod tree;

pub use driver::*;
pub use rule::*;
pub use tree::*;

pub mod prelude {
    pub use crate::driver::RecordingDriver;
    pub use crate::rule::TransportTestRule;
    pub use crate::tree::MemoryTree;
}
