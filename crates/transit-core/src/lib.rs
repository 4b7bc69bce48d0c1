//! Transport/morph engine for flying visual elements between layout positions
//!
//! The engine animates the perceived movement of one or more elements from a
//! source location in a host layout tree to a target location. It builds a
//! freestanding styled duplicate ("proxy") of each source, computes the
//! geometric and stylistic delta to the paired target, hands the end values to
//! the host's transition driver, and tears everything down after the last
//! staggered transition finishes.
//!
//! The engine never interpolates. It declares *what* the end state is and
//! *when* each proxy may begin; the host driver owns the animation itself.
//! Host integration happens through two traits: [`VisualTree`] for tree
//! structure, style, bounds, and visibility, and [`TransitionDriver`] for the
//! delegated interpolation boundary.

mod clone;
mod config;
mod diff;
mod error;
mod host;
mod lifecycle;
mod schedule;
mod session;
mod style;
mod visibility;

pub use clone::CloneProxy;
pub use config::TransportConfig;
pub use diff::{plan_morph, plan_translate, FlightPlan};
pub use error::TransportError;
pub use host::{
    Easing, EndState, HostError, NodeId, TransitionDriver, TransitionIntent, VisualTree,
};
pub use lifecycle::{total_delay, TEARDOWN_GUARD};
pub use session::{transport, SessionState, TransportSession};
pub use style::{properties, px, StyleSnapshot};
pub use visibility::set_visibility;

pub use transit_graphics::{Bounds, LayerTransform, Point, Size, TransformOrigin};

pub mod prelude {
    pub use crate::config::TransportConfig;
    pub use crate::host::{Easing, TransitionDriver, VisualTree};
    pub use crate::session::{transport, SessionState, TransportSession};
    pub use crate::style::StyleSnapshot;
    pub use transit_graphics::prelude::*;
}
