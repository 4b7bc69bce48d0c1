//! Engine error taxonomy
//!
//! Only host insertion failure is fatal for a session. Empty resolutions
//! degrade to no-op sessions, pairing mismatches fall back to the first
//! target, and descendant count divergence truncates; none of those surface
//! here.

use thiserror::Error;

use crate::host::HostError;

#[derive(Debug, Error)]
pub enum TransportError {
    /// The host tree rejected proxy insertion. The session aborts before any
    /// visibility mutation and removes whatever it already inserted.
    #[error("host tree rejected proxy insertion")]
    Insertion(#[source] HostError),

    /// A host operation failed mid-session.
    #[error(transparent)]
    Host(#[from] HostError),
}
