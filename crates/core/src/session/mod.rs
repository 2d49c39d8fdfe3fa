//! Session persistence, validation, and acquisition subsystem.
//!
//! This module centralizes persisted session records, remote liveness
//! validation, and the reuse-or-create acquisition strategy.

/// HTTP client for the remote automation server.
pub mod client;
/// Base strategy seam for creating brand-new sessions.
pub mod establish;
/// Established-session handle returned to the caller.
pub mod handle;
/// Acquisition orchestration and entry point.
pub mod manager;
/// Persisted session record schema and store.
pub mod record;
/// Pure acquisition-plan selection.
pub mod strategy;
/// Liveness check against the server's session listing.
pub mod validator;

pub use client::RemoteClient;
pub use establish::{EstablishSession, RemoteEstablisher};
pub use handle::{Session, SessionSource};
pub use manager::{SessionManager, SessionRequest};
pub use record::{RecordStore, SessionRecord};
pub use strategy::{AcquisitionPlan, resolve_acquisition};
