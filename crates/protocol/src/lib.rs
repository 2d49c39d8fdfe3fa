//! Wire types for the legacy Selenium JSON wire protocol.
//!
//! This crate contains the serde-serializable types used for communication
//! with a remote automation server over HTTP. These types represent the
//! "protocol layer" - the shapes of data as they appear on the wire.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! - **Pure data**: No behavior beyond serialization/deserialization
//! - **1:1 with the wire**: Match the JSON the server actually emits
//! - **Stable**: Changes only when the wire protocol changes
//!
//! Session acquisition and reuse logic is built on top of these types in
//! `wd-session`.

pub mod types;

pub use types::*;
