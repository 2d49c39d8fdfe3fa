//! Persistent session reuse for remote browser automation.
//!
//! Test harnesses driving a remote automation server pay a full browser
//! launch on every run. This crate persists the identity of an established
//! session to disk and, on the next run, revalidates it against the
//! server's live-session listing - reusing the running browser when it is
//! still there and transparently falling back to a fresh session when it
//! is not.
//!
//! # Example
//!
//! ```ignore
//! use wd::{RecordStore, RemoteEstablisher, SessionManager, SessionRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manager = SessionManager::new(RecordStore::default(), Box::new(RemoteEstablisher));
//!
//!     let request = SessionRequest::new("firefox", "127.0.0.1", 4444)
//!         .with_request_timeout_secs(30);
//!     let session = manager.session(&request).await?;
//!
//!     println!("driving session {}", session.id());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod session;

pub use error::{Result, WdError};
pub use session::{
	EstablishSession, RecordStore, RemoteClient, RemoteEstablisher, Session, SessionManager, SessionRecord,
	SessionRequest, SessionSource,
};
