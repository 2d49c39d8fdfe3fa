//! Session acquisition orchestration for persistent reuse.

use std::time::Duration;

use tracing::debug;
use wd_protocol::SessionSummary;

use super::client::RemoteClient;
use super::establish::EstablishSession;
use super::handle::Session;
use super::record::{RecordStore, SessionRecord};
use super::strategy::{AcquisitionPlan, resolve_acquisition};
use crate::error::Result;

/// Default per-command timeout, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Connection parameters for one session acquisition.
///
/// The caller pre-validates these; the manager treats them as ready to use.
#[derive(Debug, Clone)]
pub struct SessionRequest {
	/// Browser name keying the persisted record.
	pub browser_name: String,
	/// Host of the remote automation server.
	pub host: String,
	/// Port of the remote automation server.
	pub port: u16,
	/// Per-command timeout, in seconds.
	pub request_timeout_secs: u64,
	/// Extra desired capabilities forwarded on session creation.
	pub capabilities: serde_json::Map<String, serde_json::Value>,
}

impl SessionRequest {
	/// Builds a request with the default timeout and no extra capabilities.
	pub fn new(browser_name: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
		Self {
			browser_name: browser_name.into(),
			host: host.into(),
			port,
			request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
			capabilities: serde_json::Map::new(),
		}
	}

	/// Sets the per-command timeout, in seconds.
	pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
		self.request_timeout_secs = secs;
		self
	}

	/// Adds one desired capability forwarded on session creation.
	pub fn with_capability(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
		self.capabilities.insert(key.into(), value);
		self
	}

	/// Per-command timeout as a [`Duration`].
	pub fn command_timeout(&self) -> Duration {
		Duration::from_secs(self.request_timeout_secs)
	}
}

/// Persistent session strategy: reuse a validated persisted session when
/// the server still reports it alive, otherwise delegate to the composed
/// base strategy. Either way the resulting identity is written back to the
/// record store before the handle is returned.
pub struct SessionManager {
	store: RecordStore,
	establisher: Box<dyn EstablishSession>,
}

impl SessionManager {
	/// Creates a manager over `store` delegating cache misses to `establisher`.
	pub fn new(store: RecordStore, establisher: Box<dyn EstablishSession>) -> Self {
		Self { store, establisher }
	}

	/// Acquires a session for `request`. Single entry point; each step runs
	/// to completion before the next, and nothing is retried.
	pub async fn session(&self, request: &SessionRequest) -> Result<Session> {
		let record = self.store.load(&request.browser_name)?;

		let live_sessions = match &record {
			Some(record) => match list_live_sessions(record).await {
				Ok(sessions) => Some(sessions),
				Err(err) => {
					debug!(
						target = "wd.session",
						host = %record.host,
						port = record.port,
						error = %err,
						"session listing failed; falling back to fresh creation"
					);
					None
				}
			},
			None => None,
		};

		let mut session = match resolve_acquisition(record, live_sessions.as_deref()) {
			AcquisitionPlan::Reuse(record) => {
				debug!(target = "wd.session", id = %record.id, "reusing persisted session");
				Session::from_record(&record)?
			}
			AcquisitionPlan::CreateFresh => self.establisher.establish(request).await?,
		};

		self.store.save(&request.browser_name, &session.to_record())?;

		session.set_persistent(true);
		Ok(session)
	}

	/// Record store backing this manager.
	pub fn store(&self) -> &RecordStore {
		&self.store
	}
}

/// Fetches the live-session listing from the server a record points at.
async fn list_live_sessions(record: &SessionRecord) -> Result<Vec<SessionSummary>> {
	let client = RemoteClient::from_host_port(&record.host, record.port, record.command_timeout())?;
	client.list_sessions().await
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	use async_trait::async_trait;
	use tempfile::tempdir;

	use super::*;
	use crate::error::WdError;
	use crate::session::client::HUB_PREFIX;
	use crate::session::handle::SessionSource;

	struct FixedEstablisher {
		calls: Arc<AtomicUsize>,
	}

	#[async_trait]
	impl EstablishSession for FixedEstablisher {
		async fn establish(&self, request: &SessionRequest) -> Result<Session> {
			self.calls.fetch_add(1, Ordering::SeqCst);
			let client = RemoteClient::from_host_port(&request.host, request.port, request.command_timeout())?;
			Ok(Session::established(
				"fresh-1".into(),
				request.host.clone(),
				request.port,
				format!("{HUB_PREFIX}/session/fresh-1"),
				client,
			))
		}
	}

	fn manager_with_counter(store: RecordStore) -> (SessionManager, Arc<AtomicUsize>) {
		let calls = Arc::new(AtomicUsize::new(0));
		let manager = SessionManager::new(store, Box::new(FixedEstablisher { calls: calls.clone() }));
		(manager, calls)
	}

	#[test]
	fn request_builders_round_trip() {
		let request = SessionRequest::new("firefox", "127.0.0.1", 4444)
			.with_request_timeout_secs(30)
			.with_capability("platform", serde_json::json!("LINUX"));
		assert_eq!(request.browser_name, "firefox");
		assert_eq!(request.command_timeout(), Duration::from_secs(30));
		assert_eq!(request.capabilities["platform"], "LINUX");
	}

	#[tokio::test]
	async fn no_record_delegates_to_base_strategy_and_persists() {
		let dir = tempdir().unwrap();
		let store = RecordStore::new(dir.path());
		let (manager, calls) = manager_with_counter(store.clone());

		let request = SessionRequest::new("firefox", "127.0.0.1", 4444).with_request_timeout_secs(30);
		let session = manager.session(&request).await.unwrap();

		assert_eq!(calls.load(Ordering::SeqCst), 1);
		assert_eq!(session.id(), "fresh-1");
		assert_eq!(session.source(), SessionSource::Fresh);
		assert!(session.is_persistent());

		let saved = store.load("firefox").unwrap().unwrap();
		assert_eq!(saved.id, "fresh-1");
		assert_eq!(saved.session_prefix, "/wd/hub/session/fresh-1");
		assert_eq!(saved.selenium_server_requests_timeout, 30);
	}

	#[tokio::test]
	async fn corrupt_record_is_fatal_before_any_creation() {
		let dir = tempdir().unwrap();
		let store = RecordStore::new(dir.path());
		std::fs::write(store.location_for("firefox"), "not a record").unwrap();
		let (manager, calls) = manager_with_counter(store);

		let err = manager.session(&SessionRequest::new("firefox", "127.0.0.1", 4444)).await.unwrap_err();
		assert!(matches!(err, WdError::CorruptRecord { .. }));
		assert_eq!(calls.load(Ordering::SeqCst), 0);
	}
}
