//! Base strategy seam for creating brand-new sessions.

use async_trait::async_trait;
use tracing::debug;
use wd_protocol::{Capabilities, NewSessionRequest};

use super::client::{HUB_PREFIX, RemoteClient};
use super::handle::Session;
use super::manager::SessionRequest;
use crate::error::Result;

/// Capability to establish a session from connection parameters.
///
/// The persistent strategy composes one of these and calls it on every
/// cache miss; implementations own the actual session creation.
#[async_trait]
pub trait EstablishSession: Send + Sync {
	/// Establishes a brand-new session for `request`.
	async fn establish(&self, request: &SessionRequest) -> Result<Session>;
}

/// Default base strategy: asks the remote server itself for a new session.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteEstablisher;

#[async_trait]
impl EstablishSession for RemoteEstablisher {
	async fn establish(&self, request: &SessionRequest) -> Result<Session> {
		let client = RemoteClient::from_host_port(&request.host, request.port, request.command_timeout())?;

		let mut capabilities = Capabilities::browser(request.browser_name.as_str());
		capabilities.extra = request.capabilities.clone();

		let id = client
			.new_session(&NewSessionRequest {
				desired_capabilities: capabilities,
			})
			.await?;
		debug!(target = "wd.session", %id, browser = %request.browser_name, "established fresh session");

		let session_prefix = format!("{HUB_PREFIX}/session/{id}");
		Ok(Session::established(id, request.host.clone(), request.port, session_prefix, client))
	}
}
