//! HTTP client for the remote automation server.

use std::time::Duration;

use tracing::debug;
use url::Url;
use wd_protocol::{NewSessionRequest, SessionSummary, WireResponse};

use crate::error::{Result, WdError};

/// Hub prefix under which the remote server mounts the wire protocol.
pub const HUB_PREFIX: &str = "/wd/hub";

/// Client issuing wire-protocol commands against one remote server.
///
/// Every command shares the timeout the client was constructed with;
/// failures propagate to the caller, nothing is retried here.
#[derive(Debug, Clone)]
pub struct RemoteClient {
	http: reqwest::Client,
	server_url: Url,
	timeout: Duration,
}

impl RemoteClient {
	/// Creates a client for `server_url` applying `timeout` to every command.
	pub fn new(server_url: Url, timeout: Duration) -> Result<Self> {
		let http = reqwest::Client::builder().timeout(timeout).build().map_err(WdError::Http)?;
		Ok(Self {
			http,
			server_url,
			timeout,
		})
	}

	/// Creates a client for a plain `host`/`port` server location.
	pub fn from_host_port(host: &str, port: u16, timeout: Duration) -> Result<Self> {
		let address = format!("http://{host}:{port}");
		let server_url = Url::parse(&address).map_err(|source| WdError::ServerAddress { address, source })?;
		Self::new(server_url, timeout)
	}

	/// Base URL of the remote server.
	pub fn server_url(&self) -> &Url {
		&self.server_url
	}

	/// Timeout applied to each command.
	pub fn timeout(&self) -> Duration {
		self.timeout
	}

	/// Lists the sessions the server currently reports as active.
	pub async fn list_sessions(&self) -> Result<Vec<SessionSummary>> {
		let url = self.hub_url("sessions")?;
		debug!(target = "wd.session", %url, "listing active sessions");

		let response = self.http.get(url).send().await?;
		if !response.status().is_success() {
			return Err(WdError::Protocol(format!("session listing returned {}", response.status())));
		}

		let envelope: WireResponse<Vec<SessionSummary>> = response.json().await?;
		if !envelope.is_success() {
			return Err(WdError::Protocol(format!("session listing reported status {:?}", envelope.status)));
		}

		Ok(envelope.value)
	}

	/// Creates a new session on the server and returns its assigned id.
	pub async fn new_session(&self, request: &NewSessionRequest) -> Result<String> {
		let url = self.hub_url("session")?;
		debug!(
			target = "wd.session",
			%url,
			browser = %request.desired_capabilities.browser_name,
			"creating session"
		);

		let response = self.http.post(url).json(request).send().await?;
		if !response.status().is_success() {
			return Err(WdError::Protocol(format!("session creation returned {}", response.status())));
		}

		let envelope: WireResponse<serde_json::Value> = response.json().await?;
		if !envelope.is_success() {
			return Err(WdError::Protocol(format!("session creation reported status {:?}", envelope.status)));
		}

		envelope
			.session_id
			.ok_or_else(|| WdError::Protocol("session creation response carried no sessionId".to_string()))
	}

	/// Returns `true` when the server's status endpoint reports readiness.
	pub async fn server_ready(&self) -> Result<bool> {
		let url = self.hub_url("status")?;
		let response = self.http.get(url).send().await?;
		if !response.status().is_success() {
			return Ok(false);
		}

		let envelope: WireResponse<serde_json::Value> = response.json().await?;
		Ok(envelope.is_success())
	}

	fn hub_url(&self, segment: &str) -> Result<Url> {
		let path = format!("{HUB_PREFIX}/{segment}");
		self.server_url
			.join(&path)
			.map_err(|source| WdError::ServerAddress { address: path, source })
	}
}
