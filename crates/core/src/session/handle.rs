//! Established-session handle returned to the caller.

use std::time::Duration;

use url::Url;

use super::client::RemoteClient;
use super::record::SessionRecord;
use crate::error::{Result, WdError};

/// Where an established session came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
	/// Rebuilt from a validated persisted record; no new remote session.
	CachedRecord,
	/// Freshly created by the base strategy.
	Fresh,
}

/// Handle to an established remote session.
///
/// Owned by the caller for the duration of one test run; commands are
/// issued through [`Session::client`] against URLs resolved under the
/// session prefix.
#[derive(Debug)]
pub struct Session {
	id: String,
	host: String,
	port: u16,
	session_prefix: String,
	client: RemoteClient,
	source: SessionSource,
	persistent: bool,
}

impl Session {
	/// Rebuilds a handle from a persisted record without touching the server.
	pub fn from_record(record: &SessionRecord) -> Result<Self> {
		let client = RemoteClient::from_host_port(&record.host, record.port, record.command_timeout())?;
		Ok(Self {
			id: record.id.clone(),
			host: record.host.clone(),
			port: record.port,
			session_prefix: record.session_prefix.clone(),
			client,
			source: SessionSource::CachedRecord,
			persistent: false,
		})
	}

	/// Wraps a freshly created remote session.
	pub fn established(id: String, host: String, port: u16, session_prefix: String, client: RemoteClient) -> Self {
		Self {
			id,
			host,
			port,
			session_prefix,
			client,
			source: SessionSource::Fresh,
			persistent: false,
		}
	}

	/// Opaque remote session identifier.
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Host of the remote automation server.
	pub fn host(&self) -> &str {
		&self.host
	}

	/// Port of the remote automation server.
	pub fn port(&self) -> u16 {
		self.port
	}

	/// URL path scoping subsequent commands to this session.
	pub fn session_prefix(&self) -> &str {
		&self.session_prefix
	}

	/// Client used for commands against this session's server.
	pub fn client(&self) -> &RemoteClient {
		&self.client
	}

	/// Timeout applied to each command on this session.
	pub fn command_timeout(&self) -> Duration {
		self.client.timeout()
	}

	/// Returns where this session was sourced from.
	pub fn source(&self) -> SessionSource {
		self.source
	}

	/// Whether this session participates in cross-run persistence.
	pub fn is_persistent(&self) -> bool {
		self.persistent
	}

	/// Marks this session as persisted across runs.
	pub fn set_persistent(&mut self, persistent: bool) {
		self.persistent = persistent;
	}

	/// Absolute URL scoping commands to this session.
	pub fn session_url(&self) -> Result<Url> {
		self.client
			.server_url()
			.join(&self.session_prefix)
			.map_err(|source| WdError::ServerAddress {
				address: self.session_prefix.clone(),
				source,
			})
	}

	/// Absolute URL for `command` under this session's prefix.
	pub fn url_for(&self, command: &str) -> Result<Url> {
		let path = format!("{}/{}", self.session_prefix.trim_end_matches('/'), command);
		self.client
			.server_url()
			.join(&path)
			.map_err(|source| WdError::ServerAddress { address: path, source })
	}

	/// Identity of this session in persisted-record form.
	pub fn to_record(&self) -> SessionRecord {
		SessionRecord {
			id: self.id.clone(),
			host: self.host.clone(),
			port: self.port,
			session_prefix: self.session_prefix.clone(),
			selenium_server_requests_timeout: self.client.timeout().as_secs(),
		}
	}
}
