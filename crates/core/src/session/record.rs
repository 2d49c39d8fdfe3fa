//! Session record persistence.
//!
//! Records cache the identity of an established remote session so a later
//! process can attempt to reuse it instead of creating a new one.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WdError};

/// Identity of an established remote session, as persisted between runs.
///
/// Field names follow the wire/persisted format exactly; a record is either
/// fully populated or absent, never partial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
	/// Opaque remote session identifier.
	pub id: String,
	/// Host of the remote automation server.
	pub host: String,
	/// Port of the remote automation server.
	pub port: u16,
	/// URL path scoping subsequent commands to this session.
	pub session_prefix: String,
	/// Per-command timeout, in seconds.
	pub selenium_server_requests_timeout: u64,
}

impl SessionRecord {
	/// Per-command timeout as a [`Duration`].
	pub fn command_timeout(&self) -> Duration {
		Duration::from_secs(self.selenium_server_requests_timeout)
	}
}

/// Filesystem store holding one session record per browser name.
#[derive(Debug, Clone)]
pub struct RecordStore {
	base_dir: PathBuf,
}

impl Default for RecordStore {
	/// Store rooted at the process working directory.
	fn default() -> Self {
		Self::new(".")
	}
}

impl RecordStore {
	/// Creates a store rooted at `base_dir`.
	pub fn new(base_dir: impl Into<PathBuf>) -> Self {
		Self {
			base_dir: base_dir.into(),
		}
	}

	/// Path of the record file for `browser_name`.
	pub fn location_for(&self, browser_name: &str) -> PathBuf {
		self.base_dir.join(format!(".session_{browser_name}"))
	}

	/// Loads the record for `browser_name`, or `None` when no prior
	/// session exists. A missing file is not an error; a file that fails
	/// to parse is.
	pub fn load(&self, browser_name: &str) -> Result<Option<SessionRecord>> {
		let path = self.location_for(browser_name);
		let content = match fs::read_to_string(&path) {
			Ok(content) => content,
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
			Err(err) => return Err(WdError::Io(err)),
		};

		let record = serde_json::from_str(&content).map_err(|source| WdError::CorruptRecord { path, source })?;
		Ok(Some(record))
	}

	/// Serializes `record` and overwrites the file for `browser_name`.
	/// Last writer wins; no locking is performed.
	pub fn save(&self, browser_name: &str, record: &SessionRecord) -> Result<()> {
		let path = self.location_for(browser_name);
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent)?;
		}

		let content = serde_json::to_string_pretty(record)?;
		fs::write(&path, content)?;
		debug!(target = "wd.session", path = %path.display(), id = %record.id, "saved session record");
		Ok(())
	}
}
