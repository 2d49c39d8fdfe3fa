use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WdError>;

#[derive(Debug, Error)]
pub enum WdError {
	/// Persisted record exists but does not parse. Surfaced as-is; the
	/// store never repairs or deletes a record it cannot read.
	#[error("malformed session record at {path}")]
	CorruptRecord {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("invalid server address: {address}")]
	ServerAddress {
		address: String,
		#[source]
		source: url::ParseError,
	},

	/// Server answered, but not with the wire shape or status we expect.
	#[error("unexpected server response: {0}")]
	Protocol(String),

	#[error(transparent)]
	Http(#[from] reqwest::Error),

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Anyhow(#[from] anyhow::Error),
}
