//! Response envelope and session descriptors for the remote server.

use serde::{Deserialize, Serialize};

/// Envelope wrapping every response from the remote server.
///
/// Legacy servers report success through `status == 0` and, on some
/// endpoints, a redundant `state: "success"` marker. Both are optional on
/// the wire; an envelope carrying neither is treated as successful.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireResponse<T> {
	/// Session this response belongs to, when the command was session-scoped.
	#[serde(default)]
	pub session_id: Option<String>,
	/// Numeric status code; `0` (or absent) is success.
	#[serde(default)]
	pub status: Option<i64>,
	/// Legacy textual status marker.
	#[serde(default)]
	pub state: Option<String>,
	/// Endpoint-specific payload.
	pub value: T,
}

impl<T> WireResponse<T> {
	/// Returns `true` when the envelope reports success.
	pub fn is_success(&self) -> bool {
		match (self.status, self.state.as_deref()) {
			(Some(code), _) => code == 0,
			(None, Some(state)) => state == "success",
			(None, None) => true,
		}
	}
}

/// One entry of the server's live-session listing (`GET /wd/hub/sessions`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
	/// Opaque remote session identifier.
	pub id: String,
	/// Capabilities the session was created with; shape varies per browser.
	#[serde(default)]
	pub capabilities: serde_json::Value,
}

/// Payload for creating a new session (`POST /wd/hub/session`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSessionRequest {
	/// Capabilities the new session must satisfy.
	pub desired_capabilities: Capabilities,
}

/// Desired capabilities for a new session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
	/// Browser the session drives (`"firefox"`, `"chrome"`, ...).
	pub browser_name: String,
	/// Additional capability entries passed through verbatim.
	#[serde(flatten)]
	pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Capabilities {
	/// Builds capabilities requesting only a browser by name.
	pub fn browser(name: impl Into<String>) -> Self {
		Self {
			browser_name: name.into(),
			extra: serde_json::Map::new(),
		}
	}
}
