//! Liveness check for persisted session records.

use wd_protocol::SessionSummary;

use super::record::SessionRecord;

/// Returns `true` iff `live_sessions` contains an entry whose id equals
/// `record.id`. Exact string comparison, no normalization; session counts
/// are single digits in practice, so a linear scan is enough.
pub fn is_valid(record: &SessionRecord, live_sessions: &[SessionSummary]) -> bool {
	live_sessions.iter().any(|session| session.id == record.id)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record_with_id(id: &str) -> SessionRecord {
		SessionRecord {
			id: id.into(),
			host: "127.0.0.1".into(),
			port: 4444,
			session_prefix: format!("/wd/hub/session/{id}"),
			selenium_server_requests_timeout: 30,
		}
	}

	fn summary(id: &str) -> SessionSummary {
		SessionSummary {
			id: id.into(),
			capabilities: serde_json::Value::Null,
		}
	}

	#[test]
	fn record_is_valid_when_listing_contains_its_id() {
		let live = [summary("abc"), summary("xyz")];
		assert!(is_valid(&record_with_id("abc"), &live));
	}

	#[test]
	fn record_is_invalid_when_listing_omits_its_id() {
		let live = [summary("xyz")];
		assert!(!is_valid(&record_with_id("abc"), &live));
	}

	#[test]
	fn record_is_invalid_against_an_empty_listing() {
		assert!(!is_valid(&record_with_id("abc"), &[]));
	}

	#[test]
	fn match_is_exact_not_prefix_based() {
		let live = [summary("abcdef")];
		assert!(!is_valid(&record_with_id("abc"), &live));
	}
}
