//! Pure acquisition-plan selection for session reuse.

use wd_protocol::SessionSummary;

use super::record::SessionRecord;
use super::validator;

/// How the next session should be acquired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquisitionPlan {
	/// Rebuild the handle from this record; the remote session is live.
	Reuse(SessionRecord),
	/// Delegate to the base strategy for a brand-new session.
	CreateFresh,
}

/// Resolves the acquisition plan once the record lookup and listing
/// outcomes are in hand.
///
/// `live_sessions` is `None` when the listing call failed. An unreachable
/// server and an expired session are not distinguished: both resolve to
/// [`AcquisitionPlan::CreateFresh`].
pub fn resolve_acquisition(
	record: Option<SessionRecord>,
	live_sessions: Option<&[SessionSummary]>,
) -> AcquisitionPlan {
	match (record, live_sessions) {
		(Some(record), Some(live)) if validator::is_valid(&record, live) => AcquisitionPlan::Reuse(record),
		_ => AcquisitionPlan::CreateFresh,
	}
}
