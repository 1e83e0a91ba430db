//! Screening Event Entity
//!
//! Audit record of one email evaluation performed through the API.
//! Monitoring reads these rows; nothing else does.

use chrono::Utc;
use kernel::id::ScreeningEventId;
use std::net::IpAddr;

use crate::domain::value_object::risk::RiskScore;

/// One recorded evaluation
#[derive(Debug, Clone)]
pub struct ScreeningEvent {
    pub event_id: ScreeningEventId,
    /// Normalized (lowercased, trimmed) address that was evaluated
    pub email: String,
    /// Domain segment, when one could be extracted
    pub domain: Option<String>,
    pub risk_score: RiskScore,
    /// Whether the verdict accepted the address
    pub accepted: bool,
    pub client_ip: Option<IpAddr>,
    pub user_agent: Option<String>,
    /// Epoch millis
    pub created_at_ms: i64,
}

impl ScreeningEvent {
    pub fn new(
        email: String,
        domain: Option<String>,
        risk_score: RiskScore,
        accepted: bool,
        client_ip: Option<IpAddr>,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            event_id: ScreeningEventId::new(),
            email,
            domain,
            risk_score,
            accepted,
            client_ip,
            user_agent,
            created_at_ms: Utc::now().timestamp_millis(),
        }
    }
}
