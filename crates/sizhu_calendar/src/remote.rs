//! Remote calendar backend over HTTP.
//!
//! Single blocking request per resolution: no retry, no fallback to the
//! local backend (backend choice is a deployment decision, not runtime
//! failover). Every transport, status, or decode failure maps to
//! [`CalendarError::Unavailable`].

use serde::{Deserialize, Serialize};
use sizhu_tables::{Branch, Pillar, Stem};

use crate::error::CalendarError;
use crate::provider::{CalendarProvider, DayInfo, LunarDisplay};

/// Request body for the calendar microservice's `/day` endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
struct DayRequest {
    year: i32,
    month: u32,
    day: u32,
}

/// Response body of the `/day` endpoint.
///
/// Stem and branch arrive as single Chinese characters, the same alphabet
/// the tables crate exposes via `symbol()`.
#[derive(Debug, Clone, Deserialize)]
pub struct DayResponse {
    pub day_stem: String,
    pub day_branch: String,
    #[serde(default)]
    pub lunar: Option<LunarResponse>,
}

/// Optional lunar display block of the `/day` response.
#[derive(Debug, Clone, Deserialize)]
pub struct LunarResponse {
    pub year: String,
    pub month: String,
    pub day: String,
}

/// Calendar authority backed by a remote calendar microservice.
#[derive(Debug, Clone)]
pub struct RemoteCalendar {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl RemoteCalendar {
    /// Client for a service at `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/day", self.base_url)
    }
}

/// Turn a decoded response into [`DayInfo`].
///
/// Separated from the transport so malformed-symbol handling is testable
/// without a socket.
pub fn day_info_from_response(resp: DayResponse) -> Result<DayInfo, CalendarError> {
    let stem = Stem::from_symbol(&resp.day_stem)
        .ok_or_else(|| CalendarError::Unavailable(format!("unknown day stem {:?}", resp.day_stem)))?;
    let branch = Branch::from_symbol(&resp.day_branch).ok_or_else(|| {
        CalendarError::Unavailable(format!("unknown day branch {:?}", resp.day_branch))
    })?;
    let lunar = resp.lunar.map(|l| LunarDisplay {
        year: l.year,
        month: l.month,
        day: l.day,
    });
    Ok(DayInfo {
        pillar: Pillar::new(stem, branch),
        lunar,
    })
}

impl CalendarProvider for RemoteCalendar {
    fn resolve_day(&self, year: i32, month: u32, day: u32) -> Result<DayInfo, CalendarError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&DayRequest { year, month, day })
            .send()
            .map_err(|e| CalendarError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CalendarError::Unavailable(format!(
                "calendar service returned {status}"
            )));
        }

        let decoded: DayResponse = response
            .json()
            .map_err(|e| CalendarError::Unavailable(e.to_string()))?;
        day_info_from_response(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_response() {
        let resp: DayResponse = serde_json::from_str(
            r#"{"day_stem":"戊","day_branch":"午",
                "lunar":{"year":"己卯兔年","month":"十一月","day":"廿五"}}"#,
        )
        .unwrap();
        let info = day_info_from_response(resp).unwrap();
        assert_eq!(info.pillar.to_string(), "戊午");
        assert_eq!(info.lunar.unwrap().month, "十一月");
    }

    #[test]
    fn lunar_block_is_optional() {
        let resp: DayResponse =
            serde_json::from_str(r#"{"day_stem":"甲","day_branch":"子"}"#).unwrap();
        let info = day_info_from_response(resp).unwrap();
        assert_eq!(info.pillar.to_string(), "甲子");
        assert!(info.lunar.is_none());
    }

    #[test]
    fn unknown_symbol_is_unavailable() {
        let resp: DayResponse =
            serde_json::from_str(r#"{"day_stem":"子","day_branch":"午"}"#).unwrap();
        assert!(matches!(
            day_info_from_response(resp),
            Err(CalendarError::Unavailable(_))
        ));
    }

    #[test]
    fn base_url_trailing_slash() {
        let cal = RemoteCalendar::new("http://calendar.internal/");
        assert_eq!(cal.endpoint(), "http://calendar.internal/day");
    }
}
