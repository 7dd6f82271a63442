use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::TimeInterval;

/// Recurring weekly working hours for one weekday. `day_of_week` uses the
/// stored convention 0 = Sunday .. 6 = Saturday; a professional carries
/// exactly one rule per weekday.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRule {
    pub day_of_week: u8,
    pub active: bool,
    pub intervals: Vec<TimeInterval>,
}

/// Day-specific override. When present for a date it replaces the weekly
/// rule entirely: `active: false` is a day off regardless of the rule,
/// `active: true` works exactly `intervals` (which may be empty).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityException {
    pub date: NaiveDate,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intervals: Option<Vec<TimeInterval>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professional {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub email: String,
    pub specialty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub availability: Vec<AvailabilityRule>,
    pub exceptions: Vec<AvailabilityException>,
    /// Slot step in minutes; optional in stored data, 60 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_interval: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exception_omits_absent_fields() {
        let exception = AvailabilityException {
            date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            active: false,
            intervals: None,
            reason: Some("Folga".into()),
        };
        let json = serde_json::to_value(&exception).unwrap();
        assert_eq!(json["date"], "2024-06-10");
        assert!(json.get("intervals").is_none());
        assert_eq!(json["reason"], "Folga");
    }

    #[test]
    fn rule_round_trips_hhmm_intervals() {
        let raw = r#"{"dayOfWeek":1,"active":true,"intervals":[{"start":"09:00","end":"18:00"}]}"#;
        let rule: AvailabilityRule = serde_json::from_str(raw).unwrap();
        assert_eq!(rule.day_of_week, 1);
        assert_eq!(rule.intervals.len(), 1);
        assert_eq!(serde_json::to_string(&rule).unwrap(), raw);
    }
}
