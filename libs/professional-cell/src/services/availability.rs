use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use tracing::debug;
use uuid::Uuid;

use shared_models::{
    AvailabilityException, AvailabilityRule, Professional, TenantContext, TimeInterval,
};
use shared_storage::{AppState, Repository};

use crate::error::ProfessionalError;
use crate::models::{DayAvailability, UpsertExceptionRequest};

/// Stored day-of-week convention: 0 = Sunday .. 6 = Saturday.
pub fn weekday_index(date: NaiveDate) -> u8 {
    match date.weekday() {
        Weekday::Sun => 0,
        Weekday::Mon => 1,
        Weekday::Tue => 2,
        Weekday::Wed => 3,
        Weekday::Thu => 4,
        Weekday::Fri => 5,
        Weekday::Sat => 6,
    }
}

/// Resolve what the professional works on `date`. An exception for the
/// exact date overrides the weekly rule entirely; an active exception
/// with no intervals is a working day with zero bookable time. A missing
/// weekly rule counts as a day off.
pub fn resolve_day(date: NaiveDate, professional: &Professional) -> DayAvailability {
    if let Some(exception) = professional.exceptions.iter().find(|e| e.date == date) {
        if !exception.active {
            return DayAvailability::off();
        }
        return DayAvailability {
            is_working: true,
            intervals: exception.intervals.clone().unwrap_or_default(),
        };
    }

    let day_of_week = weekday_index(date);
    match professional
        .availability
        .iter()
        .find(|rule| rule.day_of_week == day_of_week)
    {
        Some(rule) if rule.active => DayAvailability {
            is_working: true,
            intervals: rule.intervals.clone(),
        },
        _ => DayAvailability::off(),
    }
}

/// Stock template for new professionals: Monday through Friday
/// 09:00-18:00, weekends off.
pub fn default_week() -> Vec<AvailabilityRule> {
    let nine_to_six = vec![TimeInterval::new(
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
    )];
    (0u8..7)
        .map(|day_of_week| AvailabilityRule {
            day_of_week,
            active: (1..=5).contains(&day_of_week),
            intervals: nine_to_six.clone(),
        })
        .collect()
}

fn validate_intervals(intervals: &[TimeInterval]) -> Result<(), ProfessionalError> {
    for interval in intervals {
        if !interval.is_valid() {
            return Err(ProfessionalError::ValidationError(format!(
                "Interval start {} must be before end {}",
                interval.start.format("%H:%M"),
                interval.end.format("%H:%M"),
            )));
        }
    }
    Ok(())
}

/// A weekly schedule must cover each of the 7 weekdays exactly once with
/// well-formed intervals.
pub fn validate_weekly_rules(rules: &[AvailabilityRule]) -> Result<(), ProfessionalError> {
    if rules.len() != 7 {
        return Err(ProfessionalError::ValidationError(
            "Weekly availability must cover exactly 7 days".to_string(),
        ));
    }

    let mut seen = [false; 7];
    for rule in rules {
        if rule.day_of_week > 6 {
            return Err(ProfessionalError::ValidationError(
                "Day of week must be between 0 (Sunday) and 6 (Saturday)".to_string(),
            ));
        }
        if seen[rule.day_of_week as usize] {
            return Err(ProfessionalError::ValidationError(format!(
                "Duplicate rule for day of week {}",
                rule.day_of_week
            )));
        }
        seen[rule.day_of_week as usize] = true;
        validate_intervals(&rule.intervals)?;
    }

    Ok(())
}

pub struct AvailabilityService {
    professionals: Arc<dyn Repository<Professional>>,
}

impl AvailabilityService {
    pub fn new(state: &AppState) -> Self {
        Self {
            professionals: state.store.professionals.clone(),
        }
    }

    /// Replace the professional's whole weekly schedule.
    pub async fn replace_weekly_rules(
        &self,
        ctx: &TenantContext,
        professional_id: Uuid,
        mut rules: Vec<AvailabilityRule>,
    ) -> Result<Professional, ProfessionalError> {
        debug!("Replacing weekly rules for professional {}", professional_id);
        validate_weekly_rules(&rules)?;
        rules.sort_by_key(|rule| rule.day_of_week);

        let mut professional = self.professionals.get(ctx, professional_id).await?;
        professional.availability = rules;
        Ok(self.professionals.update(ctx, professional).await?)
    }

    /// Insert or replace the exception for one date. The payload is
    /// stored as sent: activating a date with no intervals deliberately
    /// leaves a working day with zero bookable time.
    pub async fn upsert_exception(
        &self,
        ctx: &TenantContext,
        professional_id: Uuid,
        request: UpsertExceptionRequest,
    ) -> Result<Professional, ProfessionalError> {
        debug!(
            "Upserting availability exception for professional {} on {}",
            professional_id, request.date
        );
        if let Some(ref intervals) = request.intervals {
            validate_intervals(intervals)?;
        }

        let mut professional = self.professionals.get(ctx, professional_id).await?;
        professional.exceptions.retain(|e| e.date != request.date);
        professional.exceptions.push(AvailabilityException {
            date: request.date,
            active: request.active,
            intervals: request.intervals,
            reason: request.reason,
        });
        professional.exceptions.sort_by_key(|e| e.date);
        Ok(self.professionals.update(ctx, professional).await?)
    }

    pub async fn remove_exception(
        &self,
        ctx: &TenantContext,
        professional_id: Uuid,
        date: NaiveDate,
    ) -> Result<Professional, ProfessionalError> {
        debug!(
            "Removing availability exception for professional {} on {}",
            professional_id, date
        );
        let mut professional = self.professionals.get(ctx, professional_id).await?;
        let before = professional.exceptions.len();
        professional.exceptions.retain(|e| e.date != date);
        if professional.exceptions.len() == before {
            return Err(ProfessionalError::ExceptionNotFound(date));
        }
        Ok(self.professionals.update(ctx, professional).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_utils::fixtures::{hm, professional_fixture};

    // 2024-06-10 is a Monday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn weekday_index_starts_at_sunday() {
        let sunday = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        assert_eq!(weekday_index(sunday), 0);
        assert_eq!(weekday_index(monday()), 1);
        let saturday = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(weekday_index(saturday), 6);
    }

    #[test]
    fn weekly_rule_decides_without_exception() {
        let mut professional = professional_fixture(Uuid::new_v4());
        professional.availability = default_week();

        let workday = resolve_day(monday(), &professional);
        assert!(workday.is_working);
        assert_eq!(workday.intervals, vec![TimeInterval::new(hm(9, 0), hm(18, 0))]);

        let sunday = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        assert_eq!(resolve_day(sunday, &professional), DayAvailability::off());
    }

    #[test]
    fn inactive_exception_overrides_an_active_rule() {
        let mut professional = professional_fixture(Uuid::new_v4());
        professional.exceptions.push(AvailabilityException {
            date: monday(),
            active: false,
            intervals: None,
            reason: Some("Folga".to_string()),
        });

        assert_eq!(resolve_day(monday(), &professional), DayAvailability::off());
    }

    #[test]
    fn active_exception_replaces_the_rule_intervals() {
        let mut professional = professional_fixture(Uuid::new_v4());
        professional.exceptions.push(AvailabilityException {
            date: monday(),
            active: true,
            intervals: Some(vec![TimeInterval::new(hm(14, 0), hm(16, 0))]),
            reason: None,
        });

        let day = resolve_day(monday(), &professional);
        assert!(day.is_working);
        assert_eq!(day.intervals, vec![TimeInterval::new(hm(14, 0), hm(16, 0))]);
    }

    #[test]
    fn active_exception_without_intervals_is_working_but_empty() {
        let mut professional = professional_fixture(Uuid::new_v4());
        professional.exceptions.push(AvailabilityException {
            date: monday(),
            active: true,
            intervals: None,
            reason: None,
        });

        let day = resolve_day(monday(), &professional);
        assert!(day.is_working);
        assert!(day.intervals.is_empty());
    }

    #[test]
    fn exception_on_a_day_off_can_open_it() {
        let mut professional = professional_fixture(Uuid::new_v4());
        professional.availability = default_week();
        let sunday = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        professional.exceptions.push(AvailabilityException {
            date: sunday,
            active: true,
            intervals: Some(vec![TimeInterval::new(hm(10, 0), hm(12, 0))]),
            reason: Some("Plantão".to_string()),
        });

        let day = resolve_day(sunday, &professional);
        assert!(day.is_working);
        assert_eq!(day.intervals.len(), 1);
    }

    #[test]
    fn missing_weekly_rule_means_day_off() {
        let mut professional = professional_fixture(Uuid::new_v4());
        professional.availability.clear();
        assert_eq!(resolve_day(monday(), &professional), DayAvailability::off());
    }

    #[test]
    fn resolve_day_is_idempotent() {
        let professional = professional_fixture(Uuid::new_v4());
        let first = resolve_day(monday(), &professional);
        let second = resolve_day(monday(), &professional);
        assert_eq!(first, second);
    }

    #[test]
    fn weekly_rules_must_cover_each_day_once() {
        let mut rules = default_week();
        assert!(validate_weekly_rules(&rules).is_ok());

        rules[6].day_of_week = 5;
        assert!(validate_weekly_rules(&rules).is_err());

        let mut short = default_week();
        short.pop();
        assert!(validate_weekly_rules(&short).is_err());
    }

    #[test]
    fn weekly_rules_reject_backwards_intervals() {
        let mut rules = default_week();
        rules[1].intervals = vec![TimeInterval::new(hm(18, 0), hm(9, 0))];
        assert!(validate_weekly_rules(&rules).is_err());
    }
}
