//! Aggregator — pure functions turning raw event rows into derived
//! statistics. Nothing here touches the store or performs I/O; callers fetch
//! the event collections first.

use std::collections::HashMap;

use chrono::{Datelike as _, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  actor::{Actor, Role},
  error::ValidationError,
  event::{AttendanceEvent, Status},
  Result,
};

// ─── Monthly summary ─────────────────────────────────────────────────────────

/// Per-month status counts for the monthly report. `Late` events carry no
/// bucket here; the monthly report shape has always been present/excused/sick
/// only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
  pub present: u32,
  pub excused: u32,
  pub sick:    u32,
}

/// One subject's status counts for one calendar month. Derived, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
  pub subject_id: Uuid,
  /// `"MM-YYYY"`.
  pub month:      String,
  pub counts:     StatusCounts,
}

/// Group `events` by calendar month and count statuses within each group.
///
/// Month keys appear in first-encounter order of the input sequence, not
/// calendar order; permuting events within one month never changes that
/// month's counts. A status absent from a month is reported as `0`, never
/// omitted.
pub fn summarize_by_month(
  subject_id: Uuid,
  events: &[AttendanceEvent],
) -> Vec<MonthlySummary> {
  let mut positions: HashMap<String, usize> = HashMap::new();
  let mut summaries: Vec<MonthlySummary> = Vec::new();

  for event in events {
    let month = format!("{:02}-{}", event.date.month(), event.date.year());
    let idx = match positions.get(&month) {
      Some(&idx) => idx,
      None => {
        summaries.push(MonthlySummary {
          subject_id,
          month: month.clone(),
          counts: StatusCounts::default(),
        });
        positions.insert(month, summaries.len() - 1);
        summaries.len() - 1
      }
    };

    let counts = &mut summaries[idx].counts;
    match event.status {
      Status::Present => counts.present += 1,
      Status::Excused => counts.excused += 1,
      Status::Sick => counts.sick += 1,
      // Late does not appear in the monthly report shape.
      Status::Late => {}
    }
  }

  summaries
}

// ─── Period analysis ─────────────────────────────────────────────────────────

/// Raw tallies for one role over one period.
///
/// `late_or_sick` counts events with [`Status::Sick`]. The upstream system
/// labelled this field "late" while counting the sick status, and that
/// mapping is pinned rather than corrected; the field name keeps the oddity
/// visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodCounts {
  pub present:      u32,
  pub excused:      u32,
  pub late_or_sick: u32,
}

impl PeriodCounts {
  pub fn total(self) -> u32 {
    self.present + self.excused + self.late_or_sick
  }
}

/// Percentages of [`PeriodCounts`], each rounded to 2 decimal places.
/// All zero when the period holds no events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodPercentages {
  pub present:      f64,
  pub excused:      f64,
  pub late_or_sick: f64,
}

/// Aggregate statistics for one role over one inclusive date range.
/// Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodGroupAnalysis {
  pub role:                Role,
  /// Size of the full role-filtered actor set, including actors with no
  /// events in the period.
  pub total_users_in_role: usize,
  pub counts:              PeriodCounts,
  pub percentages:         PeriodPercentages,
}

fn round2(value: f64) -> f64 { (value * 100.0).round() / 100.0 }

/// Compute per-role attendance statistics over `[start, end]` inclusive.
///
/// `actors_in_role` is the full set of actors holding `role`; `events` is
/// the concatenation of those actors' events (the caller fetches them, per
/// actor, range-filtered or not — out-of-range events are dropped here
/// either way). Fails with [`ValidationError::BadDateRange`] when `start`
/// is after `end`.
pub fn analyze_by_period(
  role: Role,
  actors_in_role: &[Actor],
  events: &[AttendanceEvent],
  start: NaiveDate,
  end: NaiveDate,
) -> Result<PeriodGroupAnalysis> {
  if start > end {
    return Err(ValidationError::BadDateRange.into());
  }

  let mut counts = PeriodCounts::default();
  for event in events {
    if event.date < start || event.date > end {
      continue;
    }
    match event.status {
      Status::Present => counts.present += 1,
      Status::Excused => counts.excused += 1,
      // Pinned upstream behavior: the third bucket counts Sick, not Late.
      Status::Sick => counts.late_or_sick += 1,
      Status::Late => {}
    }
  }

  let total = counts.total();
  let percentages = if total == 0 {
    // Explicit divide-by-zero guard; never NaN or Infinity.
    PeriodPercentages::default()
  } else {
    let total = f64::from(total);
    PeriodPercentages {
      present:      round2(f64::from(counts.present) * 100.0 / total),
      excused:      round2(f64::from(counts.excused) * 100.0 / total),
      late_or_sick: round2(f64::from(counts.late_or_sick) * 100.0 / total),
    }
  };

  Ok(PeriodGroupAnalysis {
    role,
    total_users_in_role: actors_in_role.len(),
    counts,
    percentages,
  })
}

#[cfg(test)]
mod tests {
  use chrono::NaiveTime;

  use super::*;
  use crate::error::Error;

  fn event(date: &str, status: Status) -> AttendanceEvent {
    AttendanceEvent {
      event_id:   Uuid::new_v4(),
      subject_id: Uuid::new_v4(),
      date:       date.parse().unwrap(),
      time:       NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
      status,
    }
  }

  fn member() -> Actor {
    Actor { actor_id: Uuid::new_v4(), role: Role::Member }
  }

  // ── summarize_by_month ────────────────────────────────────────────────

  #[test]
  fn months_appear_in_first_encounter_order() {
    let subject = Uuid::new_v4();
    // March first, then January, then March again.
    let events = vec![
      event("2025-03-03", Status::Present),
      event("2025-01-20", Status::Sick),
      event("2025-03-04", Status::Excused),
    ];

    let summary = summarize_by_month(subject, &events);
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].month, "03-2025");
    assert_eq!(summary[1].month, "01-2025");
    assert_eq!(
      summary[0].counts,
      StatusCounts { present: 1, excused: 1, sick: 0 }
    );
    assert_eq!(
      summary[1].counts,
      StatusCounts { present: 0, excused: 0, sick: 1 }
    );
  }

  #[test]
  fn absent_statuses_are_reported_as_zero() {
    let summary =
      summarize_by_month(Uuid::new_v4(), &[event("2025-06-02", Status::Present)]);
    assert_eq!(
      summary[0].counts,
      StatusCounts { present: 1, excused: 0, sick: 0 }
    );
  }

  #[test]
  fn permuting_events_within_a_month_keeps_counts() {
    let subject = Uuid::new_v4();
    let a = event("2025-05-01", Status::Present);
    let b = event("2025-05-02", Status::Excused);
    let c = event("2025-05-03", Status::Present);

    let forward =
      summarize_by_month(subject, &[a.clone(), b.clone(), c.clone()]);
    let backward = summarize_by_month(subject, &[c, b, a]);
    assert_eq!(forward[0].counts, backward[0].counts);
  }

  #[test]
  fn late_has_no_monthly_bucket() {
    let summary =
      summarize_by_month(Uuid::new_v4(), &[event("2025-02-10", Status::Late)]);
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].counts, StatusCounts::default());
  }

  #[test]
  fn no_events_yield_no_months() {
    assert!(summarize_by_month(Uuid::new_v4(), &[]).is_empty());
  }

  // ── analyze_by_period ─────────────────────────────────────────────────

  fn range() -> (NaiveDate, NaiveDate) {
    ("2025-03-01".parse().unwrap(), "2025-03-31".parse().unwrap())
  }

  #[test]
  fn percentages_sum_to_one_hundred() {
    let (start, end) = range();
    let events = vec![
      event("2025-03-03", Status::Present),
      event("2025-03-04", Status::Present),
      event("2025-03-05", Status::Excused),
    ];

    let analysis =
      analyze_by_period(Role::Member, &[member()], &events, start, end)
        .unwrap();

    let sum = analysis.percentages.present
      + analysis.percentages.excused
      + analysis.percentages.late_or_sick;
    assert!((sum - 100.0).abs() <= 0.01);
    assert_eq!(analysis.percentages.present, 66.67);
    assert_eq!(analysis.percentages.excused, 33.33);
  }

  #[test]
  fn zero_total_yields_all_zero_percentages() {
    let (start, end) = range();
    let analysis =
      analyze_by_period(Role::Member, &[member()], &[], start, end).unwrap();
    assert_eq!(analysis.counts, PeriodCounts::default());
    assert_eq!(analysis.percentages, PeriodPercentages::default());
  }

  #[test]
  fn third_bucket_counts_sick_not_late() {
    // Pins inherited behavior: the "late or sick" bucket tallies Sick
    // events, while Late events fall through uncounted.
    let (start, end) = range();
    let events = vec![
      event("2025-03-10", Status::Sick),
      event("2025-03-11", Status::Late),
    ];

    let analysis =
      analyze_by_period(Role::Member, &[member()], &events, start, end)
        .unwrap();

    assert_eq!(analysis.counts.late_or_sick, 1);
    assert_eq!(analysis.counts.total(), 1);
    assert_eq!(analysis.percentages.late_or_sick, 100.0);
  }

  #[test]
  fn range_is_inclusive_on_both_ends() {
    let (start, end) = range();
    let events = vec![
      event("2025-02-28", Status::Present), // before
      event("2025-03-01", Status::Present), // start boundary
      event("2025-03-31", Status::Present), // end boundary
      event("2025-04-01", Status::Present), // after
    ];

    let analysis =
      analyze_by_period(Role::Member, &[member()], &events, start, end)
        .unwrap();
    assert_eq!(analysis.counts.present, 2);
  }

  #[test]
  fn total_users_counts_eventless_actors() {
    let (start, end) = range();
    let actors = [member(), member()];
    let events = vec![
      event("2025-03-03", Status::Present),
      event("2025-03-04", Status::Present),
      event("2025-03-05", Status::Present),
      event("2025-03-06", Status::Excused),
    ];

    let analysis =
      analyze_by_period(Role::Member, &actors, &events, start, end).unwrap();
    assert_eq!(analysis.total_users_in_role, 2);
    assert_eq!(analysis.counts.present, 3);
    assert_eq!(analysis.counts.excused, 1);
  }

  #[test]
  fn inverted_range_is_rejected() {
    let (start, end) = range();
    let err = analyze_by_period(Role::Member, &[], &[], end, start)
      .unwrap_err();
    assert!(matches!(
      err,
      Error::Validation(ValidationError::BadDateRange)
    ));
    // Equal start and end is a valid one-day period.
    assert!(analyze_by_period(Role::Member, &[], &[], start, start).is_ok());
  }
}
