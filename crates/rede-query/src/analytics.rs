//! Date-range analytics: period selection, interval construction, and the
//! management summary over registrations and activity.
//!
//! The reference instant is always an explicit parameter; nothing in here
//! reads the system clock, so a summary for a given instant is reproducible.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};

use rede_core::entities::{ActivityLogEntry, Partner, Professional};
use rede_core::enums::ActivityAction;
use rede_store::NetworkStore;

/// The three named lookback periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Last7Days,
    Last30Days,
    Last90Days,
}

impl Period {
    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::Last7Days => 7,
            Self::Last30Days => 30,
            Self::Last90Days => 90,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Last7Days => "Últimos 7 dias",
            Self::Last30Days => "Últimos 30 dias",
            Self::Last90Days => "Últimos 90 dias",
        }
    }
}

/// A named period or an explicit custom range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodSelection {
    Named(Period),
    /// A custom range; when `to` is unset the range covers `from`'s day.
    Custom {
        from: DateTime<Utc>,
        to: Option<DateTime<Utc>>,
    },
}

impl PeriodSelection {
    /// The concrete interval this selection denotes, relative to `now` for
    /// named periods.
    #[must_use]
    pub fn interval(self, now: DateTime<Utc>) -> AnalysisInterval {
        match self {
            Self::Named(period) => AnalysisInterval::for_period(period, now),
            Self::Custom { from, to } => AnalysisInterval::custom(from, to),
        }
    }

    /// Display label: the named-period text, or the custom range formatted
    /// as `dd/MM/yyyy`.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Named(period) => period.label().to_string(),
            Self::Custom { from, to } => match to {
                Some(to) => format!("{} - {}", from.format("%d/%m/%Y"), to.format("%d/%m/%Y")),
                None => from.format("%d/%m/%Y").to_string(),
            },
        }
    }
}

/// A day-aligned interval, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl AnalysisInterval {
    /// `[start of (now - (N-1) days), end of now's day]`, so a 7-day period
    /// covers today plus the six days before it.
    #[must_use]
    pub fn for_period(period: Period, now: DateTime<Utc>) -> Self {
        Self {
            start: start_of_day(now - Duration::days(period.days() - 1)),
            end: end_of_day(now),
        }
    }

    /// Floors the start to its day and ceils the end (the start's day when
    /// no end was chosen).
    #[must_use]
    pub fn custom(from: DateTime<Utc>, to: Option<DateTime<Utc>>) -> Self {
        Self {
            start: start_of_day(from),
            end: end_of_day(to.unwrap_or(from)),
        }
    }

    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

fn start_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    Utc.from_utc_datetime(&instant.date_naive().and_time(NaiveTime::MIN))
}

fn end_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    start_of_day(instant) + Duration::days(1) - Duration::milliseconds(1)
}

/// Everything the management analysis page shows for one interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSummary {
    /// Partners registered within the interval, seed order.
    pub partners: Vec<Partner>,
    /// Professionals registered within the interval, seed order.
    pub professionals: Vec<Professional>,
    /// Activity-log entries within the interval, newest first.
    pub activities: Vec<ActivityLogEntry>,
    /// How many of those activities are link creations.
    pub new_link_count: usize,
}

impl PeriodSummary {
    #[must_use]
    pub fn compute(store: &NetworkStore, interval: AnalysisInterval) -> Self {
        let partners: Vec<Partner> = store
            .partners()
            .iter()
            .filter(|p| interval.contains(p.registered_at))
            .cloned()
            .collect();
        let professionals: Vec<Professional> = store
            .professionals()
            .iter()
            .filter(|p| interval.contains(p.registered_at))
            .cloned()
            .collect();
        let activities: Vec<ActivityLogEntry> = store
            .activity_log()
            .iter()
            .filter(|e| interval.contains(e.timestamp))
            .cloned()
            .collect();
        let new_link_count = activities
            .iter()
            .filter(|e| e.action == ActivityAction::LinkCreated)
            .count();

        Self {
            partners,
            professionals,
            activities,
            new_link_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
    }

    fn store() -> NetworkStore {
        NetworkStore::seeded(now())
    }

    #[test]
    fn named_period_spans_n_days_inclusive() {
        let interval = AnalysisInterval::for_period(Period::Last7Days, now());
        assert_eq!(
            interval.start,
            Utc.with_ymd_and_hms(2026, 7, 26, 0, 0, 0).unwrap()
        );
        assert_eq!(
            interval.end,
            Utc.with_ymd_and_hms(2026, 8, 1, 23, 59, 59).unwrap()
                + Duration::milliseconds(999)
        );
    }

    #[test]
    fn interval_is_inclusive_at_day_granularity() {
        let interval = AnalysisInterval::for_period(Period::Last7Days, now());
        let last_second = Utc.with_ymd_and_hms(2026, 7, 26, 0, 0, 0).unwrap();
        assert!(interval.contains(last_second));
        let just_before = last_second - Duration::milliseconds(1);
        assert!(!interval.contains(just_before));
        let end_of_window = Utc.with_ymd_and_hms(2026, 8, 1, 23, 59, 59).unwrap();
        assert!(interval.contains(end_of_window));
        let day_after = Utc.with_ymd_and_hms(2026, 8, 2, 0, 0, 0).unwrap();
        assert!(!interval.contains(day_after));
    }

    #[test]
    fn custom_range_reuses_the_start_day_without_an_end() {
        let from = Utc.with_ymd_and_hms(2026, 7, 10, 15, 30, 0).unwrap();
        let interval = AnalysisInterval::custom(from, None);
        assert_eq!(
            interval.start,
            Utc.with_ymd_and_hms(2026, 7, 10, 0, 0, 0).unwrap()
        );
        assert!(interval.contains(Utc.with_ymd_and_hms(2026, 7, 10, 23, 59, 59).unwrap()));
        assert!(!interval.contains(Utc.with_ymd_and_hms(2026, 7, 11, 0, 0, 0).unwrap()));
    }

    #[rstest]
    #[case(Period::Last7Days, "Últimos 7 dias")]
    #[case(Period::Last30Days, "Últimos 30 dias")]
    #[case(Period::Last90Days, "Últimos 90 dias")]
    fn named_period_labels(#[case] period: Period, #[case] expected: &str) {
        assert_eq!(PeriodSelection::Named(period).label(), expected);
    }

    #[test]
    fn custom_label_formats_both_ends() {
        let from = Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2026, 7, 15, 0, 0, 0).unwrap();
        let selection = PeriodSelection::Custom {
            from,
            to: Some(to),
        };
        assert_eq!(selection.label(), "01/07/2026 - 15/07/2026");
    }

    #[test]
    fn seven_day_summary_over_seed_data() {
        let summary = PeriodSummary::compute(
            &store(),
            AnalysisInterval::for_period(Period::Last7Days, now()),
        );
        // Registered within 6 days of the reference: est-1 (5d), est-5 (3d).
        assert_eq!(summary.partners.len(), 2);
        // prof-4 (2d), prof-9 (6d).
        assert_eq!(summary.professionals.len(), 2);
        // All eleven seed entries are at most five days old.
        assert_eq!(summary.activities.len(), 11);
        assert_eq!(summary.new_link_count, 2);
    }

    #[test]
    fn ninety_day_summary_widens_the_net() {
        let summary = PeriodSummary::compute(
            &store(),
            AnalysisInterval::for_period(Period::Last90Days, now()),
        );
        assert_eq!(summary.partners.len(), 8); // est-3 and est-7 are older.
        assert_eq!(summary.professionals.len(), 7); // prof-3 and prof-7 are older.
    }

    #[test]
    fn link_creations_count_only_that_action() {
        // Seed relative to the real clock: mutations stamp entries with the
        // current instant, and both must land in the same window.
        let mut store = NetworkStore::seeded(Utc::now());
        store
            .create_link("est-2", "prof-2", rede_store::LinkTerms::default())
            .unwrap();
        store
            .set_partner_status("est-2", rede_core::enums::Status::Ativo)
            .unwrap();
        let summary = PeriodSummary::compute(
            &store,
            AnalysisInterval::for_period(Period::Last7Days, Utc::now()),
        );
        assert_eq!(summary.new_link_count, 3);
    }
}
