//! Contribution Domain Model
//!
//! GitHub contribution activity as reported upstream, and the reshaped
//! summary served to the portfolio frontend.

use chrono::{DateTime, Months, Utc};

const DAYS_PER_YEAR: i64 = 365;
const DAYS_PER_MONTH: i64 = 30;

/// Coarse daily activity bucket, 0 (none) to 4 (highest quartile)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum ContributionLevel {
    #[default]
    None = 0,
    FirstQuartile = 1,
    SecondQuartile = 2,
    ThirdQuartile = 3,
    FourthQuartile = 4,
}

impl ContributionLevel {
    /// Map an upstream level label onto a bucket. Unknown labels count as `None`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "FIRST_QUARTILE" => Self::FirstQuartile,
            "SECOND_QUARTILE" => Self::SecondQuartile,
            "THIRD_QUARTILE" => Self::ThirdQuartile,
            "FOURTH_QUARTILE" => Self::FourthQuartile,
            _ => Self::None,
        }
    }

    #[must_use]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Time range covered by a contributions query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl ContributionWindow {
    /// The calendar month ending at `now`.
    ///
    /// The day of month is clamped to the length of the previous month
    /// (March 31st goes back to the last day of February).
    #[must_use]
    pub fn last_month(now: DateTime<Utc>) -> Self {
        let from = now.checked_sub_months(Months::new(1)).unwrap_or(now);
        Self { from, to: now }
    }
}

/// One day of the upstream contribution calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDay {
    pub date: String,
    pub count: u32,
    pub level: String,
}

/// Raw contribution activity for one account as returned by the upstream service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionActivity {
    pub account_created_at: DateTime<Utc>,
    pub total_contributions: u32,
    pub commits: u32,
    pub pull_requests: u32,
    pub issues: u32,
    pub repositories_contributed_to: u32,
    pub weeks: Vec<Vec<ActivityDay>>,
}

/// A day in the reshaped calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionDay {
    pub date: String,
    pub count: u32,
    pub level: ContributionLevel,
}

/// A week in the reshaped calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionWeek {
    pub days: Vec<ContributionDay>,
}

/// Contribution summary served to clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributions {
    pub total_contributions: u32,
    pub commits: u32,
    pub pull_requests: u32,
    pub issues: u32,
    pub repositories_contributed_to: u32,
    pub weeks: Vec<ContributionWeek>,
    pub account_age: String,
}

impl Contributions {
    /// Reshape upstream activity, computing the account age relative to `now`
    #[must_use]
    pub fn from_activity(activity: ContributionActivity, now: DateTime<Utc>) -> Self {
        let weeks = activity
            .weeks
            .into_iter()
            .map(|days| ContributionWeek {
                days: days
                    .into_iter()
                    .map(|day| ContributionDay {
                        level: ContributionLevel::from_label(&day.level),
                        date: day.date,
                        count: day.count,
                    })
                    .collect(),
            })
            .collect();

        Self {
            total_contributions: activity.total_contributions,
            commits: activity.commits,
            pull_requests: activity.pull_requests,
            issues: activity.issues,
            repositories_contributed_to: activity.repositories_contributed_to,
            weeks,
            account_age: account_age(activity.account_created_at, now),
        }
    }
}

/// Human-readable age such as `"3y 2mo"`, `"5mo"` or `"12d"`.
///
/// Uses 365-day years and 30-day months on whole elapsed days.
#[must_use]
pub fn account_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    // Clock skew can put the creation timestamp slightly in the future
    let days = (now - created_at).num_days().max(0);
    let years = days / DAYS_PER_YEAR;
    let months = (days % DAYS_PER_YEAR) / DAYS_PER_MONTH;

    if years > 0 {
        if months > 0 {
            format!("{years}y {months}mo")
        } else {
            format!("{years}y")
        }
    } else if months > 0 {
        format!("{months}mo")
    } else {
        format!("{days}d")
    }
}
