//! Contribution DTOs
//!
//! Wire shape of the contributions endpoint, consumed by the portfolio frontend.

use serde::Serialize;

use crate::domain::models::contributions::{ContributionDay, ContributionWeek, Contributions};

/// A day of the contribution calendar
#[derive(Debug, Clone, Serialize)]
pub struct ContributionDayDto {
    pub date: String,
    pub count: u32,
    /// Activity bucket 0-4
    pub level: u8,
}

/// A week of the contribution calendar
#[derive(Debug, Clone, Serialize)]
pub struct ContributionWeekDto {
    pub days: Vec<ContributionDayDto>,
}

/// DTO for the contributions summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsResponseDto {
    pub total_contributions: u32,
    pub commits: u32,
    pub pull_requests: u32,
    pub issues: u32,
    pub repositories_contributed_to: u32,
    pub weeks: Vec<ContributionWeekDto>,
    pub account_age: String,
}

impl From<ContributionDay> for ContributionDayDto {
    fn from(day: ContributionDay) -> Self {
        Self {
            date: day.date,
            count: day.count,
            level: day.level.as_u8(),
        }
    }
}

impl From<ContributionWeek> for ContributionWeekDto {
    fn from(week: ContributionWeek) -> Self {
        Self {
            days: week.days.into_iter().map(ContributionDayDto::from).collect(),
        }
    }
}

impl From<Contributions> for ContributionsResponseDto {
    fn from(contributions: Contributions) -> Self {
        Self {
            total_contributions: contributions.total_contributions,
            commits: contributions.commits,
            pull_requests: contributions.pull_requests,
            issues: contributions.issues,
            repositories_contributed_to: contributions.repositories_contributed_to,
            weeks: contributions.weeks.into_iter().map(ContributionWeekDto::from).collect(),
            account_age: contributions.account_age,
        }
    }
}
