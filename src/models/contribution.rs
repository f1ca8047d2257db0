use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of the contribution calendar as returned by the GraphQL API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub contribution_count: u32,
}

impl ContributionDay {
    pub fn level(&self) -> ContributionLevel {
        ContributionLevel::classify(self.contribution_count)
    }
}

/// Activity bucket for a single day, 0 (none) through 4 (heaviest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ContributionLevel {
    None = 0,
    Low = 1,
    Medium = 2,
    High = 3,
    VeryHigh = 4,
}

impl ContributionLevel {
    pub const ALL: [ContributionLevel; 5] = [
        ContributionLevel::None,
        ContributionLevel::Low,
        ContributionLevel::Medium,
        ContributionLevel::High,
        ContributionLevel::VeryHigh,
    ];

    /// Buckets a daily count. Counts are unsigned, so the thresholds cover
    /// every input.
    pub fn classify(count: u32) -> Self {
        match count {
            0 => ContributionLevel::None,
            1..=2 => ContributionLevel::Low,
            3..=5 => ContributionLevel::Medium,
            6..=9 => ContributionLevel::High,
            _ => ContributionLevel::VeryHigh,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for ContributionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Shorthand for [`ContributionLevel::classify`] returning the numeric level.
pub fn classify(count: u32) -> u8 {
    ContributionLevel::classify(count).value()
}

/// Up to seven levels in calendar day order. The first and last weeks of a
/// calendar year are usually partial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionWeek {
    levels: Vec<ContributionLevel>,
}

impl ContributionWeek {
    pub const DAYS: usize = 7;

    pub fn from_days(days: &[ContributionDay]) -> Self {
        Self::from_counts(days.iter().map(|d| d.contribution_count))
    }

    pub fn from_counts(counts: impl IntoIterator<Item = u32>) -> Self {
        let levels = counts
            .into_iter()
            .take(Self::DAYS)
            .map(ContributionLevel::classify)
            .collect();
        Self { levels }
    }

    pub fn levels(&self) -> &[ContributionLevel] {
        &self.levels
    }

    /// Level for the given weekday row, or `None` if the week has no such day.
    pub fn day(&self, row: usize) -> Option<ContributionLevel> {
        self.levels.get(row).copied()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
