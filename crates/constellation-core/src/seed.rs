use crate::model::ContributionWindow;
use chrono::{Datelike, NaiveDate};

/// Integer that fully determines one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seed(u64);

impl Seed {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `year * 10000 + month * 100 + day`, e.g. `20240315` for 2024-03-15.
pub fn date_base(date: NaiveDate) -> u64 {
    // Years before 1 CE never reach us from a calendar clock; clamp instead of wrapping.
    let year = u64::try_from(date.year()).unwrap_or(0);
    year * 10_000 + u64::from(date.month()) * 100 + u64::from(date.day())
}

/// Combines the calendar date with the contribution total, when there is one.
///
/// Missing contribution data is a normal fallback: the date alone seeds the run.
pub fn derive_seed(date: NaiveDate, window: Option<&ContributionWindow>) -> Seed {
    let base = date_base(date);
    let seed = match window {
        Some(window) => base + window.total(),
        None => base,
    };
    tracing::debug!(%date, base, seed, "derived seed");
    Seed(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContributionDay;

    fn day(date: &str, count: u32) -> ContributionDay {
        ContributionDay {
            count,
            date: date.parse().unwrap(),
        }
    }

    #[test]
    fn date_only_seed_is_yyyymmdd() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(derive_seed(date, None), Seed::new(20_240_315));
    }

    #[test]
    fn contribution_total_is_added() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let window = ContributionWindow::from_days([
            day("2024-03-13", 4),
            day("2024-03-14", 0),
            day("2024-03-15", 9),
        ]);
        assert_eq!(derive_seed(date, Some(&window)), Seed::new(20_240_328));
    }

    #[test]
    fn empty_window_adds_nothing() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        let window = ContributionWindow::default();
        assert_eq!(derive_seed(date, Some(&window)), derive_seed(date, None));
        assert_eq!(derive_seed(date, None).value(), 20_251_201);
    }
}
