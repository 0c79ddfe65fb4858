use chrono::NaiveDate;

/// Number of trailing days kept from a contribution calendar.
pub const CONTRIBUTION_WINDOW_DAYS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionDay {
    pub count: u32,
    pub date: NaiveDate,
}

/// The most recent [`CONTRIBUTION_WINDOW_DAYS`] contribution days, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributionWindow {
    days: Vec<ContributionDay>,
}

impl ContributionWindow {
    /// Keeps only the trailing window of `days` (input order is preserved).
    pub fn from_days(days: impl IntoIterator<Item = ContributionDay>) -> Self {
        let mut days: Vec<ContributionDay> = days.into_iter().collect();
        if days.len() > CONTRIBUTION_WINDOW_DAYS {
            days = days.split_off(days.len() - CONTRIBUTION_WINDOW_DAYS);
        }
        Self { days }
    }

    pub fn days(&self) -> &[ContributionDay] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.days.iter().map(|d| u64::from(d.count)).sum()
    }

    /// Count for star `index`, cycling through the window.
    pub fn count_for(&self, index: usize) -> Option<u32> {
        if self.days.is_empty() {
            return None;
        }
        Some(self.days[index % self.days.len()].count)
    }
}

/// Fixed drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSpec {
    pub width: f64,
    pub height: f64,
    /// Horizontal inset of the first and last star's base position.
    pub padding: f64,
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 200.0,
            padding: 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constellation {
    pub stars: Vec<Star>,
    pub connections: Vec<Connection>,
}

impl Constellation {
    /// Endpoints of a connection, or `None` if it references a missing star.
    pub fn endpoints(&self, connection: &Connection) -> Option<(&Star, &Star)> {
        Some((
            self.stars.get(connection.from)?,
            self.stars.get(connection.to)?,
        ))
    }
}
