#![forbid(unsafe_code)]

//! Seeded constellation layout (headless).
//!
//! Design goals:
//! - byte-for-byte reproducible output for a given calendar date and contribution total
//! - one explicit PRNG instance per run, threaded from layout into rendering
//! - no IO: fetching contribution data and writing files live in the CLI

pub mod calendar;
pub mod error;
pub mod layout;
pub mod model;
pub mod rng;
pub mod seed;

pub use calendar::{contribution_query, parse_contribution_days, parse_contribution_window};
pub use error::{Error, Result};
pub use layout::{MAX_STARS, MIN_STARS, generate};
pub use model::{
    CONTRIBUTION_WINDOW_DAYS, CanvasSpec, Connection, Constellation, ContributionDay,
    ContributionWindow, Star,
};
pub use rng::Lcg;
pub use seed::{Seed, date_base, derive_seed};

use chrono::NaiveDate;

/// Result of one generation run.
///
/// `stream` is the PRNG left exactly where layout stopped; renderers that need more draws
/// continue from it.
#[derive(Debug, Clone)]
pub struct GeneratedConstellation {
    pub seed: Seed,
    pub constellation: Constellation,
    pub stream: Lcg,
}

/// Derives the seed for `date`, then lays out a constellation on the default canvas.
pub fn generate_for_date(
    date: NaiveDate,
    window: Option<&ContributionWindow>,
) -> GeneratedConstellation {
    generate_for_date_on(date, window, &CanvasSpec::default())
}

pub fn generate_for_date_on(
    date: NaiveDate,
    window: Option<&ContributionWindow>,
    canvas: &CanvasSpec,
) -> GeneratedConstellation {
    let seed = derive_seed(date, window);
    let mut stream = Lcg::new(seed);
    let constellation = generate(&mut stream, window, canvas);
    GeneratedConstellation {
        seed,
        constellation,
        stream,
    }
}

#[cfg(test)]
mod tests;
