//! Shape of the GitHub GraphQL contribution calendar response.
//!
//! Only the path `data.user.contributionsCollection.contributionCalendar.weeks[].contributionDays[]`
//! is read. Anything else in the payload (including `errors`) is ignored.

use crate::model::{ContributionDay, ContributionWindow};
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Response {
    data: Option<Data>,
}

#[derive(Debug, Deserialize)]
struct Data {
    user: Option<User>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct User {
    contributions_collection: Option<ContributionsCollection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection {
    contribution_calendar: Option<ContributionCalendar>,
}

#[derive(Debug, Deserialize)]
struct ContributionCalendar {
    weeks: Option<Vec<Week>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Week {
    contribution_days: Vec<Day>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Day {
    contribution_count: u32,
    date: NaiveDate,
}

/// GraphQL document requesting the contribution calendar of `login`.
pub fn contribution_query(login: &str) -> String {
    format!(
        r#"query {{
  user(login: "{login}") {{
    contributionsCollection {{
      contributionCalendar {{
        weeks {{
          contributionDays {{
            contributionCount
            date
          }}
        }}
      }}
    }}
  }}
}}"#
    )
}

/// Flattens all calendar weeks into days, in response order.
pub fn parse_contribution_days(body: &str) -> Result<Vec<ContributionDay>> {
    let response: Response = serde_json::from_str(body)?;
    let weeks = response
        .data
        .ok_or_else(|| missing("`data` is absent"))?
        .user
        .ok_or_else(|| missing("`user` is absent"))?
        .contributions_collection
        .ok_or_else(|| missing("`contributionsCollection` is absent"))?
        .contribution_calendar
        .ok_or_else(|| missing("`contributionCalendar` is absent"))?
        .weeks
        .ok_or_else(|| missing("`weeks` is absent"))?;

    Ok(weeks
        .into_iter()
        .flat_map(|w| w.contribution_days)
        .map(|d| ContributionDay {
            count: d.contribution_count,
            date: d.date,
        })
        .collect())
}

/// Parses a response and keeps the trailing contribution window.
pub fn parse_contribution_window(body: &str) -> Result<ContributionWindow> {
    let days = parse_contribution_days(body)?;
    Ok(ContributionWindow::from_days(days))
}

fn missing(message: &str) -> Error {
    Error::MissingCalendar {
        message: message.to_string(),
    }
}
