use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{ContributionDay, ContributionWeek};

pub const CONTRIBUTIONS_QUERY: &str = r#"
query($login: String!) {
  user(login: $login) {
    contributionsCollection {
      contributionCalendar {
        weeks {
          contributionDays {
            date
            contributionCount
          }
        }
      }
    }
  }
}"#;

#[derive(Debug, Serialize)]
pub struct GraphQLRequest<'a> {
    pub query: &'a str,
    pub variables: LoginVariables<'a>,
}

#[derive(Debug, Serialize)]
pub struct LoginVariables<'a> {
    pub login: &'a str,
}

impl<'a> GraphQLRequest<'a> {
    pub fn contributions(login: &'a str) -> Self {
        Self {
            query: CONTRIBUTIONS_QUERY,
            variables: LoginVariables { login },
        }
    }
}

#[derive(Deserialize)]
struct GraphQLResponse {
    data: Option<Data>,
    #[serde(default)]
    errors: Vec<GraphQLError>,
}

#[derive(Deserialize)]
struct GraphQLError {
    message: String,
}

#[derive(Deserialize)]
struct Data {
    user: Option<User>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct User {
    contributions_collection: ContributionsCollection,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection {
    contribution_calendar: ContributionCalendar,
}

#[derive(Deserialize)]
struct ContributionCalendar {
    weeks: Vec<Week>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Week {
    contribution_days: Vec<ContributionDay>,
}

/// Turns a contributions query response body into classified weeks.
pub fn parse_contribution_calendar(body: &str) -> Result<Vec<ContributionWeek>> {
    let response: GraphQLResponse = serde_json::from_str(body)
        .map_err(|e| Error::MalformedResponse(format!("contribution calendar: {}", e)))?;

    let user = response.data.and_then(|d| d.user).ok_or_else(|| {
        if response.errors.is_empty() {
            Error::MalformedResponse("contribution calendar: missing data.user".to_string())
        } else {
            let messages: Vec<_> = response.errors.iter().map(|e| e.message.as_str()).collect();
            Error::MalformedResponse(format!("contribution calendar: {}", messages.join("; ")))
        }
    })?;

    let weeks = user
        .contributions_collection
        .contribution_calendar
        .weeks
        .iter()
        .map(|week| ContributionWeek::from_days(&week.contribution_days))
        .collect();

    Ok(weeks)
}
