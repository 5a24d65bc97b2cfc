//! GitHub GraphQL Client
//!
//! Implements the ContributionsGateway trait against the GitHub GraphQL API.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::domain::gateways::{ContributionQuery, ContributionsGateway};
use crate::domain::models::contributions::{ActivityDay, ContributionActivity};
use crate::shared::errors::GatewayError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const CONTRIBUTIONS_QUERY: &str = r"
query($username: String!, $from: DateTime!, $to: DateTime!) {
  user(login: $username) {
    createdAt
    contributionsCollection(from: $from, to: $to) {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            date
            contributionCount
            contributionLevel
          }
        }
      }
      totalCommitContributions
      totalPullRequestContributions
      totalIssueContributions
      totalRepositoriesWithContributedCommits
    }
  }
}
";

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'static str,
    variables: QueryVariables<'a>,
}

#[derive(Debug, Serialize)]
struct QueryVariables<'a> {
    username: &'a str,
    from: String,
    to: String,
}

/// GraphQL response wrapper
#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ContributionsData>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ContributionsData {
    user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserNode {
    created_at: DateTime<Utc>,
    contributions_collection: CollectionNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionNode {
    contribution_calendar: CalendarNode,
    total_commit_contributions: u32,
    total_pull_request_contributions: u32,
    total_issue_contributions: u32,
    total_repositories_with_contributed_commits: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarNode {
    total_contributions: u32,
    weeks: Vec<WeekNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WeekNode {
    contribution_days: Vec<DayNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayNode {
    date: String,
    contribution_count: u32,
    contribution_level: String,
}

impl From<UserNode> for ContributionActivity {
    fn from(user: UserNode) -> Self {
        let collection = user.contributions_collection;
        let weeks = collection
            .contribution_calendar
            .weeks
            .into_iter()
            .map(|week| {
                week.contribution_days
                    .into_iter()
                    .map(|day| ActivityDay {
                        date: day.date,
                        count: day.contribution_count,
                        level: day.contribution_level,
                    })
                    .collect()
            })
            .collect();

        Self {
            account_created_at: user.created_at,
            total_contributions: collection.contribution_calendar.total_contributions,
            commits: collection.total_commit_contributions,
            pull_requests: collection.total_pull_request_contributions,
            issues: collection.total_issue_contributions,
            repositories_contributed_to: collection.total_repositories_with_contributed_commits,
            weeks,
        }
    }
}

/// GitHub GraphQL implementation of ContributionsGateway
#[derive(Debug, Clone)]
pub struct GitHubGraphQlClient {
    client: reqwest::Client,
    graphql_url: String,
}

impl GitHubGraphQlClient {
    /// Create a client that gives up on a request after `timeout`
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Transport` if the HTTP client cannot be initialized.
    pub fn new(graphql_url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            graphql_url: graphql_url.into(),
        })
    }
}

#[async_trait]
impl ContributionsGateway for GitHubGraphQlClient {
    async fn fetch_activity(
        &self,
        token: &str,
        query: &ContributionQuery,
    ) -> Result<ContributionActivity, GatewayError> {
        let request = GraphQlRequest {
            query: CONTRIBUTIONS_QUERY,
            variables: QueryVariables {
                username: &query.username,
                from: query.window.from.to_rfc3339(),
                to: query.window.to.to_rfc3339(),
            },
        };

        let response = self
            .client
            .post(&self.graphql_url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    tracing::warn!(url = %self.graphql_url, "GitHub GraphQL request timed out");
                } else {
                    tracing::warn!(url = %self.graphql_url, error = %e, "GitHub GraphQL request failed");
                }
                GatewayError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "GitHub GraphQL returned non-success status");
            return Err(GatewayError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(|e| {
            tracing::warn!(error = %e, "Reading GitHub GraphQL response body failed");
            GatewayError::Transport(e.to_string())
        })?;
        let body: GraphQlResponse =
            serde_json::from_slice(&bytes).map_err(|e| GatewayError::Decode(e.to_string()))?;

        if let Some(errors) = body.errors {
            let message = errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(GatewayError::Api(message));
        }

        let user = body
            .data
            .and_then(|data| data.user)
            .ok_or_else(|| GatewayError::Decode("response has no user".to_string()))?;

        Ok(user.into())
    }
}
