//! GitHub Adapters
//!
//! Clients for the GitHub APIs used by the portfolio.

pub mod graphql_client;

pub use graphql_client::GitHubGraphQlClient;
