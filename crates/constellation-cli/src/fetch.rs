use crate::config;
use constellation_core::{ContributionWindow, contribution_query, parse_contribution_window};

/// Outcome of asking for contribution data. Every failure has already been collapsed into
/// [`ContributionFetch::NoData`] by the time a caller sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContributionFetch {
    Data(ContributionWindow),
    NoData,
}

impl ContributionFetch {
    pub fn window(&self) -> Option<&ContributionWindow> {
        match self {
            Self::Data(window) => Some(window),
            Self::NoData => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unusable response: {0}")]
    Response(#[from] constellation_core::Error),
}

pub trait ContributionSource {
    async fn fetch(&self) -> ContributionFetch;
}

/// GitHub GraphQL contribution calendar. One request, no retries.
#[derive(Debug, Clone)]
pub struct GitHubContributions {
    endpoint: String,
    login: String,
    token: Option<String>,
}

impl GitHubContributions {
    pub fn new(
        endpoint: impl Into<String>,
        login: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            login: login.into(),
            token,
        }
    }

    /// Configured endpoint and login, with the token read from [`config::TOKEN_ENV`].
    pub fn from_env() -> Self {
        let token = std::env::var(config::TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty());
        if token.is_none() {
            tracing::warn!("{} is not set; the request will be anonymous", config::TOKEN_ENV);
        }
        Self::new(config::GRAPHQL_ENDPOINT, config::GITHUB_LOGIN, token)
    }

    async fn request(&self) -> Result<ContributionWindow, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config::FETCH_TIMEOUT)
            .user_agent(config::USER_AGENT)
            .build()?;

        let body = serde_json::json!({ "query": contribution_query(&self.login) });
        let mut request = client.post(&self.endpoint).json(&body);
        if let Some(token) = self.token.as_deref() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(%status, bytes = text.len(), "contribution response");

        Ok(parse_contribution_window(&text)?)
    }
}

impl ContributionSource for GitHubContributions {
    async fn fetch(&self) -> ContributionFetch {
        match self.request().await {
            Ok(window) => ContributionFetch::Data(window),
            Err(err) => {
                tracing::warn!(login = %self.login, "no contribution data: {err}");
                ContributionFetch::NoData
            }
        }
    }
}
