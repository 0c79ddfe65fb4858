use std::time::Duration;

/// Account whose contribution calendar perturbs the seed.
pub const GITHUB_LOGIN: &str = "logical-luke";
pub const OUTPUT_PATH: &str = "./constellation.svg";

pub const GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";
/// Environment variable holding the bearer token for the GraphQL API.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const USER_AGENT: &str = "constellation-generator";
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
