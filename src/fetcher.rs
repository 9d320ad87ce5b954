use std::collections::HashSet;

use lazy_static::lazy_static;
use reqwest::Client;

use crate::{
    error::FetchError,
    models::{StatsEnvelope, StatsPayload},
};

pub const DEFAULT_API_DOMAIN: &str = "wakatime.com";

lazy_static! {
    /// Hosts the fetcher is willing to talk to. Extend by editing this list.
    pub static ref ALLOWED_API_DOMAINS: HashSet<&'static str> =
        ["wakatime.com", "beta.wakatime.com"].into_iter().collect();
}

/// Pick the API host for a request.
///
/// The override is used only when it exactly matches an allowlisted host
/// after dropping one trailing slash. Anything else silently yields
/// [`DEFAULT_API_DOMAIN`].
pub fn resolve_api_domain(api_domain: Option<&str>) -> &'static str {
    api_domain
        .map(|domain| domain.strip_suffix('/').unwrap_or(domain))
        .and_then(|domain| ALLOWED_API_DOMAINS.get(domain).copied())
        .unwrap_or(DEFAULT_API_DOMAIN)
}

pub fn stats_url(domain: &str, username: &str) -> String {
    stats_url_on(&format!("https://{}", domain), username)
}

fn stats_url_on(origin: &str, username: &str) -> String {
    format!(
        "{}/api/v1/users/{}/stats?is_including_today=true",
        origin,
        urlencoding::encode(username)
    )
}

/// Fetch the stats of `username`, including today, from WakaTime.
///
/// Returns the contents of the response's `data` field. A non-2xx answer is
/// reported as [`FetchError::UserNotFound`]; transport failures come back as
/// the original [`reqwest::Error`].
pub async fn fetch_wakatime_stats(
    client: &Client,
    username: &str,
    api_domain: Option<&str>,
) -> Result<StatsPayload, FetchError> {
    if username.is_empty() {
        return Err(FetchError::MissingParam(vec!["username"]));
    }

    let api_url = stats_url(resolve_api_domain(api_domain), username);

    get_stats(client, &api_url, username).await
}

async fn get_stats(
    client: &Client,
    api_url: &str,
    username: &str,
) -> Result<StatsPayload, FetchError> {
    let response = client.get(api_url).send().await?;

    if !response.status().is_success() {
        return Err(FetchError::UserNotFound {
            username: username.to_string(),
        });
    }

    let envelope = response.json::<StatsEnvelope>().await?;

    Ok(envelope.data)
}
