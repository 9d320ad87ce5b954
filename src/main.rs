use std::env;

use anyhow::{bail, Result};
use dotenv::dotenv;
use futures::future;
use reqwest::Client;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use wakatime_stats::{
    config::{WAKATIME_API_DOMAIN, WAKATIME_USERNAME},
    fetch_wakatime_stats, resolve_api_domain,
    utils::{format_hours, get_current_datetime},
    WakaTimeStats,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut usernames: Vec<String> = env::args().skip(1).collect();
    if usernames.is_empty() {
        usernames.extend(WAKATIME_USERNAME.clone());
    }
    if usernames.is_empty() {
        bail!("Usage: wakatime-stats <username>... (or set WAKATIME_USERNAME)");
    }

    let api_domain = WAKATIME_API_DOMAIN.as_deref();
    if let Some(requested) = api_domain {
        let resolved = resolve_api_domain(api_domain);
        if requested.strip_suffix('/').unwrap_or(requested) != resolved {
            warn!("API domain {} is not allowed, using {}", requested, resolved);
        }
    }

    let client = Client::new();

    if let [username] = usernames.as_slice() {
        print_languages(&client, username, api_domain).await?;
    } else {
        print_ranking(&client, usernames, api_domain).await;
    }

    println!("Fetched at: {}", get_current_datetime());

    Ok(())
}

async fn print_languages(client: &Client, username: &str, api_domain: Option<&str>) -> Result<()> {
    info!("Fetching stats for {}", username);

    let payload = fetch_wakatime_stats(client, username, api_domain).await?;
    let stats = WakaTimeStats::from_payload(&payload)?;

    let display_name = if stats.username.is_empty() {
        username
    } else {
        stats.username.as_str()
    };

    println!("{} ({})", display_name, format_hours(stats.total_seconds));

    for lang in stats.languages {
        if lang.total_seconds > 0.0 {
            println!("{} - {}", lang.name, format_hours(lang.total_seconds));
        }
    }

    Ok(())
}

async fn print_ranking(client: &Client, usernames: Vec<String>, api_domain: Option<&str>) {
    let results = future::join_all(usernames.into_iter().map(|username| async move {
        let result = fetch_wakatime_stats(client, &username, api_domain)
            .await
            .map_err(anyhow::Error::from)
            .and_then(|payload| Ok(WakaTimeStats::from_payload(&payload)?));

        (username, result)
    }))
    .await;

    let mut leaderboard: Vec<(String, f64)> = Vec::new();

    for (username, result) in results {
        match result {
            Ok(stats) => leaderboard.push((username, stats.total_seconds)),
            Err(err) => warn!("Skipping {}: {}", username, err),
        }
    }

    debug!("Ranking {} users", leaderboard.len());

    leaderboard.sort_by(|a, b| b.1.total_cmp(&a.1));

    for (i, (username, total_seconds)) in leaderboard.iter().enumerate() {
        println!("{}) {} - {}", i + 1, username, format_hours(*total_seconds));
    }
}
