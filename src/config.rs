use lazy_static::lazy_static;

use std::env;

lazy_static! {
    /// Optional API host override. Checked against the allowlist on every request.
    pub static ref WAKATIME_API_DOMAIN: Option<String> = non_empty_var("WAKATIME_API_DOMAIN");
    /// Username used when none is passed on the command line.
    pub static ref WAKATIME_USERNAME: Option<String> = non_empty_var("WAKATIME_USERNAME");
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
