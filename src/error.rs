use thiserror::Error;

pub const MISSING_PARAMS_CODE: &str = "MISSING_PARAMS";
pub const USER_NOT_FOUND_CODE: &str = "WAKATIME_USER_NOT_FOUND";

/// Failure modes of a stats lookup.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A required input was empty. Raised before any request is made.
    #[error("Missing params {} make sure you pass the parameters", quoted(.0))]
    MissingParam(Vec<&'static str>),

    /// The service answered with a non-2xx status.
    #[error("Could not resolve to a User with the login of '{username}'")]
    UserNotFound { username: String },

    /// Transport or decoding failure with no HTTP status attached.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

impl FetchError {
    /// Stable machine-readable code, if the variant has one.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            FetchError::MissingParam(_) => Some(MISSING_PARAMS_CODE),
            FetchError::UserNotFound { .. } => Some(USER_NOT_FOUND_CODE),
            FetchError::Request(_) => None,
        }
    }
}

fn quoted(params: &[&'static str]) -> String {
    params
        .iter()
        .map(|param| format!("\"{}\"", param))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_param_lists_names() {
        let err = FetchError::MissingParam(vec!["username"]);

        assert_eq!(err.code(), Some("MISSING_PARAMS"));
        assert!(err.to_string().contains("\"username\""));
    }

    #[test]
    fn user_not_found_embeds_username() {
        let err = FetchError::UserNotFound {
            username: String::from("octocat"),
        };

        assert_eq!(err.code(), Some("WAKATIME_USER_NOT_FOUND"));
        assert_eq!(
            err.to_string(),
            "Could not resolve to a User with the login of 'octocat'"
        );
    }
}
