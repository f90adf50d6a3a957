use crate::types::LeagueName;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to fetch {resource}: {status}")]
    Fetch { resource: String, status: String },

    #[error("Team {0} not found")]
    TeamNotFound(String),

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON deserialization error: {0}")]
    JSON(#[from] JSONError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no adapter available for {0}")]
    UnsupportedLeague(LeagueName),
}

impl Error {
    pub fn fetch(resource: &str, status: reqwest::StatusCode) -> Self {
        let status = status
            .canonical_reason()
            .map(str::to_owned)
            .unwrap_or_else(|| status.as_str().to_owned());
        Self::Fetch {
            resource: resource.into(),
            status,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{source} ({resource})")]
pub struct JSONError {
    resource: String,
    #[source]
    source: serde_json::Error,
}

impl JSONError {
    pub fn new(resource: &str, source: serde_json::Error) -> Self {
        Self {
            resource: resource.into(),
            source,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("invalid value {value:?} for {var}: {reason}")]
pub struct ConfigError {
    var: String,
    value: String,
    reason: String,
}

impl ConfigError {
    pub fn new(var: &str, value: &str, reason: impl ToString) -> Self {
        Self {
            var: var.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_fetch_error_includes_status_text() {
        let err = Error::fetch("standings", reqwest::StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "Failed to fetch standings: Service Unavailable");
    }

    #[test]
    fn test_team_not_found_message() {
        let err = Error::TeamNotFound("XYZ".into());
        assert_eq!(err.to_string(), "Team XYZ not found");
    }
}
