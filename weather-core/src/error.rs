use thiserror::Error;

/// Failures while fetching current conditions.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(
        "No API key configured.\n\
         Hint: run `weather configure` or set the WEATHER_API_KEY environment variable."
    )]
    ApiKeyMissing,

    #[error("OpenWeather rejected the API key.\nHint: run `weather configure` to update it.")]
    ApiKeyInvalid,

    #[error("Location '{0}' was not found. Try \"City, Country\".")]
    LocationNotFound(String),

    #[error("Rate limit exceeded. Please wait before retrying.")]
    RateLimited,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error while contacting OpenWeather")]
    Network(#[from] reqwest::Error),

    #[error("OpenWeather request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse OpenWeather response")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            FetchError::ApiKeyMissing | FetchError::ApiKeyInvalid => 2,
            FetchError::LocationNotFound(_) => 3,
            FetchError::Network(_) => 4,
            FetchError::RateLimited => 5,
            FetchError::InvalidInput(_) => 6,
            FetchError::Status { .. } | FetchError::Decode(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_group_by_cause() {
        assert_eq!(FetchError::ApiKeyMissing.exit_code(), 2);
        assert_eq!(FetchError::ApiKeyInvalid.exit_code(), 2);
        assert_eq!(FetchError::LocationNotFound("x".into()).exit_code(), 3);
        assert_eq!(FetchError::RateLimited.exit_code(), 5);
        assert_eq!(FetchError::InvalidInput("x".into()).exit_code(), 6);

        let decode = serde_json::from_str::<u8>("nope").unwrap_err();
        assert_eq!(FetchError::from(decode).exit_code(), 1);
    }

    #[test]
    fn missing_key_message_has_hint() {
        let msg = FetchError::ApiKeyMissing.to_string();
        assert!(msg.contains("No API key configured"));
        assert!(msg.contains("Hint: run `weather configure`"));
    }
}
