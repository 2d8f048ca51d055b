use std::fmt;

/// Various errors raised while talking to the Ecobee API or the local receiver.
#[derive(Debug)]
pub enum ClientError {
    /// No valid access token could be obtained, even after a refresh attempt.
    /// This is the only error expected to terminate a run abnormally.
    Auth(String),

    /// A required configuration value is missing or unusable.
    Config(String),

    /// General error message that encompasses almost any non-auth related error message.
    General(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientError::Auth(error) => write!(f, "{}", error),
            ClientError::Config(error) => write!(f, "{}", error),
            ClientError::General(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<String> for ClientError {
    fn from(err: String) -> ClientError {
        ClientError::General(err)
    }
}

impl From<&str> for ClientError {
    fn from(err: &str) -> ClientError {
        ClientError::General(String::from(err))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::General(err.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for ClientError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        ClientError::General(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::General(err.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> ClientError {
        ClientError::General(err.to_string())
    }
}
