use std::fmt;

#[derive(Debug)]
pub enum AdminError {
    Network(reqwest::Error),
    Json(serde_json::Error),
    Api(String),
    Io(std::io::Error),
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminError::Network(e) => write!(f, "Network error: {}", e),
            AdminError::Json(e) => write!(f, "JSON parsing error: {}", e),
            AdminError::Api(e) => write!(f, "API error: {}", e),
            AdminError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for AdminError {}

impl From<reqwest::Error> for AdminError {
    fn from(err: reqwest::Error) -> Self {
        AdminError::Network(err)
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        AdminError::Json(err)
    }
}

impl From<std::io::Error> for AdminError {
    fn from(err: std::io::Error) -> Self {
        AdminError::Io(err)
    }
}
