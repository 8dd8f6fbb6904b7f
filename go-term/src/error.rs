use go_rules::GoError;

#[derive(Debug)]
pub enum TermError {
    Io(std::io::Error),
    Config(String),
    Json(serde_json::Error),
    Rules(GoError),
}

impl std::fmt::Display for TermError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TermError::Io(e) => write!(f, "I/O error: {e}"),
            TermError::Config(msg) => write!(f, "Config error: {msg}"),
            TermError::Json(e) => write!(f, "JSON error: {e}"),
            TermError::Rules(e) => write!(f, "Rules error: {e}"),
        }
    }
}

impl std::error::Error for TermError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TermError::Io(e) => Some(e),
            TermError::Json(e) => Some(e),
            TermError::Rules(e) => Some(e),
            TermError::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for TermError {
    fn from(e: std::io::Error) -> Self {
        TermError::Io(e)
    }
}

impl From<serde_json::Error> for TermError {
    fn from(e: serde_json::Error) -> Self {
        TermError::Json(e)
    }
}

impl From<GoError> for TermError {
    fn from(e: GoError) -> Self {
        TermError::Rules(e)
    }
}
