use crate::utils::error::StarwError;

/// The two outward failure shapes every operation collapses into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    NotFound(String),
    BadRequest(String),
}

impl Failure {
    pub fn status_code(&self) -> u16 {
        match self {
            Failure::NotFound(_) => 404,
            Failure::BadRequest(_) => 400,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Failure::NotFound(message) | Failure::BadRequest(message) => message,
        }
    }
}

impl From<StarwError> for Failure {
    fn from(err: StarwError) -> Self {
        if err.is_not_found() {
            Failure::NotFound(err.to_string())
        } else {
            tracing::warn!("Request failed ({:?}): {}", err.category(), err);
            Failure::BadRequest(err.to_string())
        }
    }
}
