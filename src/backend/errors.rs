use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Backend returned HTTP {status} for {path}")]
    StatusError { status: u16, path: String },

    #[error("Backend refused access to {0}")]
    Forbidden(String),

    #[error("Backend response error: {0}")]
    ResponseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let error = BackendError::StatusError { status: 500, path: "/query/torrents".to_string() };
        assert_eq!(format!("{}", error), "Backend returned HTTP 500 for /query/torrents");
    }

    #[test]
    fn test_forbidden_display() {
        let error = BackendError::Forbidden("/command/pause".to_string());
        assert_eq!(format!("{}", error), "Backend refused access to /command/pause");
    }

    #[test]
    fn test_response_error_display() {
        let error = BackendError::ResponseError("upload rejected".to_string());
        assert_eq!(format!("{}", error), "Backend response error: upload rejected");
    }
}
