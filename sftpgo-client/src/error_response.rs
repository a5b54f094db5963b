use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Error body returned by the SFTPGo REST API.
#[derive(Deserialize, Debug, Eq, PartialEq, Clone, Default)]
pub struct ErrorResponseBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub error: String,
}

#[derive(Error, Debug)]
pub enum SftpgoError {
    #[error("Base url {0} cannot have path segments appended")]
    InvalidBaseUrl(Url),
    #[error("'{0}' cannot be used as a resource key in a url path")]
    InvalidKey(String),
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Request error: {0:?}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("Unexpected status {status} (expected {expected}): {body}")]
    UnexpectedStatus {
        expected: StatusCode,
        status: StatusCode,
        body: String,
        details: Option<ErrorResponseBody>,
    },
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl SftpgoError {
    /// The HTTP status observed by the transport, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SftpgoError::UnexpectedStatus { status, .. } => Some(*status),
            SftpgoError::ReqwestError(err) => err.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Compares the observed status with the one the operation expects and hands
/// back the raw body on a match.
pub(crate) fn check_status(
    status: StatusCode,
    expected: StatusCode,
    body: Vec<u8>,
) -> Result<Vec<u8>> {
    if status == expected {
        return Ok(body);
    }

    let details = serde_json::from_slice::<ErrorResponseBody>(&body).ok();
    Err(SftpgoError::UnexpectedStatus {
        expected,
        status,
        body: String::from_utf8_lossy(&body).into_owned(),
        details,
    })
}

pub(crate) fn decode<T>(body: &[u8]) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_slice(body).map_err(SftpgoError::Decode)
}

pub type Result<T> = std::result::Result<T, SftpgoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_status_returns_body() {
        let body = check_status(StatusCode::CREATED, StatusCode::CREATED, b"{}".to_vec()).unwrap();
        assert_eq!(body, b"{}");
    }

    #[test]
    fn mismatched_status_carries_server_error_body() {
        let err = check_status(
            StatusCode::NOT_FOUND,
            StatusCode::OK,
            br#"{"error":"not found","message":"folder missing"}"#.to_vec(),
        )
        .unwrap_err();

        assert!(err.is_not_found());
        match err {
            SftpgoError::UnexpectedStatus {
                expected, details, ..
            } => {
                assert_eq!(expected, StatusCode::OK);
                assert_eq!(
                    details,
                    Some(ErrorResponseBody {
                        message: "folder missing".to_string(),
                        error: "not found".to_string(),
                    })
                );
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn mismatched_status_with_plain_body_has_no_details() {
        let err = check_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::OK,
            b"boom".to_vec(),
        )
        .unwrap_err();

        assert!(!err.is_not_found());
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        match err {
            SftpgoError::UnexpectedStatus { body, details, .. } => {
                assert_eq!(body, "boom");
                assert!(details.is_none());
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn decode_failure_is_reported_as_decode_error() {
        let err = decode::<Vec<String>>(b"not json").unwrap_err();
        assert!(matches!(err, SftpgoError::Decode(_)));
        assert_eq!(err.status(), None);
    }
}
