use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UtilkitError;

/// Application-level status codes returned to clients alongside a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Ok,
    BadRequest,
    LoginFailed,
    SessionExpired,
    PermissionDenied,
    NotFound,
    ServerError,
    GrpcServiceError,
    MysqlError,
}

impl StatusCode {
    pub const ALL: [StatusCode; 9] = [
        StatusCode::Ok,
        StatusCode::BadRequest,
        StatusCode::LoginFailed,
        StatusCode::SessionExpired,
        StatusCode::PermissionDenied,
        StatusCode::NotFound,
        StatusCode::ServerError,
        StatusCode::GrpcServiceError,
        StatusCode::MysqlError,
    ];

    pub fn code(self) -> i32 {
        match self {
            StatusCode::Ok => 2000,
            StatusCode::BadRequest => 4000,
            StatusCode::LoginFailed => 4001,
            StatusCode::SessionExpired => 4002,
            StatusCode::PermissionDenied => 4003,
            StatusCode::NotFound => 4004,
            StatusCode::ServerError => 5000,
            StatusCode::GrpcServiceError => 6000,
            StatusCode::MysqlError => 7000,
        }
    }

    /// Human-readable description shown to end users.
    pub fn text(self) -> &'static str {
        match self {
            StatusCode::Ok => "Success",
            StatusCode::BadRequest => "Bad request, invalid parameters supplied.",
            StatusCode::LoginFailed => "Login failed, please check your credentials, contact with administrator for help if still failed.",
            StatusCode::SessionExpired => "Session expired, please login again.",
            StatusCode::PermissionDenied => "Permission denied.",
            StatusCode::NotFound => "The requested resource could not be found.",
            StatusCode::ServerError => "An error occurred on the server when processing the URL. Please contact the system administrator.",
            StatusCode::GrpcServiceError => "An error occurred when calling a gRPC service. Please contact the system administrator.",
            StatusCode::MysqlError => "An error occurred during connecting with MySQL, please contact with system administrator.",
        }
    }
}

impl TryFrom<i32> for StatusCode {
    type Error = UtilkitError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        StatusCode::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or(UtilkitError::UnknownStatus(code))
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Text for a numeric status code, or `""` if the code is unknown.
pub fn status_text(code: i32) -> &'static str {
    StatusCode::try_from(code).map(StatusCode::text).unwrap_or("")
}

/// Lifecycle label of a long-running job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
    Canceled,
    Pending,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Failure => "failure",
            Outcome::Canceled => "canceled",
            Outcome::Pending => "pending",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = UtilkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Outcome::Success),
            "failure" => Ok(Outcome::Failure),
            "canceled" => Ok(Outcome::Canceled),
            "pending" => Ok(Outcome::Pending),
            other => Err(UtilkitError::UnknownOutcome(other.to_string())),
        }
    }
}
