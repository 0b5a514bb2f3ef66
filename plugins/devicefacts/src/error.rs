use serde::{Serialize, Serializer};

use devicefacts_bridge::ErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum DeviceFactsError {
    #[error("PERMISSION_DENIED")]
    PermissionDenied,

    #[error("Method not implemented")]
    NotImplemented,

    #[error("Bridge reply dropped before resolution")]
    ReplyDropped,
}

impl Serialize for DeviceFactsError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<ErrorCode> for DeviceFactsError {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::PermissionDenied => DeviceFactsError::PermissionDenied,
        }
    }
}

pub type Result<T> = std::result::Result<T, DeviceFactsError>;
