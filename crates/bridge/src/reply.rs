//! Single-use reply slots for bridge invocations.

use std::sync::{Arc, Mutex};

use serde_json::Value;

/// Error codes that cross the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    PermissionDenied,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::PermissionDenied => "PERMISSION_DENIED",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A resolved bridge reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Success(Value),
    Error {
        code: ErrorCode,
        message: String,
        details: Value,
    },
    /// Signal for method names the bridge does not know.
    NotImplemented,
}

/// Single-use handle that accepts exactly one success value or one error.
///
/// Exactly-once delivery is enforced by move semantics: resolving the slot
/// consumes it.
pub struct ReplySlot {
    deliver: Box<dyn FnOnce(Reply) + Send + 'static>,
}

impl ReplySlot {
    pub fn new<F>(deliver: F) -> Self
    where
        F: FnOnce(Reply) + Send + 'static,
    {
        Self {
            deliver: Box::new(deliver),
        }
    }

    /// Resolve with a success value.
    pub fn success(self, value: impl Into<Value>) {
        self.resolve(Reply::Success(value.into()));
    }

    /// Resolve with a fixed error code and a null details payload.
    pub fn error(self, code: ErrorCode) {
        self.resolve(Reply::Error {
            code,
            message: code.as_str().to_string(),
            details: Value::Null,
        });
    }

    /// Resolve with the not-implemented signal.
    pub fn not_implemented(self) {
        self.resolve(Reply::NotImplemented);
    }

    fn resolve(self, reply: Reply) {
        (self.deliver)(reply);
    }

    /// Slot wired to an in-memory cell, for tests and capture-style callers.
    pub fn capture() -> (Self, CapturedReply) {
        let captured = CapturedReply::default();
        let writer = captured.clone();
        (Self::new(move |reply| writer.set(reply)), captured)
    }
}

/// Inspection handle for a reply captured by `ReplySlot::capture`.
#[derive(Clone, Default)]
pub struct CapturedReply {
    cell: Arc<Mutex<Option<Reply>>>,
}

impl CapturedReply {
    fn set(&self, reply: Reply) {
        *self.cell.lock().unwrap() = Some(reply);
    }

    pub fn get(&self) -> Option<Reply> {
        self.cell.lock().unwrap().clone()
    }

    pub fn is_resolved(&self) -> bool {
        self.cell.lock().unwrap().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_capture_success() {
        let (slot, captured) = ReplySlot::capture();
        assert!(!captured.is_resolved());

        slot.success("Vodafone");
        assert_eq!(captured.get(), Some(Reply::Success(json!("Vodafone"))));
    }

    #[test]
    fn test_capture_error_carries_code_and_null_details() {
        let (slot, captured) = ReplySlot::capture();
        slot.error(ErrorCode::PermissionDenied);
        assert_eq!(
            captured.get(),
            Some(Reply::Error {
                code: ErrorCode::PermissionDenied,
                message: "PERMISSION_DENIED".to_string(),
                details: Value::Null,
            })
        );
    }

    #[test]
    fn test_capture_not_implemented() {
        let (slot, captured) = ReplySlot::capture();
        slot.not_implemented();
        assert_eq!(captured.get(), Some(Reply::NotImplemented));
    }

    #[test]
    fn test_unresolved_slot_leaves_cell_empty() {
        let (slot, captured) = ReplySlot::capture();
        drop(slot);
        assert!(!captured.is_resolved());
    }
}
