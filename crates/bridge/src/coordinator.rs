//! Carrier-name permission handshake.
//!
//! Two states: Idle and AwaitingPermission. A carrier request either
//! resolves synchronously (grant not required, or already given) or parks
//! its reply slot and fires the OS prompt; the host's permission-result
//! callback finishes the exchange. No timeout: if the OS never answers, the
//! request stays parked and the caller never hears back.

use std::sync::{Arc, Mutex};

use devicefacts_platform::{Capability, PermissionAuthority, TelephonyInfoSource};

use crate::reply::{ErrorCode, ReplySlot};

/// Request code correlating the telephony prompt with its callback. Must
/// stay distinct from any other permission request the host issues.
pub const READ_PHONE_STATE_REQUEST_CODE: u32 = 123;

/// Substitute reported when the telephony source has no operator name.
/// Callers distinguish this literal from an error reply.
const MISSING_CARRIER: &str = "null";

/// Mediates between carrier-name requests and the runtime-permission system.
///
/// Holds at most one pending reply slot. A second request while one is in
/// flight replaces the slot and the first caller is dropped unresolved
/// (accepted limitation, see `request_carrier_name`). The slot is taken
/// under a mutex so the callback path and new requests cannot both touch it.
pub struct CarrierCoordinator {
    telephony: Arc<dyn TelephonyInfoSource>,
    permissions: Arc<dyn PermissionAuthority>,
    pending: Mutex<Option<ReplySlot>>,
}

impl CarrierCoordinator {
    pub fn new(
        telephony: Arc<dyn TelephonyInfoSource>,
        permissions: Arc<dyn PermissionAuthority>,
    ) -> Self {
        Self {
            telephony,
            permissions,
            pending: Mutex::new(None),
        }
    }

    /// Answer a carrier-name request, prompting for the telephony grant
    /// first when the platform requires one.
    ///
    /// Returns without resolving when the prompt is outstanding;
    /// `on_permission_result` finishes the exchange. Overlapping requests
    /// are not supported: the newest slot wins and the superseded one is
    /// dropped unresolved.
    pub fn request_carrier_name(&self, reply: ReplySlot) {
        if !self
            .permissions
            .requires_runtime_grant(Capability::ReadPhoneState)
        {
            reply.success(self.carrier_name());
            return;
        }

        if self.permissions.is_granted(Capability::ReadPhoneState) {
            reply.success(self.carrier_name());
            return;
        }

        if self.pending.lock().unwrap().replace(reply).is_some() {
            tracing::warn!("carrier request superseded while awaiting permission");
        }
        self.permissions
            .request_grant(Capability::ReadPhoneState, READ_PHONE_STATE_REQUEST_CODE);
    }

    /// Host-delivered permission outcome.
    ///
    /// Returns `false` for request codes that belong to someone else, so
    /// other listeners get their turn. A matching code with nothing pending
    /// is still handled but has no effect; grants can land through paths
    /// that did not originate here.
    pub fn on_permission_result(&self, request_code: u32, granted: bool) -> bool {
        if request_code != READ_PHONE_STATE_REQUEST_CODE {
            return false;
        }

        let Some(slot) = self.pending.lock().unwrap().take() else {
            return true;
        };

        if granted {
            slot.success(self.carrier_name());
        } else {
            slot.error(ErrorCode::PermissionDenied);
        }
        true
    }

    /// Whether a prompt is outstanding.
    pub fn is_awaiting_permission(&self) -> bool {
        self.pending.lock().unwrap().is_some()
    }

    fn carrier_name(&self) -> String {
        self.telephony
            .network_operator_name()
            .unwrap_or_else(|| MISSING_CARRIER.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reply::{CapturedReply, Reply};
    use devicefacts_platform::ScriptedAuthority;
    use serde_json::{json, Value};

    struct FixedTelephony(Option<&'static str>);

    impl TelephonyInfoSource for FixedTelephony {
        fn network_operator_name(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    fn coordinator(
        operator: Option<&'static str>,
        requires: bool,
        granted: bool,
    ) -> (CarrierCoordinator, Arc<ScriptedAuthority>) {
        let authority = Arc::new(ScriptedAuthority::new(requires, granted));
        let coordinator =
            CarrierCoordinator::new(Arc::new(FixedTelephony(operator)), authority.clone());
        (coordinator, authority)
    }

    fn request(coordinator: &CarrierCoordinator) -> CapturedReply {
        let (slot, captured) = ReplySlot::capture();
        coordinator.request_carrier_name(slot);
        captured
    }

    #[test]
    fn test_resolves_synchronously_when_grant_not_required() {
        let (coordinator, authority) = coordinator(Some("Vodafone"), false, false);
        let captured = request(&coordinator);

        assert_eq!(captured.get(), Some(Reply::Success(json!("Vodafone"))));
        assert!(!coordinator.is_awaiting_permission());
        assert!(authority.prompts().is_empty());
    }

    #[test]
    fn test_resolves_synchronously_when_already_granted() {
        let (coordinator, authority) = coordinator(Some("Vodafone"), true, true);
        let captured = request(&coordinator);

        assert_eq!(captured.get(), Some(Reply::Success(json!("Vodafone"))));
        assert!(!coordinator.is_awaiting_permission());
        assert!(authority.prompts().is_empty());
    }

    #[test]
    fn test_missing_operator_substitutes_null_literal() {
        let (coordinator, _) = coordinator(None, false, false);
        let captured = request(&coordinator);

        // The literal string "null", not an absent value.
        assert_eq!(captured.get(), Some(Reply::Success(json!("null"))));
    }

    #[test]
    fn test_ungranted_request_suspends_and_prompts() {
        let (coordinator, authority) = coordinator(Some("Vodafone"), true, false);
        let captured = request(&coordinator);

        assert!(!captured.is_resolved());
        assert!(coordinator.is_awaiting_permission());
        assert_eq!(
            authority.prompts(),
            vec![(Capability::ReadPhoneState, READ_PHONE_STATE_REQUEST_CODE)]
        );
    }

    #[test]
    fn test_granted_callback_resolves_pending_request() {
        let (coordinator, _) = coordinator(Some("Vodafone"), true, false);
        let captured = request(&coordinator);

        assert!(coordinator.on_permission_result(READ_PHONE_STATE_REQUEST_CODE, true));
        assert_eq!(captured.get(), Some(Reply::Success(json!("Vodafone"))));
        assert!(!coordinator.is_awaiting_permission());
    }

    #[test]
    fn test_denied_callback_resolves_permission_denied() {
        let (coordinator, _) = coordinator(Some("Vodafone"), true, false);
        let captured = request(&coordinator);

        assert!(coordinator.on_permission_result(READ_PHONE_STATE_REQUEST_CODE, false));
        assert_eq!(
            captured.get(),
            Some(Reply::Error {
                code: ErrorCode::PermissionDenied,
                message: "PERMISSION_DENIED".to_string(),
                details: Value::Null,
            })
        );
        assert!(!coordinator.is_awaiting_permission());
    }

    #[test]
    fn test_foreign_request_code_is_not_handled() {
        let (coordinator, _) = coordinator(Some("Vodafone"), true, false);
        let captured = request(&coordinator);

        assert!(!coordinator.on_permission_result(999, true));
        assert!(!captured.is_resolved());
        assert!(coordinator.is_awaiting_permission());
    }

    #[test]
    fn test_callback_without_pending_request_is_handled_no_op() {
        let (coordinator, _) = coordinator(Some("Vodafone"), true, false);
        assert!(coordinator.on_permission_result(READ_PHONE_STATE_REQUEST_CODE, true));
        assert!(!coordinator.is_awaiting_permission());
    }

    #[test]
    fn test_callback_resolves_at_most_once() {
        let (coordinator, _) = coordinator(Some("Vodafone"), true, false);
        let captured = request(&coordinator);

        assert!(coordinator.on_permission_result(READ_PHONE_STATE_REQUEST_CODE, true));
        // A duplicate callback is still handled but finds nothing pending.
        assert!(coordinator.on_permission_result(READ_PHONE_STATE_REQUEST_CODE, false));
        assert_eq!(captured.get(), Some(Reply::Success(json!("Vodafone"))));
    }

    #[test]
    fn test_overlapping_request_replaces_pending_slot() {
        let (coordinator, _) = coordinator(Some("Vodafone"), true, false);
        let first = request(&coordinator);
        let second = request(&coordinator);

        assert!(coordinator.on_permission_result(READ_PHONE_STATE_REQUEST_CODE, true));
        assert!(!first.is_resolved());
        assert_eq!(second.get(), Some(Reply::Success(json!("Vodafone"))));
    }
}
