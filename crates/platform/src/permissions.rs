//! Runtime-permission authority.
//!
//! Abstracts the OS subsystem that gates sensitive capabilities behind user
//! consent: synchronous "already granted?" checks plus an asynchronous prompt
//! whose outcome the host delivers later through a permission-result
//! callback, correlated by request code.

use std::sync::Mutex;

/// A sensitive capability gated behind user consent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Read telephony state (network operator info).
    ReadPhoneState,
}

impl Capability {
    pub fn name(&self) -> &'static str {
        match self {
            Capability::ReadPhoneState => "read-phone-state",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Provider for runtime-permission checks and prompts.
pub trait PermissionAuthority: Send + Sync {
    /// Whether this platform gates the capability behind a runtime grant at
    /// all. Platforms predating runtime consent answer `false`.
    fn requires_runtime_grant(&self, capability: Capability) -> bool;

    /// Synchronous check: has the user already granted the capability?
    fn is_granted(&self, capability: Capability) -> bool;

    /// Ask the OS to prompt the user. Fire-and-forget; the outcome arrives
    /// later through the host's permission-result callback, tagged with
    /// `request_code`.
    fn request_grant(&self, capability: Capability, request_code: u32);
}

/// Authority for hosts that do not gate telephony reads behind user consent.
pub struct PreGrantedAuthority;

impl PermissionAuthority for PreGrantedAuthority {
    fn requires_runtime_grant(&self, _capability: Capability) -> bool {
        false
    }

    fn is_granted(&self, _capability: Capability) -> bool {
        true
    }

    fn request_grant(&self, capability: Capability, request_code: u32) {
        tracing::debug!(%capability, request_code, "prompt requested on pre-granted authority");
    }
}

/// Scripted authority for tests: fixed answers, records every issued prompt.
pub struct ScriptedAuthority {
    requires: bool,
    granted: bool,
    prompts: Mutex<Vec<(Capability, u32)>>,
}

impl ScriptedAuthority {
    pub fn new(requires: bool, granted: bool) -> Self {
        Self {
            requires,
            granted,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts issued so far, in order.
    pub fn prompts(&self) -> Vec<(Capability, u32)> {
        self.prompts.lock().unwrap().clone()
    }
}

impl PermissionAuthority for ScriptedAuthority {
    fn requires_runtime_grant(&self, _capability: Capability) -> bool {
        self.requires
    }

    fn is_granted(&self, _capability: Capability) -> bool {
        self.granted
    }

    fn request_grant(&self, capability: Capability, request_code: u32) {
        self.prompts.lock().unwrap().push((capability, request_code));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pre_granted_authority() {
        let authority = PreGrantedAuthority;
        assert!(!authority.requires_runtime_grant(Capability::ReadPhoneState));
        assert!(authority.is_granted(Capability::ReadPhoneState));
    }

    #[test]
    fn test_scripted_authority_records_prompts() {
        let authority = ScriptedAuthority::new(true, false);
        authority.request_grant(Capability::ReadPhoneState, 7);
        authority.request_grant(Capability::ReadPhoneState, 8);
        assert_eq!(
            authority.prompts(),
            vec![(Capability::ReadPhoneState, 7), (Capability::ReadPhoneState, 8)]
        );
    }
}
