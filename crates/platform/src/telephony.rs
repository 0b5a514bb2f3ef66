//! Telephony information source.

/// Provider for mobile-network operator information.
pub trait TelephonyInfoSource: Send + Sync {
    /// Display name of the current network operator, if the host has one.
    fn network_operator_name(&self) -> Option<String>;
}

/// Telephony source for hosts without a baseband (desktops, test rigs).
pub struct NullTelephony;

impl TelephonyInfoSource for NullTelephony {
    fn network_operator_name(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_telephony_has_no_operator() {
        assert_eq!(NullTelephony.network_operator_name(), None);
    }
}
