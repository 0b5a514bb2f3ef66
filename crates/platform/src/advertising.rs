//! Advertising-identifier capability.
//!
//! One provider per vendor, selected once at startup by a manufacturer
//! check, instead of probing for vendor SDKs at runtime. Provider failures
//! never surface to callers: the resolution path degrades to absence and
//! logs the cause.

use std::sync::Arc;

use serde::Serialize;

/// Manufacturer string identifying Fire OS devices.
pub const AMAZON_MANUFACTURER: &str = "Amazon";

const ADVERTISING_ID_KEY: &str = "advertising_id";
const LIMIT_AD_TRACKING_KEY: &str = "limit_ad_tracking";

/// Advertising identifier plus the user's tracking preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvertisingInfo {
    pub id: String,
    /// User has opted out of ad tracking; the id must not be reported.
    pub limit_ad_tracking: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum AdvertisingIdError {
    #[error("advertising SDK not available on this host")]
    SdkUnavailable,
    #[error("advertising service error: {0}")]
    Service(String),
}

/// Capability interface for advertising-identifier retrieval.
pub trait AdvertisingIdProvider: Send + Sync {
    /// Vendor label, for logs.
    fn vendor(&self) -> &'static str;

    /// Raw lookup against the vendor SDK or settings store.
    fn advertising_info(&self) -> Result<Option<AdvertisingInfo>, AdvertisingIdError>;

    /// Resolve the advertising id, degrading to absence.
    ///
    /// Lookup failures and tracking opt-outs both yield `None`; optional
    /// platform capabilities never propagate errors to the caller.
    fn advertising_id(&self) -> Option<String> {
        match self.advertising_info() {
            Ok(Some(info)) if !info.limit_ad_tracking => Some(info.id),
            Ok(Some(_)) => {
                tracing::debug!(vendor = self.vendor(), "ad tracking limited by user");
                None
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(vendor = self.vendor(), error = %e, "advertising id lookup failed");
                None
            }
        }
    }
}

/// Read access to the vendor's secure settings store (the Fire OS surface
/// that exposes the advertising id).
pub trait SecureSettings: Send + Sync {
    fn int(&self, key: &str) -> Option<i64>;
    fn string(&self, key: &str) -> Option<String>;
}

/// Settings store for hosts without a vendor settings surface.
pub struct NullSecureSettings;

impl SecureSettings for NullSecureSettings {
    fn int(&self, _key: &str) -> Option<i64> {
        None
    }

    fn string(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Provider backed by Google Play Services.
///
/// The Play Services client library is not linkable from this host, so the
/// lookup reports the SDK as unavailable; the capability stays declared so
/// provider selection is uniform across vendors.
pub struct GooglePlayProvider;

impl AdvertisingIdProvider for GooglePlayProvider {
    fn vendor(&self) -> &'static str {
        "google"
    }

    fn advertising_info(&self) -> Result<Option<AdvertisingInfo>, AdvertisingIdError> {
        Err(AdvertisingIdError::SdkUnavailable)
    }
}

/// Provider backed by the Fire OS secure settings store.
pub struct AmazonFireProvider {
    settings: Arc<dyn SecureSettings>,
}

impl AmazonFireProvider {
    pub fn new(settings: Arc<dyn SecureSettings>) -> Self {
        Self { settings }
    }
}

impl AdvertisingIdProvider for AmazonFireProvider {
    fn vendor(&self) -> &'static str {
        "amazon"
    }

    fn advertising_info(&self) -> Result<Option<AdvertisingInfo>, AdvertisingIdError> {
        let Some(id) = self.settings.string(ADVERTISING_ID_KEY) else {
            return Ok(None);
        };
        let limit_ad_tracking = self.settings.int(LIMIT_AD_TRACKING_KEY).unwrap_or(0) == 1;
        Ok(Some(AdvertisingInfo {
            id,
            limit_ad_tracking,
        }))
    }
}

/// Pick the vendor provider for this device.
///
/// `Amazon` selects the Fire OS settings provider; every other manufacturer
/// (including unknown) gets the Google Play provider.
pub fn select_advertising_provider(
    manufacturer: Option<&str>,
    settings: Arc<dyn SecureSettings>,
) -> Arc<dyn AdvertisingIdProvider> {
    match manufacturer {
        Some(AMAZON_MANUFACTURER) => Arc::new(AmazonFireProvider::new(settings)),
        _ => Arc::new(GooglePlayProvider),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeSettings {
        ints: HashMap<&'static str, i64>,
        strings: HashMap<&'static str, String>,
    }

    impl FakeSettings {
        fn with_id(id: &str, limit: i64) -> Arc<Self> {
            let mut ints = HashMap::new();
            ints.insert(LIMIT_AD_TRACKING_KEY, limit);
            let mut strings = HashMap::new();
            strings.insert(ADVERTISING_ID_KEY, id.to_string());
            Arc::new(Self { ints, strings })
        }
    }

    impl SecureSettings for FakeSettings {
        fn int(&self, key: &str) -> Option<i64> {
            self.ints.get(key).copied()
        }

        fn string(&self, key: &str) -> Option<String> {
            self.strings.get(key).cloned()
        }
    }

    #[test]
    fn test_selection_by_manufacturer() {
        let settings: Arc<dyn SecureSettings> = Arc::new(NullSecureSettings);
        let amazon = select_advertising_provider(Some(AMAZON_MANUFACTURER), settings.clone());
        assert_eq!(amazon.vendor(), "amazon");

        let google = select_advertising_provider(Some("Samsung"), settings.clone());
        assert_eq!(google.vendor(), "google");

        let unknown = select_advertising_provider(None, settings);
        assert_eq!(unknown.vendor(), "google");
    }

    #[test]
    fn test_amazon_provider_reads_settings() {
        let provider = AmazonFireProvider::new(FakeSettings::with_id("ad-123", 0));
        assert_eq!(provider.advertising_id().as_deref(), Some("ad-123"));
    }

    #[test]
    fn test_limit_ad_tracking_hides_id() {
        let provider = AmazonFireProvider::new(FakeSettings::with_id("ad-123", 1));
        assert_eq!(provider.advertising_id(), None);
    }

    #[test]
    fn test_missing_settings_degrade_to_absence() {
        let provider = AmazonFireProvider::new(Arc::new(NullSecureSettings));
        assert_eq!(provider.advertising_id(), None);
    }

    #[test]
    fn test_provider_errors_degrade_to_absence() {
        // Play Services are unavailable here; the error is swallowed.
        assert_eq!(GooglePlayProvider.advertising_id(), None);
    }
}
