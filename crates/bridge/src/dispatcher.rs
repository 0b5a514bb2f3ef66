//! String-keyed method dispatch for the bridge surface.

use std::sync::Arc;

use devicefacts_platform::{
    AdvertisingIdProvider, LocaleInfoSource, PermissionAuthority, TelephonyInfoSource,
};
use serde_json::Value;

use crate::coordinator::CarrierCoordinator;
use crate::reply::ReplySlot;

/// Bridge method names as constants to prevent typos.
pub mod method_names {
    pub const CARRIER_NAME: &str = "carrierName";
    pub const PREFERRED_LANGUAGES: &str = "preferredLanguages";
    pub const CURRENT_LOCALE: &str = "currentLocale";
    pub const ADVERTISING_ID: &str = "advertisingId";
}

/// Routes named bridge invocations to their platform sources.
///
/// Every invocation resolves its reply slot before returning, except a
/// carrier request that suspends on the permission prompt (resumed through
/// `on_permission_result`).
pub struct MethodDispatcher {
    coordinator: CarrierCoordinator,
    locale: Arc<dyn LocaleInfoSource>,
    advertising: Arc<dyn AdvertisingIdProvider>,
}

impl MethodDispatcher {
    pub fn new(
        telephony: Arc<dyn TelephonyInfoSource>,
        permissions: Arc<dyn PermissionAuthority>,
        locale: Arc<dyn LocaleInfoSource>,
        advertising: Arc<dyn AdvertisingIdProvider>,
    ) -> Self {
        Self {
            coordinator: CarrierCoordinator::new(telephony, permissions),
            locale,
            advertising,
        }
    }

    /// Handle one named invocation.
    pub fn dispatch(&self, method: &str, reply: ReplySlot) {
        match method {
            method_names::CARRIER_NAME => self.coordinator.request_carrier_name(reply),
            method_names::PREFERRED_LANGUAGES => reply.success(self.locale.preferred_languages()),
            method_names::CURRENT_LOCALE => reply.success(self.locale.current_locale()),
            method_names::ADVERTISING_ID => {
                // The retrieval capability exists alongside this method but
                // is not connected to it; the reply stays null.
                tracing::debug!(
                    vendor = self.advertising.vendor(),
                    "advertisingId requested, replying null"
                );
                reply.success(Value::Null);
            }
            other => {
                tracing::debug!(method = other, "unknown bridge method");
                reply.not_implemented();
            }
        }
    }

    /// Forward a host-delivered permission outcome to the coordinator.
    /// Returns `false` when the request code belongs to another listener.
    pub fn on_permission_result(&self, request_code: u32, granted: bool) -> bool {
        self.coordinator.on_permission_result(request_code, granted)
    }
}
