//! Platform information sources for the devicefacts bridge.
//!
//! Each device-level fact the bridge exposes is read through a provider
//! trait, keeping the bridge core pure and testable:
//! - `telephony.rs`   - network operator name
//! - `locale.rs`      - current locale and ranked preferred languages
//! - `permissions.rs` - runtime-permission authority (check + async prompt)
//! - `advertising.rs` - advertising-identifier capability, one provider per
//!   vendor, selected at startup by a manufacturer check
//!
//! Concrete implementations cover desktop hosts; capabilities a host does not
//! have get a Null implementation rather than an error path.

mod advertising;
mod locale;
mod permissions;
mod telephony;

pub use advertising::{
    select_advertising_provider, AdvertisingIdError, AdvertisingIdProvider, AdvertisingInfo,
    AmazonFireProvider, GooglePlayProvider, NullSecureSettings, SecureSettings,
    AMAZON_MANUFACTURER,
};
pub use locale::{
    normalize_language_tag, ranked_languages, EnvLocaleSource, LocaleInfoSource, FALLBACK_LOCALE,
};
pub use permissions::{Capability, PermissionAuthority, PreGrantedAuthority, ScriptedAuthority};
pub use telephony::{NullTelephony, TelephonyInfoSource};
