//! Tauri plugin exposing device-level facts over the command bridge:
//! carrier name (behind the telephony permission handshake), preferred
//! languages, current locale, and the advertising identifier.

mod commands;
mod error;

use std::sync::Arc;

use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

use devicefacts_bridge::MethodDispatcher;
use devicefacts_platform::{
    select_advertising_provider, EnvLocaleSource, NullSecureSettings, NullTelephony,
    PreGrantedAuthority,
};

pub use error::DeviceFactsError;

const PLUGIN_NAME: &str = "devicefacts";

/// Managed plugin state: the method dispatcher wired to this host's sources.
pub struct DeviceFactsState {
    dispatcher: Arc<MethodDispatcher>,
}

impl DeviceFactsState {
    pub fn new(dispatcher: Arc<MethodDispatcher>) -> Self {
        Self { dispatcher }
    }

    pub(crate) fn dispatcher(&self) -> &MethodDispatcher {
        &self.dispatcher
    }
}

/// Forward an OS-delivered permission outcome to the coordinator.
///
/// Host glue calls this from wherever the platform hands out permission
/// results. Returns `false` when the request code belongs to another
/// listener, so it can keep propagating.
pub fn handle_permission_result<R: Runtime, M: Manager<R>>(
    manager: &M,
    request_code: u32,
    granted: bool,
) -> bool {
    let state = manager.state::<DeviceFactsState>();
    state.dispatcher().on_permission_result(request_code, granted)
}

fn host_dispatcher() -> MethodDispatcher {
    // Desktop hosts report no device manufacturer, so provider selection
    // falls through to the Google provider.
    let advertising = select_advertising_provider(None, Arc::new(NullSecureSettings));
    MethodDispatcher::new(
        Arc::new(NullTelephony),
        Arc::new(PreGrantedAuthority),
        Arc::new(EnvLocaleSource::new()),
        advertising,
    )
}

pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new(PLUGIN_NAME)
        .setup(|app, _api| {
            app.manage(DeviceFactsState::new(Arc::new(host_dispatcher())));
            tracing::debug!("devicefacts plugin attached");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::carrier_name,
            commands::preferred_languages,
            commands::current_locale,
            commands::advertising_id,
        ])
        .build()
}
