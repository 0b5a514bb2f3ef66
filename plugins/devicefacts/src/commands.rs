use serde_json::Value;
use tauri::{command, State};
use tokio::sync::oneshot;

use devicefacts_bridge::{method_names, Reply, ReplySlot};

use crate::error::{DeviceFactsError, Result};
use crate::DeviceFactsState;

/// Run one bridge invocation, adapting a oneshot channel into its reply
/// slot and awaiting the resolution.
///
/// The await only errors when the slot is dropped unresolved, which happens
/// when a later carrier request supersedes this one.
async fn invoke(state: &DeviceFactsState, method: &str) -> Result<Value> {
    let (tx, rx) = oneshot::channel();
    let slot = ReplySlot::new(move |reply| {
        let _ = tx.send(reply);
    });
    state.dispatcher().dispatch(method, slot);

    match rx.await {
        Ok(Reply::Success(value)) => Ok(value),
        Ok(Reply::Error { code, .. }) => Err(code.into()),
        Ok(Reply::NotImplemented) => Err(DeviceFactsError::NotImplemented),
        Err(_) => Err(DeviceFactsError::ReplyDropped),
    }
}

/// Carrier name, prompting for the telephony grant when the platform
/// requires one. Suspends until the user answers the prompt.
#[command]
pub async fn carrier_name(state: State<'_, DeviceFactsState>) -> Result<Value> {
    invoke(state.inner(), method_names::CARRIER_NAME).await
}

#[command]
pub async fn preferred_languages(state: State<'_, DeviceFactsState>) -> Result<Value> {
    invoke(state.inner(), method_names::PREFERRED_LANGUAGES).await
}

#[command]
pub async fn current_locale(state: State<'_, DeviceFactsState>) -> Result<Value> {
    invoke(state.inner(), method_names::CURRENT_LOCALE).await
}

#[command]
pub async fn advertising_id(state: State<'_, DeviceFactsState>) -> Result<Value> {
    invoke(state.inner(), method_names::ADVERTISING_ID).await
}
