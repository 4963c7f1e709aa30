//! Startup configuration from the page URL
//!
//! Two sources, both optional:
//! - per-field overrides such as `?length=1.5&edgeColor=%23ff8800`
//! - `?config=<url>` pointing at a TOML settings document, fetched after startup

use bevy::prelude::*;
use cubeframe_core::{PanelEffects, Settings, SettingsField};
use cubeframe_scene::{CubeSettings, SettingsApplied};
use std::sync::{Arc, Mutex, TryLockError};
use wasm_bindgen::JsCast;

/// Plugin for fetching a settings document named by `?config=`
pub struct ConfigLoaderPlugin;

impl Plugin for ConfigLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingConfig>()
            .add_systems(Startup, check_config_parameter)
            .add_systems(Update, process_pending_config);
    }
}

/// Result of an in-flight settings fetch
#[derive(Resource, Default)]
pub struct PendingConfig {
    pub result: Arc<Mutex<Option<Result<String, String>>>>,
    pub source: Option<String>,
}

fn url_search_params() -> Option<web_sys::UrlSearchParams> {
    let href = web_sys::window()?.location().href().ok()?;
    web_sys::Url::new(&href).ok().map(|url| url.search_params())
}

/// Defaults with the URL's per-field overrides applied.
///
/// Invalid overrides are logged and skipped; the rest still apply.
pub fn initial_settings() -> Settings {
    let mut settings = Settings::default();
    let Some(params) = url_search_params() else {
        return settings;
    };

    for field in SettingsField::ALL {
        if let Some(value) = params.get(field.key()) {
            match settings.apply_override(field.key(), &value) {
                Ok(_) => tracing::info!(%field, %value, "Applied URL override"),
                Err(e) => tracing::warn!("Ignoring URL parameter: {}", e),
            }
        }
    }

    settings
}

/// Check URL for ?config= parameter on startup
fn check_config_parameter(mut pending: ResMut<PendingConfig>) {
    let Some(config_url) = url_search_params().and_then(|params| params.get("config")) else {
        return;
    };

    tracing::info!("Loading settings from URL parameter: {}", config_url);
    pending.source = Some(config_url.clone());

    let result = pending.result.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let fetched = fetch_text(&config_url).await;
        if let Ok(mut slot) = result.lock() {
            *slot = Some(fetched);
        }
    });
}

/// Fetch a text document from URL
async fn fetch_text(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("No window")?;

    let resp = wasm_bindgen_futures::JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;

    let resp: web_sys::Response = resp.dyn_into().map_err(|_| "Response cast failed")?;

    if !resp.ok() {
        return Err(format!("HTTP {}: {}", resp.status(), resp.status_text()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|_| "Failed to get text")?)
        .await
        .map_err(|e| format!("Text extraction failed: {:?}", e))?;

    text.as_string().ok_or_else(|| "Not a string".to_string())
}

/// Take the fetch result out of its slot, if one has arrived.
///
/// A poisoned slot is reported once and then cleared.
fn take_fetched(slot: &Mutex<Option<Result<String, String>>>) -> Option<Result<String, String>> {
    match slot.try_lock() {
        Ok(mut guard) => guard.take(),
        Err(TryLockError::WouldBlock) => None,
        Err(TryLockError::Poisoned(poisoned)) => {
            tracing::warn!("Settings fetch task panicked while holding its result");
            let fetched = poisoned.into_inner().take();
            slot.clear_poison();
            fetched
        }
    }
}

/// Apply a fetched settings document as a whole-record replacement
fn process_pending_config(
    pending: Res<PendingConfig>,
    mut settings: ResMut<CubeSettings>,
    mut applied: MessageWriter<SettingsApplied>,
) {
    let Some(fetched) = take_fetched(&pending.result) else {
        return;
    };
    let source = pending.source.as_deref().unwrap_or("<unknown>");

    let content = match fetched {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(source, "Failed to fetch settings: {}", e);
            return;
        }
    };

    match Settings::from_toml(&content) {
        Ok(loaded) => {
            tracing::info!(source, "Loaded settings");
            applied.write(SettingsApplied(PanelEffects::everything(&loaded)));
            settings.0 = loaded;
        }
        Err(e) => tracing::warn!(source, "Rejected settings document: {}", e),
    }
}
