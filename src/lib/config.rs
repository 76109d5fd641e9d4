//! Build-time configuration for the auth API endpoint with an optional runtime
//! override. The runtime config is read from `window.TWEETER_CONFIG` (if present)
//! so static deployments can point at another API without rebuilding.
//! Configuration values are public; do not store secrets here.

use url::Url;

/// API host used when nothing is configured at build time.
const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("TWEETER_API_BASE_URL")
            .and_then(normalize_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let mut config = Self { api_base_url };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("TWEETER_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    let api_base_url = Reflect::get(&object, &JsValue::from_str("api_base_url"))
        .ok()?
        .as_string()
        .and_then(|value| normalize_base_url(&value));
    if api_base_url.is_none() {
        tracing::warn!("Ignoring TWEETER_CONFIG.api_base_url: missing or not a valid URL");
    }

    Some(RuntimeConfig { api_base_url })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

/// Trims a configured base URL and rejects empty or unparsable values.
fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Url::parse(trimmed).ok()?;
    Some(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_base_url};

    #[test]
    fn normalize_base_url_trims_and_rejects_empty() {
        assert_eq!(normalize_base_url(""), None);
        assert_eq!(normalize_base_url("   "), None);
        assert_eq!(
            normalize_base_url("  https://api.tweeter.dev/ "),
            Some("https://api.tweeter.dev".to_string())
        );
    }

    #[test]
    fn normalize_base_url_rejects_relative_values() {
        assert_eq!(normalize_base_url("api.tweeter.dev"), None);
        assert_eq!(normalize_base_url("/api"), None);
    }

    #[test]
    fn apply_runtime_overrides_keeps_default_when_absent() {
        let mut config = AppConfig {
            api_base_url: "http://localhost:3000".to_string(),
        };
        apply_runtime_overrides(
            &mut config,
            RuntimeConfig {
                api_base_url: normalize_base_url(" "),
            },
        );
        assert_eq!(config.api_base_url, "http://localhost:3000");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig {
            api_base_url: "http://localhost:3000".to_string(),
        };
        apply_runtime_overrides(
            &mut config,
            RuntimeConfig {
                api_base_url: normalize_base_url("https://api.override"),
            },
        );
        assert_eq!(config.api_base_url, "https://api.override");
    }

    #[test]
    fn load_falls_back_to_local_api() {
        let config = AppConfig::load();
        assert!(!config.api_base_url.is_empty());
        assert!(!config.api_base_url.ends_with('/'));
    }
}
