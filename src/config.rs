use dioxus::prelude::*;
use serde::Deserialize;

/// Runtime configuration for the external mail relay. Every identifier is
/// optional: a missing pair disables the contact form with a configuration
/// error instead of breaking the page.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub emailjs_service_id: Option<String>,
    #[serde(default)]
    pub emailjs_template_id: Option<String>,
    #[serde(default)]
    pub emailjs_public_key: Option<String>,
}

impl RuntimeConfig {
    pub fn relay_configured(&self) -> bool {
        self.emailjs_service_id.is_some() && self.emailjs_template_id.is_some()
    }
}

pub fn use_runtime_config() -> Resource<RuntimeConfig> {
    use_resource(|| async move { fetch_runtime_config().await })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> RuntimeConfig {
    match fetch_config_from("/config.json").await {
        Ok(config) => config,
        // An unreachable or malformed config file degrades to defaults.
        Err(_) => fetch_config_from("/assets/config.json")
            .await
            .unwrap_or_default(),
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<RuntimeConfig, String> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| format!("config fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("config fetch failed: status {}", response.status()));
    }
    response
        .json::<RuntimeConfig>()
        .await
        .map_err(|err| format!("config decode failed: {err}"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> RuntimeConfig {
    RuntimeConfig {
        emailjs_service_id: std::env::var("EMAILJS_SERVICE_ID").ok(),
        emailjs_template_id: std::env::var("EMAILJS_TEMPLATE_ID").ok(),
        emailjs_public_key: std::env::var("EMAILJS_PUBLIC_KEY").ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn relay_needs_both_identifiers() {
        let mut config = RuntimeConfig::default();
        assert!(!config.relay_configured());
        config.emailjs_service_id = Some("service_x".into());
        assert!(!config.relay_configured());
        config.emailjs_template_id = Some("template_y".into());
        assert!(config.relay_configured());
    }

    #[test]
    fn missing_fields_decode_to_none() {
        let config: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RuntimeConfig::default());
    }
}
