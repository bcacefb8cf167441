use std::{fs, path::Path, time::Duration};

use serde::Deserialize;
use tracing::warn;

use crate::transport::DeliveryMode;

pub const SETTINGS_FILE: &str = "invitation.toml";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub rsvp_endpoint_url: Option<String>,
    pub delivery_mode: DeliveryMode,
    pub request_timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rsvp_endpoint_url: None,
            delivery_mode: DeliveryMode::Blind,
            request_timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    rsvp_endpoint_url: Option<String>,
    delivery_mode: Option<DeliveryMode>,
    request_timeout_seconds: Option<u64>,
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Reads `path` when present, then lets environment variables override it.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.rsvp_endpoint_url {
                    settings.rsvp_endpoint_url = Some(v);
                }
                if let Some(v) = file_cfg.delivery_mode {
                    settings.delivery_mode = v;
                }
                if let Some(v) = file_cfg.request_timeout_seconds {
                    settings.request_timeout = timeout_from_seconds(v);
                }
            }
            Err(err) => warn!(path = %path.display(), "ignoring unreadable settings file: {err}"),
        }
    }

    if let Some(v) = env("RSVP_ENDPOINT_URL") {
        settings.rsvp_endpoint_url = Some(v);
    }
    if let Some(v) = env("APP__RSVP_ENDPOINT_URL") {
        settings.rsvp_endpoint_url = Some(v);
    }

    if let Some(v) = env("APP__RSVP_DELIVERY_MODE") {
        match DeliveryMode::parse(&v) {
            Some(mode) => settings.delivery_mode = mode,
            None => warn!("ignoring unknown APP__RSVP_DELIVERY_MODE '{v}'"),
        }
    }

    if let Some(v) = env("APP__RSVP_TIMEOUT_SECONDS") {
        match v.trim().parse::<u64>() {
            Ok(parsed) => settings.request_timeout = timeout_from_seconds(parsed),
            Err(err) => warn!("ignoring invalid APP__RSVP_TIMEOUT_SECONDS '{v}': {err}"),
        }
    }

    settings
}

fn timeout_from_seconds(seconds: u64) -> Option<Duration> {
    (seconds > 0).then(|| Duration::from_secs(seconds))
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    fn temp_settings_file(contents: &str) -> std::path::PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("invitation_settings_{suffix}.toml"));
        fs::write(&path, contents).expect("write settings");
        path
    }

    #[test]
    fn defaults_without_file_or_env() {
        let settings = load_settings_from(Path::new("does-not-exist.toml"), |_| None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn file_values_are_overridden_by_env() {
        let path = temp_settings_file(
            r#"
rsvp_endpoint_url = "https://relay.example/from-file"
delivery_mode = "confirmed"
request_timeout_seconds = 0
"#,
        );
        let vars = HashMap::from([(
            "APP__RSVP_ENDPOINT_URL",
            "https://relay.example/from-env".to_string(),
        )]);

        let settings = load_settings_from(&path, |key| vars.get(key).cloned());
        assert_eq!(
            settings.rsvp_endpoint_url.as_deref(),
            Some("https://relay.example/from-env")
        );
        assert_eq!(settings.delivery_mode, DeliveryMode::Confirmed);
        assert_eq!(settings.request_timeout, None);

        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn unknown_delivery_mode_keeps_default() {
        let vars = HashMap::from([
            ("APP__RSVP_DELIVERY_MODE", "sometimes".to_string()),
            ("APP__RSVP_TIMEOUT_SECONDS", "12".to_string()),
        ]);
        let settings = load_settings_from(Path::new("does-not-exist.toml"), |key| {
            vars.get(key).cloned()
        });
        assert_eq!(settings.delivery_mode, DeliveryMode::Blind);
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(12)));
    }

    #[test]
    fn invalid_timeout_keeps_configured_value() {
        let path = temp_settings_file("request_timeout_seconds = 8\n");
        let settings = load_settings_from(&path, |key| {
            (key == "APP__RSVP_TIMEOUT_SECONDS").then(|| "soon".to_string())
        });
        let _ = fs::remove_file(&path);
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(8)));
    }
}
