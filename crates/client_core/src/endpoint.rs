use std::fmt;

use url::Url;

use crate::error::ConfigurationError;

/// Marker left in sample configuration until a real relay script is deployed.
pub const PLACEHOLDER_MARKER: &str = "YOUR_SCRIPT_ID";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(Url);

impl Endpoint {
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigurationError> {
        let raw = raw.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Err(ConfigurationError::Missing);
        }
        if raw.contains(PLACEHOLDER_MARKER) {
            return Err(ConfigurationError::Placeholder);
        }

        let url = Url::parse(raw).map_err(|err| ConfigurationError::Invalid {
            url: raw.to_string(),
            reason: err.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            other => Err(ConfigurationError::UnsupportedScheme {
                scheme: other.to_string(),
            }),
        }
    }

    pub fn url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_endpoint_is_missing() {
        assert_eq!(Endpoint::parse(None), Err(ConfigurationError::Missing));
        assert_eq!(Endpoint::parse(Some("  ")), Err(ConfigurationError::Missing));
    }

    #[test]
    fn placeholder_endpoint_is_not_configured() {
        assert_eq!(
            Endpoint::parse(Some("https://script.google.com/macros/s/YOUR_SCRIPT_ID/exec")),
            Err(ConfigurationError::Placeholder)
        );
    }

    #[test]
    fn rejects_relative_and_non_http_urls() {
        assert!(matches!(
            Endpoint::parse(Some("/macros/exec")),
            Err(ConfigurationError::Invalid { .. })
        ));
        assert!(matches!(
            Endpoint::parse(Some("ftp://relay.example/rsvp")),
            Err(ConfigurationError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn accepts_deployed_script_url() {
        let endpoint = Endpoint::parse(Some(" https://script.google.com/macros/s/AKfy/exec "))
            .expect("endpoint");
        assert_eq!(endpoint.url().host_str(), Some("script.google.com"));
    }
}
