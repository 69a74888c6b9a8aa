use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Track configuration as supplied by the embedding application, typically
/// deserialized from a JSON track definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackConfig {
    /// Locator of the remote feature file.
    pub url: Option<String>,

    /// Display name for the track.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TrackConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            name: None,
        }
    }

    /// Validated source locator. Fails synchronously at setup when the URL
    /// is missing or unparseable.
    pub fn source_url(&self) -> Result<Url> {
        let raw = self.url.as_deref().ok_or_else(|| {
            let rendered = serde_json::to_string(self)
                .unwrap_or_else(|_| "<unserializable track config>".to_string());
            Error::MissingUrl(rendered)
        })?;

        Url::parse(raw).map_err(|e| Error::InvalidUrl(format!("{}: {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_url_valid() {
        let config = TrackConfig::new("http://example.com/cre.bigBed");
        let url = config.source_url().unwrap();
        assert_eq!(url.as_str(), "http://example.com/cre.bigBed");
    }

    #[test]
    fn test_source_url_missing() {
        let config = TrackConfig {
            url: None,
            name: Some("regions".to_string()),
        };
        let err = config.source_url().unwrap_err();
        assert!(matches!(err, Error::MissingUrl(_)));
        // the message embeds the offending config
        assert!(err.to_string().contains("regions"));
    }

    #[test]
    fn test_source_url_unparseable() {
        let config = TrackConfig::new("not a url");
        assert!(matches!(config.source_url(), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_deserialize_from_track_json() {
        let config: TrackConfig =
            serde_json::from_str(r#"{"url": "http://example.com/t.bigBed", "name": "t"}"#).unwrap();
        assert_eq!(config.name.as_deref(), Some("t"));
        assert!(config.source_url().is_ok());
    }
}
