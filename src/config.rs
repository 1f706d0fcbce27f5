//! # Configuration
//!
//! Branding, QR encoding and server settings, loaded with figment.
//!
//! Sources, later overriding earlier:
//! 1. Built-in defaults
//! 2. A TOML file (`hangar-docs.toml` unless another path is given)
//! 3. Environment variables prefixed with `HANGAR_DOCS_`, nested with `__`
//!    (e.g. `HANGAR_DOCS_SERVER__PUBLIC_BASE_URL`)
//!
//! ```toml
//! [branding]
//! company_name = "World Class Aviation"
//!
//! [qr]
//! encoder = "inline"
//! size_px = 120
//! ```

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::{DocsError, Result};
use crate::qr::{DEFAULT_QR_ENDPOINT, DEFAULT_QR_SIZE, InlineSvgEncoder, QrEncoder, QrServerEncoder};

/// Config file read when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "hangar-docs.toml";

/// Environment variable prefix.
const ENV_PREFIX: &str = "HANGAR_DOCS_";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub branding: Branding,
    pub qr: QrConfig,
    pub server: ServerSettings,
}

/// Company identity printed on every document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    pub company_name: String,
    pub document_title: String,
    /// Accent color of header rules (`#rrggbb`).
    pub primary_color: String,
    pub footer_text: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            company_name: "World Class Aviation".to_string(),
            document_title: "AVIATION TECHNICAL RECORD / REGISTRO TÉCNICO AERONÁUTICO".to_string(),
            primary_color: "#b8860b".to_string(),
            footer_text: "Privileged Technical Record | World Class Aviation Logistics Terminal | FAA/EASA Compliance Support".to_string(),
        }
    }
}

/// Which QR encoding service documents use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrEncoderKind {
    /// External HTTP image API.
    #[default]
    Remote,
    /// Local SVG data URI.
    Inline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrConfig {
    pub encoder: QrEncoderKind,
    /// Image API base URL for the remote encoder.
    pub endpoint: String,
    pub size_px: u32,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            encoder: QrEncoderKind::Remote,
            endpoint: DEFAULT_QR_ENDPOINT.to_string(),
            size_px: DEFAULT_QR_SIZE,
        }
    }
}

impl QrConfig {
    /// Build the configured encoder.
    pub fn build(&self) -> Box<dyn QrEncoder> {
        match self.encoder {
            QrEncoderKind::Remote => {
                Box::new(QrServerEncoder::new(self.endpoint.clone()).size(self.size_px))
            }
            QrEncoderKind::Inline => Box::new(InlineSvgEncoder::new(self.size_px)),
        }
    }
}

/// HTTP preview server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub listen_addr: String,
    /// Base URL of the deployed web app, used for QR deep links when a
    /// request does not carry one.
    pub public_base_url: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            public_base_url: None,
        }
    }
}

impl Config {
    /// Load from `hangar-docs.toml` in the working directory and the
    /// environment.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load with an optional explicit config file.
    ///
    /// A missing default file is fine; a missing explicit file is an error.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(DocsError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment
            .extract()
            .map_err(|e| DocsError::Config(e.to_string()))?;
        config.validate()?;
        tracing::debug!(file = %file.display(), "configuration loaded");
        Ok(config)
    }

    /// Reject values that would produce broken documents.
    pub fn validate(&self) -> Result<()> {
        let color = &self.branding.primary_color;
        let is_hex = color.len() == 7
            && color.starts_with('#')
            && color[1..].chars().all(|c| c.is_ascii_hexdigit());
        if !is_hex {
            return Err(DocsError::Config(format!(
                "branding.primary_color must be #rrggbb, got '{}'",
                color
            )));
        }
        if self.qr.size_px < 32 {
            return Err(DocsError::Config(format!(
                "qr.size_px must be at least 32, got {}",
                self.qr.size_px
            )));
        }
        if let Some(base) = &self.server.public_base_url {
            crate::qr::normalize_base_url(base)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.branding.company_name, "World Class Aviation");
        assert_eq!(config.qr.encoder, QrEncoderKind::Remote);
        assert_eq!(config.qr.size_px, 150);
        assert_eq!(config.server.listen_addr, "0.0.0.0:8080");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_toml_and_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "hangar-docs.toml",
                r##"
                [branding]
                company_name = "Test Aero"
                primary_color = "#123abc"

                [qr]
                encoder = "inline"
                "##,
            )?;
            jail.set_env("HANGAR_DOCS_SERVER__PUBLIC_BASE_URL", "https://hangar.example");

            let config = Config::load().map_err(|e| e.to_string())?;
            assert_eq!(config.branding.company_name, "Test Aero");
            assert_eq!(config.branding.primary_color, "#123abc");
            assert_eq!(config.qr.encoder, QrEncoderKind::Inline);
            assert_eq!(
                config.server.public_base_url.as_deref(),
                Some("https://hangar.example")
            );
            // Untouched sections keep their defaults
            assert_eq!(config.branding.document_title, Branding::default().document_title);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load_from(Some(Path::new("/nonexistent/hangar.toml"))).unwrap_err();
        assert!(matches!(err, DocsError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_bad_color() {
        let mut config = Config::default();
        config.branding.primary_color = "gold".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.server.public_base_url = Some("hangar.example".into());
        assert!(matches!(config.validate(), Err(DocsError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_qr_config_builds_encoder() {
        let inline = QrConfig {
            encoder: QrEncoderKind::Inline,
            ..Default::default()
        };
        assert!(inline.build().image_ref("x").unwrap().starts_with("data:image/svg+xml,"));
        let remote = QrConfig::default();
        assert!(remote.build().image_ref("x").unwrap().starts_with(DEFAULT_QR_ENDPOINT));
    }
}
