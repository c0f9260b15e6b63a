//! Application settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding [`Settings::app_name`].
pub const APP_NAME_ENV: &str = "GINFINITY_APP_NAME";

/// Environment variable overriding [`Settings::base_url`].
pub const BASE_URL_ENV: &str = "GINFINITY_BASE_URL";

/// Settings error
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("File error: {0}")]
	FileError(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Unsupported format: {0}")]
	UnsupportedFormat(String),
}

/// Frontend settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
	/// Document title used when the active route declares none.
	#[serde(default = "default_app_name")]
	pub app_name: String,

	/// Document title shown while no route is resolved.
	#[serde(default = "default_not_found_title")]
	pub not_found_title: String,

	/// Prefix the application is served under. Route paths are relative to it.
	#[serde(default = "default_base_url")]
	pub base_url: String,

	/// Dev-server proxy description.
	#[serde(default)]
	pub dev_proxy: DevProxySettings,
}

/// API prefixes the dev server forwards to the backend.
///
/// The router never talks to the backend; these are kept so that startup
/// can report routes the dev server would intercept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevProxySettings {
	/// Backend origin.
	#[serde(default = "default_proxy_target")]
	pub target: String,

	/// Forwarded path prefixes.
	#[serde(default = "default_proxy_prefixes")]
	pub prefixes: Vec<String>,
}

fn default_app_name() -> String {
	"Ginfinity".to_string()
}

fn default_not_found_title() -> String {
	"Not Found".to_string()
}

fn default_base_url() -> String {
	"/".to_string()
}

fn default_proxy_target() -> String {
	"http://localhost:8000".to_string()
}

fn default_proxy_prefixes() -> Vec<String> {
	vec!["/compare".to_string(), "/tsv_embed".to_string()]
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			app_name: default_app_name(),
			not_found_title: default_not_found_title(),
			base_url: default_base_url(),
			dev_proxy: DevProxySettings::default(),
		}
	}
}

impl Default for DevProxySettings {
	fn default() -> Self {
		Self {
			target: default_proxy_target(),
			prefixes: default_proxy_prefixes(),
		}
	}
}

impl Settings {
	/// Parses settings from a TOML string.
	pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
		toml::from_str(contents)
			.map_err(|e| SettingsError::ParseError(format!("TOML parse error: {}", e)))
	}

	/// Loads settings from a `.toml` or `.json` file.
	pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
		let path = path.into();
		let contents = std::fs::read_to_string(&path).map_err(|e| {
			SettingsError::FileError(format!("Failed to read {}: {}", path.display(), e))
		})?;

		let settings = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => Self::from_toml_str(&contents)?,
			Some("json") => serde_json::from_str(&contents)
				.map_err(|e| SettingsError::ParseError(format!("JSON parse error: {}", e)))?,
			_ => {
				return Err(SettingsError::UnsupportedFormat(
					"Supported formats: .toml, .json".to_string(),
				));
			}
		};

		tracing::debug!(path = %path.display(), "settings loaded");
		Ok(settings)
	}

	/// Applies `GINFINITY_APP_NAME` and `GINFINITY_BASE_URL` when set.
	pub fn with_env_overrides(mut self) -> Self {
		if let Ok(app_name) = std::env::var(APP_NAME_ENV) {
			self.app_name = app_name;
		}
		if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
			self.base_url = base_url;
		}
		self
	}

	/// Validates settings.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.app_name.trim().is_empty() {
			return Err(SettingsError::ValidationError(
				"app_name must not be empty".to_string(),
			));
		}

		if !self.base_url.starts_with('/') {
			return Err(SettingsError::ValidationError(format!(
				"base_url must start with '/': {}",
				self.base_url
			)));
		}

		if let Some(prefix) = self
			.dev_proxy
			.prefixes
			.iter()
			.find(|prefix| !prefix.starts_with('/'))
		{
			return Err(SettingsError::ValidationError(format!(
				"dev_proxy prefix must start with '/': {}",
				prefix
			)));
		}

		Ok(())
	}
}

impl DevProxySettings {
	/// Returns the forwarded prefix covering `path`, if any.
	///
	/// A prefix covers a path when it is equal to it or followed by `/`,
	/// so `/compare` covers `/compare/run` but not `/comparar-arn`.
	pub fn matching_prefix(&self, path: &str) -> Option<&str> {
		self.prefixes
			.iter()
			.map(String::as_str)
			.find(|prefix| {
				let prefix = prefix.trim_end_matches('/');
				match path.strip_prefix(prefix) {
					Some(rest) => rest.is_empty() || rest.starts_with('/'),
					None => false,
				}
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_settings() {
		let settings = Settings::default();
		assert_eq!(settings.app_name, "Ginfinity");
		assert_eq!(settings.not_found_title, "Not Found");
		assert_eq!(settings.base_url, "/");
		assert_eq!(settings.dev_proxy.target, "http://localhost:8000");
		assert!(settings.validate().is_ok());
	}

	#[rstest]
	fn test_empty_toml_uses_defaults() {
		assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
	}

	#[rstest]
	fn test_partial_proxy_table() {
		let settings = Settings::from_toml_str(
			r#"
			[dev_proxy]
			target = "http://backend:9000"
			"#,
		)
		.unwrap();

		assert_eq!(settings.dev_proxy.target, "http://backend:9000");
		assert_eq!(settings.dev_proxy.prefixes, ["/compare", "/tsv_embed"]);
	}

	#[rstest]
	fn test_invalid_toml() {
		let err = Settings::from_toml_str("app_name = ").unwrap_err();
		assert!(matches!(err, SettingsError::ParseError(_)));
	}

	#[rstest]
	#[case(Settings { app_name: "  ".to_string(), ..Settings::default() }, "app_name")]
	#[case(Settings { base_url: "app/".to_string(), ..Settings::default() }, "base_url")]
	#[case(
		Settings {
			dev_proxy: DevProxySettings {
				prefixes: vec!["compare".to_string()],
				..DevProxySettings::default()
			},
			..Settings::default()
		},
		"dev_proxy"
	)]
	fn test_validation_errors(#[case] settings: Settings, #[case] field: &str) {
		let err = settings.validate().unwrap_err();
		assert!(matches!(err, SettingsError::ValidationError(ref msg) if msg.contains(field)));
	}

	#[rstest]
	#[case("/compare", Some("/compare"))]
	#[case("/compare/42", Some("/compare"))]
	#[case("/tsv_embed", Some("/tsv_embed"))]
	#[case("/comparar-arn", None)]
	#[case("/", None)]
	fn test_matching_prefix(#[case] path: &str, #[case] expected: Option<&str>) {
		assert_eq!(DevProxySettings::default().matching_prefix(path), expected);
	}
}
