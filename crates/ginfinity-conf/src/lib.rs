//! # Ginfinity Conf
//!
//! Settings for the Ginfinity frontend shell. Settings are plain serde
//! structures with defaults for every field, loaded from TOML or JSON and
//! optionally overridden from the process environment.
//!
//! ```
//! use ginfinity_conf::Settings;
//!
//! let settings = Settings::from_toml_str(r#"
//! app_name = "Ginfinity"
//! base_url = "/app/"
//! "#).unwrap();
//!
//! assert_eq!(settings.base_url, "/app/");
//! assert_eq!(settings.dev_proxy.prefixes, ["/compare", "/tsv_embed"]);
//! ```

pub mod settings;

pub use settings::{DevProxySettings, Settings, SettingsError};
