//! Settings for a check run
//!
//! Settings follow a priority chain:
//! 1. Built-in defaults (`Settings::default()`)
//! 2. Settings file (`config.toml`, `config.json`, `config.json5`, `config.yaml`
//!    or `config.yml` in the working directory, or an explicit path)
//! 3. Environment variables (`BUCKETCHECK_*` prefix)
//!
//! Keys are matched case-insensitively, so `LocalFolder`, `localFolder` and
//! `localfolder` all name the same setting. Scalar values of the string keys
//! are read as text: `bucketname = 20240101` means the bucket `"20240101"`.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// File names tried, in order, when no explicit path is given
pub const CONFIG_CANDIDATES: &[&str] =
	&["config.toml", "config.json", "config.json5", "config.yaml", "config.yml"];

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "BUCKETCHECK_";

/// Keys whose scalar values are coerced to strings
const STRING_KEYS: &[&str] = &["localfolder", "region", "bucketname"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "lowercase")]
pub struct Settings {
	/// Local root to scan, relative to the working directory
	pub localfolder: String,

	/// S3 region identifier
	pub region: String,

	/// S3 bucket name
	pub bucketname: String,

	/// Fingerprint highlighting in the report
	pub color: ColorMode,
}

impl Default for Settings {
	fn default() -> Self {
		Settings {
			localfolder: String::new(),
			region: String::new(),
			bucketname: String::new(),
			color: ColorMode::Auto,
		}
	}
}

/// Color output mode
///
/// Parsed the same way from the settings file and from `BUCKETCHECK_COLOR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
	#[default]
	Auto,
	Always,
	Never,
}

impl ColorMode {
	/// Parse from string
	#[allow(clippy::should_implement_trait)]
	pub fn from_str(s: &str) -> Option<Self> {
		match s.trim().to_lowercase().as_str() {
			"auto" => Some(Self::Auto),
			"always" | "on" | "true" => Some(Self::Always),
			"never" | "off" | "false" => Some(Self::Never),
			_ => None,
		}
	}
}

impl<'de> Deserialize<'de> for ColorMode {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = serde_json::Value::deserialize(deserializer)?;
		let text = match value {
			serde_json::Value::String(s) => s,
			other => other.to_string(),
		};
		ColorMode::from_str(&text)
			.ok_or_else(|| de::Error::custom(format!("unknown color mode '{}'", text)))
	}
}

impl Settings {
	/// Load settings from the first candidate file found in `dir`
	pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
		let searched: Vec<PathBuf> = CONFIG_CANDIDATES.iter().map(|name| dir.join(name)).collect();
		match searched.iter().find(|p| p.is_file()) {
			Some(path) => Self::load_file(path),
			None => Err(ConfigError::NotFound { searched }),
		}
	}

	/// Load settings from a specific file, format chosen by extension
	pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
		let text = fs::read_to_string(path)
			.map_err(|source| ConfigError::Unreadable { path: path.to_path_buf(), source })?;
		Self::parse(path, &text)
	}

	fn parse(path: &Path, text: &str) -> Result<Self, ConfigError> {
		let parse_err = |message: String| ConfigError::Parse { path: path.to_path_buf(), message };

		let raw: serde_json::Value = match path.extension().and_then(|e| e.to_str()) {
			Some("toml") => toml::from_str(text).map_err(|e| parse_err(e.to_string()))?,
			Some("yaml") | Some("yml") => {
				serde_yaml::from_str(text).map_err(|e| parse_err(e.to_string()))?
			}
			_ => json5::from_str(text).map_err(|e| parse_err(e.to_string()))?,
		};

		let folded = match raw {
			serde_json::Value::Object(map) => serde_json::Value::Object(
				map.into_iter()
					.map(|(k, v)| {
						let k = k.to_lowercase();
						let v = if STRING_KEYS.contains(&k.as_str()) { scalar_to_string(v) } else { v };
						(k, v)
					})
					.collect(),
			),
			// An empty YAML document
			serde_json::Value::Null => serde_json::Value::Object(serde_json::Map::new()),
			_ => return Err(parse_err("top level must be a table of key/value pairs".to_string())),
		};

		serde_json::from_value(folded).map_err(|e| parse_err(e.to_string()))
	}

	/// Overlay `BUCKETCHECK_*` variables from the process environment
	pub fn with_env(self) -> Result<Self, ConfigError> {
		self.with_vars(std::env::vars())
	}

	/// Overlay `BUCKETCHECK_*` variables from an arbitrary source
	pub fn with_vars<I>(mut self, vars: I) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = (String, String)>,
	{
		for (name, value) in vars {
			let key = match name.strip_prefix(ENV_PREFIX) {
				Some(k) => k.to_lowercase(),
				None => continue,
			};
			match key.as_str() {
				"localfolder" => self.localfolder = value,
				"region" => self.region = value,
				"bucketname" => self.bucketname = value,
				"color" => {
					self.color = ColorMode::from_str(&value)
						.ok_or(ConfigError::InvalidValue { key: "color", value })?;
				}
				_ => {}
			}
		}
		Ok(self)
	}

	/// Check that every required key has a non-empty value
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.localfolder.trim().is_empty() {
			return Err(ConfigError::MissingKey { key: "localfolder" });
		}
		if self.region.trim().is_empty() {
			return Err(ConfigError::MissingKey { key: "region" });
		}
		if self.bucketname.trim().is_empty() {
			return Err(ConfigError::MissingKey { key: "bucketname" });
		}
		Ok(())
	}

	/// Local root as scanned, relative to the working directory
	pub fn local_root(&self) -> PathBuf {
		Path::new(".").join(&self.localfolder)
	}
}

/// Numbers and booleans become their text form; other values pass through
fn scalar_to_string(value: serde_json::Value) -> serde_json::Value {
	match value {
		serde_json::Value::Number(n) => {
			// Some parsers hand back whole numbers as floats
			let text = match n.as_f64() {
				Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
				_ => n.to_string(),
			};
			serde_json::Value::String(text)
		}
		serde_json::Value::Bool(b) => serde_json::Value::String(b.to_string()),
		other => other,
	}
}


// vim: ts=4
