//! Error types for bucketcheck operations

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Main error type for a check run
///
/// Every variant is fatal: the run stops and no report is produced.
#[derive(Debug)]
pub enum CheckError {
	/// Settings could not be loaded (nested)
	Config(ConfigError),

	/// Local root or one of its entries could not be read
	Filesystem { path: String, source: io::Error },

	/// Local root produced no entries, most likely a wrong `localfolder`
	EmptyLocalInventory { root: String },

	/// Bucket listing failed (nested)
	Remote(RemoteError),

	/// Report or progress output could not be written
	Output(io::Error),
}

impl CheckError {
	/// Process exit status for this error kind
	pub fn exit_code(&self) -> i32 {
		match self {
			CheckError::Config(_) => 2,
			CheckError::Filesystem { .. } => 3,
			CheckError::EmptyLocalInventory { .. } => 4,
			CheckError::Remote(_) => 5,
			CheckError::Output(_) => 1,
		}
	}

	pub(crate) fn filesystem(path: &std::path::Path, source: io::Error) -> Self {
		CheckError::Filesystem { path: path.display().to_string(), source }
	}
}

impl fmt::Display for CheckError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CheckError::Config(e) => write!(f, "Fatal error config file: {}", e),
			CheckError::Filesystem { path, source } => {
				write!(f, "Error retrieving local files from {}: {}", path, source)
			}
			CheckError::EmptyLocalInventory { root } => {
				write!(f, "No files found in: {}", root)
			}
			CheckError::Remote(e) => write!(f, "Error retrieving files from S3: {}", e),
			CheckError::Output(e) => write!(f, "Cannot write report: {}", e),
		}
	}
}

impl Error for CheckError {}

impl From<ConfigError> for CheckError {
	fn from(e: ConfigError) -> Self {
		CheckError::Config(e)
	}
}

impl From<RemoteError> for CheckError {
	fn from(e: RemoteError) -> Self {
		CheckError::Remote(e)
	}
}

/// Configuration loading errors
#[derive(Debug)]
pub enum ConfigError {
	/// No settings file in any searched location
	NotFound { searched: Vec<PathBuf> },

	/// Settings file exists but could not be read
	Unreadable { path: PathBuf, source: io::Error },

	/// Settings file is not valid TOML/JSON
	Parse { path: PathBuf, message: String },

	/// Required key absent or empty
	MissingKey { key: &'static str },

	/// Key present with an unusable value
	InvalidValue { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ConfigError::NotFound { searched } => {
				let paths: Vec<String> = searched.iter().map(|p| p.display().to_string()).collect();
				write!(f, "no config file found (searched: {})", paths.join(", "))
			}
			ConfigError::Unreadable { path, source } => {
				write!(f, "cannot read {}: {}", path.display(), source)
			}
			ConfigError::Parse { path, message } => {
				write!(f, "cannot parse {}: {}", path.display(), message)
			}
			ConfigError::MissingKey { key } => write!(f, "missing required key '{}'", key),
			ConfigError::InvalidValue { key, value } => {
				write!(f, "invalid value for '{}': {}", key, value)
			}
		}
	}
}

impl Error for ConfigError {}

/// Remote object-store errors
#[derive(Debug)]
pub enum RemoteError {
	/// Session, authentication or listing call failed
	ListFailed { bucket: String, source: Box<dyn Error + Send + Sync> },

	/// Store handed back a continuation token it already returned
	PaginationLoop { bucket: String, token: String },

	/// Listed object is missing data every entry needs
	MalformedObject { bucket: String, message: String },
}

impl fmt::Display for RemoteError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RemoteError::ListFailed { bucket, source } => {
				write!(f, "listing bucket {} failed: {}", bucket, source)
			}
			RemoteError::PaginationLoop { bucket, token } => {
				write!(f, "listing bucket {} repeated continuation token {}", bucket, token)
			}
			RemoteError::MalformedObject { bucket, message } => {
				write!(f, "malformed object in bucket {}: {}", bucket, message)
			}
		}
	}
}

impl Error for RemoteError {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_exit_codes_are_distinct_and_nonzero() {
		let errors = vec![
			CheckError::Config(ConfigError::MissingKey { key: "region" }),
			CheckError::Filesystem {
				path: "data".to_string(),
				source: io::Error::new(io::ErrorKind::NotFound, "gone"),
			},
			CheckError::EmptyLocalInventory { root: "data".to_string() },
			CheckError::Remote(RemoteError::PaginationLoop {
				bucket: "b".to_string(),
				token: "t".to_string(),
			}),
			CheckError::Output(io::Error::new(io::ErrorKind::BrokenPipe, "closed")),
		];
		let codes: Vec<i32> = errors.iter().map(|e| e.exit_code()).collect();
		assert!(codes.iter().all(|c| *c != 0));
		let distinct: std::collections::HashSet<i32> = codes.iter().copied().collect();
		assert_eq!(distinct.len(), errors.len());
	}

	#[test]
	fn test_display_mentions_context() {
		let err = CheckError::EmptyLocalInventory { root: "./site".to_string() };
		assert_eq!(err.to_string(), "No files found in: ./site");

		let err: CheckError = ConfigError::MissingKey { key: "bucketname" }.into();
		assert!(err.to_string().contains("bucketname"));

		let err: CheckError = RemoteError::MalformedObject {
			bucket: "assets".to_string(),
			message: "object without key".to_string(),
		}
		.into();
		assert!(err.to_string().contains("assets"));
		assert!(err.to_string().starts_with("Error retrieving files from S3"));
	}
}

// vim: ts=4
