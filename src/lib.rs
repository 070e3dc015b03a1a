//! # bucketcheck - Local directory vs. S3 bucket verification
//!
//! Builds a content inventory of a local directory tree (MD5 per file) and of
//! an S3 bucket (ETag per object), then reports files whose checksums differ
//! and files present on only one side. Nothing is uploaded, downloaded or
//! deleted.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bucketcheck::{check::Checker, config::Settings, remote::S3Lister, report};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::load_from_dir(".".as_ref())?;
//!     let lister = S3Lister::connect(&settings.region).await;
//!     let result = Checker::new(&settings, &lister).run(&mut std::io::stdout()).await?;
//!     report::render(&result, &mut std::io::stdout(), true)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Reconciling inventories directly
//!
//! ```rust
//! use bucketcheck::reconcile::reconcile;
//! use bucketcheck::types::{Entry, Inventory, Source};
//!
//! let local = Inventory::from_entries(Source::Local, vec![Entry::file("a.txt", "H1")]);
//! let remote = Inventory::from_entries(Source::Remote, vec![Entry::file("a.txt", "H2")]);
//! let report = reconcile(&remote, &local);
//! assert_eq!(report.mismatch_count(), 1);
//! ```

pub mod check;
pub mod config;
pub mod error;
pub mod local;
pub mod logging;
pub mod reconcile;
pub mod remote;
pub mod report;
pub mod types;
pub mod util;

// Re-export commonly used types and functions
pub use config::Settings;
pub use error::{CheckError, ConfigError, RemoteError};
pub use reconcile::{reconcile, RemoteFinding, Report};
pub use types::{Entry, Inventory, Source};

// vim: ts=4
