//! One full check run: scan, list, reconcile
//!
//! ```ignore
//! use bucketcheck::check::Checker;
//!
//! let lister = S3Lister::connect(&settings.region).await;
//! let report = Checker::new(&settings, &lister).run(&mut std::io::stdout()).await?;
//! ```

use std::io::Write;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::CheckError;
use crate::local;
use crate::logging::*;
use crate::reconcile::{reconcile, Report};
use crate::remote::{remote_inventory, ObjectLister};

pub struct Checker<'a> {
	settings: &'a Settings,
	lister: &'a dyn ObjectLister,
	local_root: PathBuf,
}

impl<'a> Checker<'a> {
	pub fn new(settings: &'a Settings, lister: &'a dyn ObjectLister) -> Self {
		Checker { settings, lister, local_root: settings.local_root() }
	}

	/// Scan from `root` instead of `localfolder` under the working directory
	pub fn with_local_root(mut self, root: impl Into<PathBuf>) -> Self {
		self.local_root = root.into();
		self
	}

	/// Build both inventories and reconcile them
	///
	/// Progress lines go to `out`; the report itself is returned for the
	/// caller to render. Stops at the first fatal error.
	pub async fn run<W: Write>(&self, out: &mut W) -> Result<Report, CheckError> {
		let local = local::scan(&self.local_root)?;
		if local.is_empty() {
			return Err(CheckError::EmptyLocalInventory {
				root: self.local_root.display().to_string(),
			});
		}

		let bucket = self.settings.bucketname.as_str();
		writeln!(out, "Checking s3 Bucket objects ({})...", bucket)
			.and_then(|_| writeln!(out))
			.map_err(CheckError::Output)?;

		let remote = remote_inventory(self.lister, bucket).await?;
		if !remote.has_unique_names() {
			warn!("Bucket {} listed the same key more than once", bucket);
		}

		Ok(reconcile(&remote, &local))
	}
}

// vim: ts=4
