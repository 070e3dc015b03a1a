//! Plain-text report
//!
//! ```text
//! ----- S3 Files -----
//! css/site.css - Checksum error - S3[<remote>] - Local[<local>]
//! img/logo.png Not found
//!
//! ----- Local Files -----
//! draft.html Not found
//! ```

use colored::Colorize;
use std::io::{self, Write};

use crate::config::ColorMode;
use crate::reconcile::{RemoteFinding, Report};

pub const REMOTE_HEADER: &str = "----- S3 Files -----";
pub const LOCAL_HEADER: &str = "----- Local Files -----";

/// Apply a color mode to the `colored` crate's global switch
pub fn apply_color_mode(mode: ColorMode) {
	match mode {
		ColorMode::Auto => colored::control::unset_override(),
		ColorMode::Always => colored::control::set_override(true),
		ColorMode::Never => colored::control::set_override(false),
	}
}

/// Write both report sections
///
/// With `highlight` on, the remote fingerprint is green and the local one red
/// (subject to the `colored` global switch).
pub fn render<W: Write>(report: &Report, out: &mut W, highlight: bool) -> io::Result<()> {
	writeln!(out, "{}", REMOTE_HEADER)?;
	for finding in &report.remote {
		match finding {
			RemoteFinding::ChecksumMismatch { name, remote, local } => {
				if highlight {
					writeln!(
						out,
						"{} - Checksum error - S3[{}] - Local[{}]",
						name,
						remote.green(),
						local.red()
					)?;
				} else {
					writeln!(out, "{} - Checksum error - S3[{}] - Local[{}]", name, remote, local)?;
				}
			}
			RemoteFinding::MissingLocally { name } => writeln!(out, "{} Not found", name)?,
		}
	}

	writeln!(out)?;
	writeln!(out, "{}", LOCAL_HEADER)?;
	for name in &report.local_only {
		writeln!(out, "{} Not found", name)?;
	}
	out.flush()
}


// vim: ts=4
