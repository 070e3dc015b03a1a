//! Local inventory: recursive scan of a directory tree
//!
//! Every file is hashed with a single sequential MD5 pass. Any unreadable
//! directory or file aborts the scan; a partial inventory would make the
//! comparison meaningless.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::CheckError;
use crate::logging::*;
use crate::types::{Entry, Inventory, Source};
use crate::util;

/// Scan `root` and return every entry below it (the root itself excluded)
pub fn scan(root: &Path) -> Result<Inventory, CheckError> {
	let meta = fs::metadata(root).map_err(|e| CheckError::filesystem(root, e))?;
	if !meta.is_dir() {
		return Err(CheckError::filesystem(
			root,
			io::Error::new(io::ErrorKind::Other, "not a directory"),
		));
	}

	let mut inventory = Inventory::new(Source::Local);
	scan_dir(root, root, &mut inventory)?;
	info!("Scanned {} local entries under {}", inventory.len(), root.display());
	Ok(inventory)
}

fn scan_dir(root: &Path, dir: &Path, inventory: &mut Inventory) -> Result<(), CheckError> {
	let mut children = Vec::new();
	for entry_result in fs::read_dir(dir).map_err(|e| CheckError::filesystem(dir, e))? {
		let entry = entry_result.map_err(|e| CheckError::filesystem(dir, e))?;
		children.push(entry.path());
	}
	children.sort();

	for path in children {
		let relative = path.strip_prefix(root).unwrap_or(&path);
		let name = util::slash_name(relative);

		let link_meta = fs::symlink_metadata(&path).map_err(|e| CheckError::filesystem(&path, e))?;
		let is_link = link_meta.file_type().is_symlink();
		// Links are followed for classification only, never descended into
		let meta = if is_link {
			fs::metadata(&path).map_err(|e| CheckError::filesystem(&path, e))?
		} else {
			link_meta
		};

		if meta.is_dir() {
			inventory.push(Entry::container(name));
			if is_link {
				debug!("Not descending into symlinked directory {}", path.display());
			} else {
				scan_dir(root, &path, inventory)?;
			}
		} else if meta.is_file() {
			let fingerprint = hash_file(&path)?;
			debug!("{} {}", fingerprint, name);
			inventory.push(Entry::file(name, fingerprint));
		} else {
			// FIFOs, sockets and device nodes have no stable content to hash
			return Err(CheckError::filesystem(
				&path,
				io::Error::new(io::ErrorKind::Other, "not a regular file"),
			));
		}
	}

	Ok(())
}

fn hash_file(path: &Path) -> Result<String, CheckError> {
	let mut f = fs::File::open(path).map_err(|e| CheckError::filesystem(path, e))?;
	util::hash_reader(&mut f).map_err(|e| CheckError::filesystem(path, e))
}


// vim: ts=4
