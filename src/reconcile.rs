//! Reconciliation of a remote inventory against a local one
//!
//! Every remote file is classified as matched-equal, matched-mismatched or
//! remote-only; afterwards every local file no remote entry claimed is
//! local-only. Containers are never compared.
//!
//! Neither inventory is modified. Local files are looked up through a
//! name-keyed map and claimed names are tracked in a separate set, so a local
//! entry satisfies at most one remote entry and never reappears as local-only.

use std::collections::{HashMap, HashSet};

use crate::logging::*;
use crate::types::Inventory;

/// Outcome for one remote file that needs operator attention
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteFinding {
	/// Present on both sides with different content
	ChecksumMismatch { name: String, remote: String, local: String },

	/// Present in the bucket, missing locally
	MissingLocally { name: String },
}

impl RemoteFinding {
	pub fn name(&self) -> &str {
		match self {
			RemoteFinding::ChecksumMismatch { name, .. } => name,
			RemoteFinding::MissingLocally { name } => name,
		}
	}
}

/// Classified result of one reconciliation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
	/// Findings for remote files, in listing order
	pub remote: Vec<RemoteFinding>,

	/// Local files no remote file matched, in traversal order
	pub local_only: Vec<String>,

	/// Files present on both sides with equal fingerprints
	pub matched: usize,
}

impl Report {
	/// No differences in either direction
	pub fn is_clean(&self) -> bool {
		self.remote.is_empty() && self.local_only.is_empty()
	}

	pub fn mismatch_count(&self) -> usize {
		self.remote
			.iter()
			.filter(|f| matches!(f, RemoteFinding::ChecksumMismatch { .. }))
			.count()
	}

	pub fn missing_locally_count(&self) -> usize {
		self.remote.len() - self.mismatch_count()
	}
}

/// Classify every file entry of both inventories
pub fn reconcile(remote: &Inventory, local: &Inventory) -> Report {
	// First occurrence wins if a name ever repeats
	let mut by_name = HashMap::with_capacity(local.len());
	for entry in local.files() {
		by_name.entry(entry.name.as_str()).or_insert(entry);
	}

	let mut claimed: HashSet<&str> = HashSet::with_capacity(by_name.len());
	let mut report = Report::default();

	for remote_entry in remote.files() {
		let name = remote_entry.name.as_str();
		let local_entry = match by_name.get(name) {
			Some(entry) if !claimed.contains(name) => entry,
			_ => {
				report.remote.push(RemoteFinding::MissingLocally { name: name.to_string() });
				continue;
			}
		};
		claimed.insert(name);

		if remote_entry.fingerprint == local_entry.fingerprint {
			report.matched += 1;
		} else {
			report.remote.push(RemoteFinding::ChecksumMismatch {
				name: name.to_string(),
				remote: remote_entry.fingerprint.clone(),
				local: local_entry.fingerprint.clone(),
			});
		}
	}

	report.local_only = local
		.files()
		.filter(|e| !claimed.contains(e.name.as_str()))
		.map(|e| e.name.clone())
		.collect();

	info!(
		"Reconciled: {} matched, {} mismatched, {} missing locally, {} missing remotely",
		report.matched,
		report.mismatch_count(),
		report.missing_locally_count(),
		report.local_only.len()
	);
	report
}


// vim: ts=4
