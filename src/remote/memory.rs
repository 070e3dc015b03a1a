//! In-memory lister
//!
//! Serves fixed pages without touching the network, for tests of the
//! inventory builder and the check driver.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::traits::*;
use crate::error::RemoteError;

/// Lister that replays pre-built pages
///
/// Page `n` links to page `n + 1` through the token `"page-{n+1}"`, unless
/// built with explicit tokens via [`MemoryLister::from_pages`].
pub struct MemoryLister {
	pages: Vec<ListPage>,
	calls: AtomicUsize,
	fail_with: Option<String>,
}

impl MemoryLister {
	/// Single-page listing
	pub fn new(objects: Vec<RemoteObject>) -> Self {
		Self::paged(vec![objects])
	}

	/// Listing split into pages linked by generated tokens
	pub fn paged(pages: Vec<Vec<RemoteObject>>) -> Self {
		let count = pages.len();
		let pages = pages
			.into_iter()
			.enumerate()
			.map(|(i, objects)| ListPage {
				objects,
				next_token: if i + 1 < count { Some(format!("page-{}", i + 1)) } else { None },
			})
			.collect();
		MemoryLister { pages, calls: AtomicUsize::new(0), fail_with: None }
	}

	/// Pages with their tokens taken as given
	pub fn from_pages(pages: Vec<ListPage>) -> Self {
		MemoryLister { pages, calls: AtomicUsize::new(0), fail_with: None }
	}

	/// Lister whose every call fails
	pub fn failing(message: impl Into<String>) -> Self {
		MemoryLister { pages: Vec::new(), calls: AtomicUsize::new(0), fail_with: Some(message.into()) }
	}

	/// Number of `list_page` calls served so far
	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl ObjectLister for MemoryLister {
	fn name(&self) -> &str {
		"memory"
	}

	async fn list_page(&self, bucket: &str, token: Option<&str>) -> RemoteResult<ListPage> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		if let Some(message) = &self.fail_with {
			return Err(RemoteError::ListFailed {
				bucket: bucket.to_string(),
				source: message.clone().into(),
			});
		}

		let index = match token {
			None => 0,
			Some(t) => t
				.strip_prefix("page-")
				.and_then(|n| n.parse::<usize>().ok())
				.ok_or_else(|| RemoteError::ListFailed {
					bucket: bucket.to_string(),
					source: format!("unknown continuation token {}", t).into(),
				})?,
		};

		Ok(self.pages.get(index).cloned().unwrap_or_default())
	}
}

// vim: ts=4
