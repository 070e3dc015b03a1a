//! Object-store listing interface
//!
//! The remote inventory builder depends only on this trait, so the S3 client
//! can be swapped for an in-memory store in tests.

use async_trait::async_trait;

use crate::error::RemoteError;

/// Result type for listing operations
pub type RemoteResult<T> = Result<T, RemoteError>;

/// One object as reported by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteObject {
	/// Full key, `None` if the store omitted it
	pub key: Option<String>,
	/// Integrity tag including its surrounding quotes
	pub e_tag: Option<String>,
}

impl RemoteObject {
	pub fn new(key: impl Into<String>, e_tag: impl Into<String>) -> Self {
		RemoteObject { key: Some(key.into()), e_tag: Some(e_tag.into()) }
	}
}

/// One page of a bucket listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPage {
	pub objects: Vec<RemoteObject>,
	/// Token for the next page, `None` on the last page
	pub next_token: Option<String>,
}

/// Paged bucket listing
#[async_trait]
pub trait ObjectLister: Send + Sync {
	/// Short name used in log messages
	fn name(&self) -> &str;

	/// Fetch the page starting at `token` (`None` for the first page)
	async fn list_page(&self, bucket: &str, token: Option<&str>) -> RemoteResult<ListPage>;
}

// vim: ts=4
