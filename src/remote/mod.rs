//! Remote inventory: bucket listing normalized into entries
//!
//! ```ignore
//! use bucketcheck::remote::{remote_inventory, S3Lister};
//!
//! let lister = S3Lister::connect("eu-west-1").await;
//! let inventory = remote_inventory(&lister, "my-bucket").await?;
//! ```

pub mod memory;
pub mod s3;
pub mod traits;

pub use memory::MemoryLister;
pub use s3::S3Lister;
pub use traits::{ListPage, ObjectLister, RemoteObject, RemoteResult};

use std::collections::HashSet;

use crate::error::RemoteError;
use crate::logging::*;
use crate::types::{Entry, Inventory, Source};
use crate::util;

/// Separator S3 consoles use for folder placeholder keys
pub const FOLDER_SEPARATOR: char = '/';

/// List the whole bucket, following continuation tokens to the last page
pub async fn remote_inventory(lister: &dyn ObjectLister, bucket: &str) -> RemoteResult<Inventory> {
	let mut inventory = Inventory::new(Source::Remote);
	let mut seen_tokens = HashSet::new();
	let mut token: Option<String> = None;
	let mut pages = 0usize;

	loop {
		let page = lister.list_page(bucket, token.as_deref()).await?;
		pages += 1;
		debug!("[{}] page {} of {}: {} objects", lister.name(), pages, bucket, page.objects.len());

		for obj in page.objects {
			inventory.push(to_entry(bucket, obj)?);
		}

		match page.next_token {
			Some(next) => {
				if !seen_tokens.insert(next.clone()) {
					return Err(RemoteError::PaginationLoop { bucket: bucket.to_string(), token: next });
				}
				token = Some(next);
			}
			None => break,
		}
	}

	info!("Listed {} objects in bucket {} ({} pages)", inventory.len(), bucket, pages);
	Ok(inventory)
}

/// Normalize one listed object
pub fn to_entry(bucket: &str, obj: RemoteObject) -> RemoteResult<Entry> {
	let name = obj.key.ok_or_else(|| RemoteError::MalformedObject {
		bucket: bucket.to_string(),
		message: "object without key".to_string(),
	})?;
	let is_container = name.ends_with(FOLDER_SEPARATOR);
	let fingerprint = match obj.e_tag {
		Some(tag) => util::strip_etag_quotes(&tag).to_string(),
		None => String::new(),
	};
	Ok(Entry { name, is_container, fingerprint })
}


// vim: ts=4
