//! Amazon S3 lister backed by `aws-sdk-s3`

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;

use super::traits::*;
use crate::error::RemoteError;
use crate::logging::*;

/// Lists objects with `ListObjectsV2`
///
/// Credentials come from the default AWS provider chain (environment, shared
/// profile, instance metadata). No retries beyond the SDK's own.
pub struct S3Lister {
	client: Client,
}

impl S3Lister {
	/// Build a client bound to `region`
	pub async fn connect(region: &str) -> Self {
		let config = aws_config::defaults(BehaviorVersion::latest())
			.region(Region::new(region.to_string()))
			.load()
			.await;
		debug!("S3 client configured for region {}", region);
		S3Lister { client: Client::new(&config) }
	}

	pub fn from_client(client: Client) -> Self {
		S3Lister { client }
	}
}

#[async_trait]
impl ObjectLister for S3Lister {
	fn name(&self) -> &str {
		"s3"
	}

	async fn list_page(&self, bucket: &str, token: Option<&str>) -> RemoteResult<ListPage> {
		let resp = self
			.client
			.list_objects_v2()
			.bucket(bucket)
			.set_continuation_token(token.map(str::to_string))
			.send()
			.await
			.map_err(|e| RemoteError::ListFailed {
				bucket: bucket.to_string(),
				source: aws_sdk_s3::error::DisplayErrorContext(e).to_string().into(),
			})?;

		let objects = resp
			.contents()
			.iter()
			.map(|obj| RemoteObject {
				key: obj.key().map(str::to_string),
				e_tag: obj.e_tag().map(str::to_string),
			})
			.collect();

		let next_token = if resp.is_truncated().unwrap_or(false) {
			resp.next_continuation_token().map(str::to_string)
		} else {
			None
		};

		Ok(ListPage { objects, next_token })
	}
}

// vim: ts=4
