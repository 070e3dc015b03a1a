/// End-to-end checks: real local directories against an in-memory bucket listing
///
/// Each test builds a local tree in a temp dir, serves a fixed listing through
/// `MemoryLister`, runs the full `Checker` pipeline and renders the report.
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use bucketcheck::check::Checker;
use bucketcheck::config::Settings;
use bucketcheck::error::CheckError;
use bucketcheck::remote::{MemoryLister, RemoteObject};
use bucketcheck::report;
use bucketcheck::util;

/// Helper to create a file (and its parent directories) with given content
fn create_file(dir: &Path, name: &str, content: &str) {
	let path = dir.join(name);
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).unwrap();
	}
	fs::write(&path, content).unwrap();
}

/// Object as S3 lists it: ETag wrapped in quotes
fn object(key: &str, fingerprint: &str) -> RemoteObject {
	RemoteObject::new(key, format!("\"{}\"", fingerprint))
}

fn settings() -> Settings {
	Settings {
		localfolder: "data".to_string(),
		region: "eu-west-1".to_string(),
		bucketname: "backup-bucket".to_string(),
		..Default::default()
	}
}

/// Run the pipeline and return (progress output, rendered report)
async fn run_check(root: &Path, lister: &MemoryLister) -> Result<(String, String), CheckError> {
	let settings = settings();
	let mut progress = Vec::new();
	let result = Checker::new(&settings, lister).with_local_root(root).run(&mut progress).await?;

	let mut rendered = Vec::new();
	report::render(&result, &mut rendered, false).unwrap();
	Ok((String::from_utf8(progress).unwrap(), String::from_utf8(rendered).unwrap()))
}

const EMPTY_REPORT: &str = "----- S3 Files -----\n\n----- Local Files -----\n";

#[tokio::test]
async fn test_scenario_a_identical_file() {
	let root = TempDir::new().unwrap();
	create_file(root.path(), "a.txt", "alpha");
	let lister = MemoryLister::new(vec![object("a.txt", &util::hash(b"alpha"))]);

	let (progress, rendered) = run_check(root.path(), &lister).await.expect("check should succeed");
	assert_eq!(progress, "Checking s3 Bucket objects (backup-bucket)...\n\n");
	assert_eq!(rendered, EMPTY_REPORT);
}

#[tokio::test]
async fn test_scenario_b_checksum_mismatch() {
	let root = TempDir::new().unwrap();
	create_file(root.path(), "a.txt", "local version");
	let local_hash = util::hash(b"local version");
	let remote_hash = util::hash(b"remote version");
	let lister = MemoryLister::new(vec![object("a.txt", &remote_hash)]);

	let (_, rendered) = run_check(root.path(), &lister).await.unwrap();
	assert_eq!(
		rendered,
		format!(
			"----- S3 Files -----\na.txt - Checksum error - S3[{}] - Local[{}]\n\n----- Local Files -----\n",
			remote_hash, local_hash
		)
	);
}

#[tokio::test]
async fn test_scenario_c_empty_local_aborts() {
	let root = TempDir::new().unwrap();
	let lister = MemoryLister::new(vec![object("b.txt", "h3")]);

	let settings = settings();
	let mut progress = Vec::new();
	let result = Checker::new(&settings, &lister).with_local_root(root.path()).run(&mut progress).await;

	match result {
		Err(e @ CheckError::EmptyLocalInventory { .. }) => assert_eq!(e.exit_code(), 4),
		other => panic!("expected EmptyLocalInventory, got {:?}", other),
	}
	assert!(progress.is_empty(), "nothing should be written before aborting");
	assert_eq!(lister.calls(), 0, "bucket must not be listed");
}

#[tokio::test]
async fn test_scenario_d_local_only() {
	let root = TempDir::new().unwrap();
	create_file(root.path(), "c.txt", "charlie");
	let lister = MemoryLister::new(vec![]);

	let (_, rendered) = run_check(root.path(), &lister).await.unwrap();
	assert_eq!(rendered, "----- S3 Files -----\n\n----- Local Files -----\nc.txt Not found\n");
}

#[tokio::test]
async fn test_scenario_e_containers_excluded() {
	let root = TempDir::new().unwrap();
	create_file(root.path(), "dir/d.txt", "delta");
	let lister = MemoryLister::new(vec![
		RemoteObject::new("dir/", ""),
		object("dir/d.txt", &util::hash(b"delta")),
	]);

	let (_, rendered) = run_check(root.path(), &lister).await.unwrap();
	assert_eq!(rendered, EMPTY_REPORT);
}

#[tokio::test]
async fn test_mixed_tree_across_pages() {
	let root = TempDir::new().unwrap();
	create_file(root.path(), "index.html", "<html>");
	create_file(root.path(), "css/site.css", "body{}");
	create_file(root.path(), "img/logo.png", "png");
	create_file(root.path(), "drafts/new.html", "draft");

	let lister = MemoryLister::paged(vec![
		vec![
			object("css/", ""),
			object("css/site.css", &util::hash(b"body{ }")),
			object("img/logo.png", &util::hash(b"png")),
		],
		vec![object("index.html", &util::hash(b"<html>")), object("robots.txt", "abc")],
	]);

	let (_, rendered) = run_check(root.path(), &lister).await.unwrap();
	assert_eq!(
		rendered,
		format!(
			"----- S3 Files -----\n\
			 css/site.css - Checksum error - S3[{}] - Local[{}]\n\
			 robots.txt Not found\n\
			 \n\
			 ----- Local Files -----\n\
			 drafts/new.html Not found\n",
			util::hash(b"body{ }"),
			util::hash(b"body{}")
		)
	);
	assert_eq!(lister.calls(), 2);
}

#[tokio::test]
async fn test_missing_local_root() {
	let root = TempDir::new().unwrap();
	let lister = MemoryLister::new(vec![]);

	let result = run_check(&root.path().join("absent"), &lister).await;
	match result {
		Err(e @ CheckError::Filesystem { .. }) => assert_eq!(e.exit_code(), 3),
		other => panic!("expected Filesystem error, got {:?}", other),
	}
	assert_eq!(lister.calls(), 0);
}

#[tokio::test]
async fn test_remote_failure_is_fatal() {
	let root = TempDir::new().unwrap();
	create_file(root.path(), "a.txt", "alpha");
	let lister = MemoryLister::failing("InvalidAccessKeyId");

	match run_check(root.path(), &lister).await {
		Err(e @ CheckError::Remote(_)) => {
			assert_eq!(e.exit_code(), 5);
			assert!(e.to_string().contains("InvalidAccessKeyId"));
		}
		other => panic!("expected Remote error, got {:?}", other),
	}
}
