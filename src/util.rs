use md5::{Digest, Md5};
use std::io;
use std::path::{Component, Path};

/// Hex MD5 of an in-memory buffer
pub fn hash(buf: &[u8]) -> String {
	hex::encode(Md5::digest(buf))
}

/// Hex MD5 of everything a reader yields, read once front to back
pub fn hash_reader<R: io::Read>(reader: &mut R) -> io::Result<String> {
	let mut hasher = Md5::new();
	io::copy(reader, &mut hasher)?;
	Ok(hex::encode(hasher.finalize()))
}

/// Join the normal components of a relative path with `/`
///
/// The result is the same on every platform. Non-UTF-8 names are converted lossily.
pub fn slash_name(relative: &Path) -> String {
	relative
		.components()
		.filter_map(|c| match c {
			Component::Normal(part) => Some(part.to_string_lossy()),
			_ => None,
		})
		.collect::<Vec<_>>()
		.join("/")
}

/// Remove at most one `"` from each end of an ETag
pub fn strip_etag_quotes(tag: &str) -> &str {
	let tag = tag.strip_prefix('"').unwrap_or(tag);
	tag.strip_suffix('"').unwrap_or(tag)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_hash_known_values() {
		assert_eq!(hash(b""), "d41d8cd98f00b204e9800998ecf8427e");
		assert_eq!(hash(b"hello\n"), "b1946ac92492d2347c6235b4d2611184");
	}

	#[test]
	fn test_hash_reader_matches_buffer_hash() {
		let data = vec![7u8; 200_000];
		let mut cursor = io::Cursor::new(data.clone());
		assert_eq!(hash_reader(&mut cursor).unwrap(), hash(&data));
	}

	#[test]
	fn test_slash_name() {
		let p: PathBuf = ["dir", "sub", "file.txt"].iter().collect();
		assert_eq!(slash_name(&p), "dir/sub/file.txt");
		assert_eq!(slash_name(Path::new("./a/b")), "a/b");
		assert_eq!(slash_name(Path::new("top.bin")), "top.bin");
	}

	#[test]
	fn test_strip_etag_quotes() {
		assert_eq!(strip_etag_quotes("\"abc\""), "abc");
		assert_eq!(strip_etag_quotes("abc"), "abc");
		assert_eq!(strip_etag_quotes("\"\"x\"\""), "\"x\"");
		assert_eq!(strip_etag_quotes("\""), "");
		assert_eq!(strip_etag_quotes(""), "");
	}
}

// vim: ts=4
