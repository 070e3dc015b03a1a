use std::collections::HashSet;
use std::fmt;

/// Where an inventory came from
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Source {
	Local,
	Remote,
}

impl fmt::Display for Source {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Source::Local => write!(f, "local"),
			Source::Remote => write!(f, "remote"),
		}
	}
}

/// One comparable path or object
///
/// `name` always uses `/` as separator. Containers (directories, folder
/// placeholder objects) carry an empty fingerprint.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Entry {
	pub name: String,
	pub is_container: bool,
	pub fingerprint: String,
}

impl Entry {
	pub fn file(name: impl Into<String>, fingerprint: impl Into<String>) -> Self {
		Entry { name: name.into(), is_container: false, fingerprint: fingerprint.into() }
	}

	pub fn container(name: impl Into<String>) -> Self {
		Entry { name: name.into(), is_container: true, fingerprint: String::new() }
	}
}

/// Ordered entries from a single source
#[derive(Clone, PartialEq, Debug)]
pub struct Inventory {
	pub source: Source,
	pub entries: Vec<Entry>,
}

impl Inventory {
	pub fn new(source: Source) -> Self {
		Inventory { source, entries: Vec::new() }
	}

	pub fn from_entries(source: Source, entries: Vec<Entry>) -> Self {
		Inventory { source, entries }
	}

	pub fn push(&mut self, entry: Entry) {
		self.entries.push(entry);
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
		self.entries.iter()
	}

	/// Entries that have content to compare
	pub fn files(&self) -> impl Iterator<Item = &Entry> {
		self.entries.iter().filter(|e| !e.is_container)
	}

	pub fn has_unique_names(&self) -> bool {
		let mut seen = HashSet::new();
		self.entries.iter().all(|e| seen.insert(e.name.as_str()))
	}
}


// vim: ts=4
