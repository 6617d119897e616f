use std::path::{Path, PathBuf};

use regex::Regex;

use crate::filter::DirectoryEntry;

/// A proposed rename, both ends absolute. Proposals are not deduplicated;
/// duplicate targets are a normal occurrence and are resolved by the
/// executor at apply time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePair {
    pub original: PathBuf,
    pub proposed: PathBuf,
}

/// Lazily pair each entry with its substituted name.
///
/// The substitution only ever touches the base name; the directory part is
/// carried through untouched. The replacement may use `$1`-style capture
/// references, and an empty replacement deletes every match.
pub fn rename_pairs<'a>(
    dir: &'a Path,
    pattern: &'a Regex,
    replacement: &'a str,
    entries: impl Iterator<Item = DirectoryEntry> + 'a,
) -> impl Iterator<Item = RenamePair> + 'a {
    entries.map(move |entry| RenamePair {
        original: dir.join(&entry.name),
        proposed: dir.join(pattern.replace_all(&entry.name, replacement).as_ref()),
    })
}
