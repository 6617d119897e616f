use std::collections::BTreeSet;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// One directory entry, scoped to the directory it was listed from. Read
/// fresh from the filesystem on every filter pass, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirectoryEntry {
    /// The suffix after the last `.` in the name, without the dot. Empty
    /// when the name has no dot.
    pub fn extension(&self) -> &str {
        self.name.rsplit_once('.').map_or("", |(_, ext)| ext)
    }
}

/// Entry acceptance rules. A list of predicates composes by logical AND: an
/// entry is eligible only when every predicate accepts it, and an empty list
/// accepts everything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    /// Extension is one of the given set.
    ExtensionIn(BTreeSet<String>),
    /// Extension is not in the given set.
    ExtensionNotIn(BTreeSet<String>),
    IsDirectory,
    IsFile,
    /// Directories unconditionally, files by extension. The one rule that is
    /// an OR internally, so list composition stays a pure AND.
    DirectoryOrExtensionIn(BTreeSet<String>),
}

impl Predicate {
    pub fn matches(&self, entry: &DirectoryEntry) -> bool {
        match self {
            Self::ExtensionIn(exts) => exts.contains(entry.extension()),
            Self::ExtensionNotIn(exts) => !exts.contains(entry.extension()),
            Self::IsDirectory => entry.is_dir,
            Self::IsFile => !entry.is_dir,
            Self::DirectoryOrExtensionIn(exts) => entry.is_dir || exts.contains(entry.extension()),
        }
    }
}

/// True when every predicate accepts the entry.
pub fn accepts(predicates: &[Predicate], entry: &DirectoryEntry) -> bool {
    predicates.iter().all(|p| p.matches(entry))
}

/// Filtering flags as they arrive from the command line. `None` means a flag
/// was not given; `Some(vec![])` means it was given without values, which is
/// meaningful for `ignore` combined with `directories` (files only).
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub directories: bool,
    pub only: Option<Vec<String>>,
    pub ignore: Option<Vec<String>>,
}

/// Derive the predicate list from the user-facing flags.
///
/// `only` and `ignore` are mutually exclusive at the CLI; if both ever
/// coexist, `only` wins. Combined with `directories`, `only` widens the
/// match to include directories, while `ignore` narrows it to files.
pub fn build_predicates(options: &FilterOptions) -> Vec<Predicate> {
    if options.directories {
        if let Some(only) = &options.only {
            vec![Predicate::DirectoryOrExtensionIn(extension_set(only))]
        } else if let Some(ignore) = &options.ignore {
            if ignore.is_empty() {
                vec![Predicate::IsFile]
            } else {
                vec![
                    Predicate::IsFile,
                    Predicate::ExtensionNotIn(extension_set(ignore)),
                ]
            }
        } else {
            vec![Predicate::IsDirectory]
        }
    } else if let Some(only) = &options.only {
        vec![Predicate::ExtensionIn(extension_set(only))]
    } else if let Some(ignore) = &options.ignore {
        vec![Predicate::ExtensionNotIn(extension_set(ignore))]
    } else {
        Vec::new()
    }
}

fn extension_set(list: &[String]) -> BTreeSet<String> {
    list.iter()
        .map(|ext| ext.trim_start_matches('.').to_string())
        .collect()
}

/// Validate `dir` and lazily yield its entries (one level, sorted by name)
/// accepted by every predicate. Path problems are reported before the
/// iterator exists; listing failures after that surface as `Err` items.
pub fn filtered_entries(
    dir: &Path,
    predicates: Vec<Predicate>,
) -> Result<impl Iterator<Item = Result<DirectoryEntry>>> {
    let metadata = std::fs::metadata(dir).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            Error::PathNotFound(dir.to_path_buf())
        } else {
            Error::Io(e)
        }
    })?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter();

    Ok(walker.filter_map(move |entry| match entry {
        Ok(entry) => {
            let entry = DirectoryEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: entry.file_type().is_dir(),
            };
            accepts(&predicates, &entry).then_some(Ok(entry))
        },
        Err(e) => Some(Err(Error::Io(e.into()))),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            is_dir: false,
        }
    }

    fn dir(name: &str) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            is_dir: true,
        }
    }

    fn exts(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn extension_is_suffix_after_last_dot() {
        assert_eq!(file("movie.mkv").extension(), "mkv");
        assert_eq!(file("archive.tar.gz").extension(), "gz");
        assert_eq!(file("noext").extension(), "");
        assert_eq!(file("trailing.").extension(), "");
        assert_eq!(file(".gitignore").extension(), "gitignore");
    }

    #[test]
    fn extension_comparison_is_case_sensitive() {
        let allow = Predicate::ExtensionIn(exts(&["mkv"]));
        assert!(allow.matches(&file("a.mkv")));
        assert!(!allow.matches(&file("a.MKV")));
    }

    #[test]
    fn empty_predicate_list_accepts_everything() {
        assert!(accepts(&[], &file("anything")));
        assert!(accepts(&[], &dir("anything")));
    }

    #[test]
    fn directory_or_extension_widens_to_directories() {
        let p = Predicate::DirectoryOrExtensionIn(exts(&["mkv"]));
        assert!(p.matches(&dir("sub")));
        assert!(p.matches(&file("a.mkv")));
        assert!(!p.matches(&file("a.mp3")));
    }

    #[test]
    fn predicates_for_plain_only_list() {
        let options = FilterOptions {
            directories: false,
            only: Some(vec!["mkv".to_string()]),
            ignore: None,
        };
        assert_eq!(
            build_predicates(&options),
            vec![Predicate::ExtensionIn(exts(&["mkv"]))]
        );
    }

    #[test]
    fn predicates_strip_leading_dots_from_lists() {
        let options = FilterOptions {
            directories: false,
            only: Some(vec![".mkv".to_string()]),
            ignore: None,
        };
        assert_eq!(
            build_predicates(&options),
            vec![Predicate::ExtensionIn(exts(&["mkv"]))]
        );
    }

    #[test]
    fn only_wins_when_both_lists_coexist() {
        let options = FilterOptions {
            directories: false,
            only: Some(vec!["mkv".to_string()]),
            ignore: Some(vec!["mp3".to_string()]),
        };
        assert_eq!(
            build_predicates(&options),
            vec![Predicate::ExtensionIn(exts(&["mkv"]))]
        );
    }

    #[test]
    fn predicates_for_directory_flag_alone() {
        let options = FilterOptions {
            directories: true,
            only: None,
            ignore: None,
        };
        assert_eq!(build_predicates(&options), vec![Predicate::IsDirectory]);
    }

    #[test]
    fn predicates_for_directory_with_ignore() {
        let options = FilterOptions {
            directories: true,
            only: None,
            ignore: Some(vec!["mp3".to_string()]),
        };
        assert_eq!(
            build_predicates(&options),
            vec![
                Predicate::IsFile,
                Predicate::ExtensionNotIn(exts(&["mp3"])),
            ]
        );
    }

    #[test]
    fn predicates_for_directory_with_explicit_empty_ignore() {
        let options = FilterOptions {
            directories: true,
            only: None,
            ignore: Some(Vec::new()),
        };
        assert_eq!(build_predicates(&options), vec![Predicate::IsFile]);
    }

    #[test]
    fn no_flags_build_no_predicates() {
        assert_eq!(build_predicates(&FilterOptions::default()), Vec::new());
    }
}
