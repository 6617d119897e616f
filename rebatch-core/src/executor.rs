use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::history::RenameHistory;
use crate::observer::RenameObserver;
use crate::transform::RenamePair;

/// Direction a batch runs in. `Undo` reverses each pair before acting, so a
/// stored history can be replayed as-is to restore the prior names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameMode {
    Apply,
    Undo,
}

/// Apply a batch of renames in order and report what actually happened.
///
/// A proposed name that already exists as a different entry is never
/// overwritten: the target gets a ` (N)` suffix, N drawn from one counter
/// shared by the whole batch. A pair that fails with permission-denied or
/// not-found is skipped (reported through the observer) and the batch
/// continues; any other failure aborts the batch.
///
/// Pairs are processed strictly in input order, which is what makes the
/// shared counter and overlapping-name scenarios deterministic.
pub fn execute_batch<I>(
    pairs: I,
    mode: RenameMode,
    observer: &mut dyn RenameObserver,
) -> Result<RenameHistory>
where
    I: IntoIterator<Item = RenamePair>,
{
    let mut history = RenameHistory::new();
    let mut collisions = 1u32;

    for pair in pairs {
        let (source, mut target) = match mode {
            RenameMode::Apply => (pair.original, pair.proposed),
            RenameMode::Undo => (pair.proposed, pair.original),
        };

        // Renaming an entry to its own name is a no-op, not a collision.
        if target != source && target.symlink_metadata().is_ok() {
            let proposed = target.clone();
            loop {
                let candidate = disambiguate(&proposed, collisions);
                collisions += 1;
                if candidate.symlink_metadata().is_err() {
                    target = candidate;
                    break;
                }
            }
        }

        match fs::rename(&source, &target) {
            Ok(()) => {
                history.record(&source, &target);
                observer.renamed(&source, &target);
            },
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::PermissionDenied | io::ErrorKind::NotFound
                ) =>
            {
                observer.skipped(&source, &e);
            },
            Err(e) => return Err(e.into()),
        }
    }

    Ok(history)
}

/// Insert the ` (N)` collision suffix before the file extension when the
/// name has one, otherwise append it. Names with an empty stem (dotfiles)
/// are treated as having no extension.
fn disambiguate(path: &Path, n: u32) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let renamed = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem} ({n}).{ext}"),
        _ => format!("{name} ({n})"),
    };
    path.with_file_name(renamed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_goes_before_the_extension() {
        assert_eq!(
            disambiguate(Path::new("/d/hello.mkv"), 3),
            PathBuf::from("/d/hello (3).mkv")
        );
    }

    #[test]
    fn suffix_is_appended_without_an_extension() {
        assert_eq!(
            disambiguate(Path::new("/d/dir"), 1),
            PathBuf::from("/d/dir (1)")
        );
    }

    #[test]
    fn dotfiles_keep_their_leading_dot() {
        assert_eq!(
            disambiguate(Path::new("/d/.config"), 2),
            PathBuf::from("/d/.config (2)")
        );
    }

    #[test]
    fn only_the_last_extension_is_split() {
        assert_eq!(
            disambiguate(Path::new("/d/archive.tar.gz"), 1),
            PathBuf::from("/d/archive.tar (1).gz")
        );
    }
}
