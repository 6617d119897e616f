use std::io;
use std::path::{Path, PathBuf};

use nu_ansi_term::Color;

/// Receives the executor's side effects. The console implementation is what
/// the CLI wires in; tests substitute a recording one.
pub trait RenameObserver {
    /// A rename completed, possibly with a disambiguated target.
    fn renamed(&mut self, from: &Path, to: &Path);

    /// A pair was skipped and the batch went on without it.
    fn skipped(&mut self, path: &Path, reason: &io::Error);
}

/// Prints one `original ----> renamed` line per rename on stdout and skip
/// warnings on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver {
    quiet: bool,
    use_color: bool,
}

impl ConsoleObserver {
    pub fn new(quiet: bool, use_color: bool) -> Self {
        Self { quiet, use_color }
    }
}

impl RenameObserver for ConsoleObserver {
    fn renamed(&mut self, from: &Path, to: &Path) {
        if self.quiet {
            return;
        }
        if self.use_color {
            println!(
                "{} ----> {}",
                from.display(),
                Color::Green.paint(to.display().to_string())
            );
        } else {
            println!("{} ----> {}", from.display(), to.display());
        }
    }

    fn skipped(&mut self, path: &Path, reason: &io::Error) {
        let message = format!("skipping {}: {}", path.display(), reason);
        if self.use_color {
            eprintln!("{}", Color::Yellow.paint(message));
        } else {
            eprintln!("{message}");
        }
    }
}

/// Buffers everything for later inspection.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub renamed: Vec<(PathBuf, PathBuf)>,
    pub skipped: Vec<(PathBuf, io::ErrorKind)>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenameObserver for RecordingObserver {
    fn renamed(&mut self, from: &Path, to: &Path) {
        self.renamed.push((from.to_path_buf(), to.to_path_buf()));
    }

    fn skipped(&mut self, path: &Path, reason: &io::Error) {
        self.skipped.push((path.to_path_buf(), reason.kind()));
    }
}
