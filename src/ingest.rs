//! Journal ingestion: feed log files through an [`Assembler`].
//!
//! Each line is decoded and applied before the next one is read, so a
//! malformed line stops its file with everything above it already
//! assembled. A failed file never stops the directory.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use ignore::WalkBuilder;

use crate::assemble::{Assembler, SystemSink};
use crate::journal::{self, DecodeError};
use crate::model::Event;

/// Extension of journal log files.
pub const JOURNAL_EXTENSION: &str = "log";

/// Errors that can occur while ingesting journals.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: DecodeError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to list {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },
}

pub type Result<T> = core::result::Result<T, IngestError>;

/// How ingestion treats the current-system cursor between files.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestOptions {
    /// Start every file with no current system. Off by default: a scan at
    /// the top of a file attaches to the last system of the previous file.
    pub reset_cursor_per_file: bool,
}

/// What a single file contributed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounts {
    /// Non-blank lines decoded and applied.
    pub lines: usize,
    /// Of those, lines that decoded to a jump or a scan.
    pub recognized: usize,
}

/// Outcome of one file in a directory run.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Result<LineCounts>,
}

/// Outcome of a directory run, one report per journal file in listing order.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub files: Vec<FileReport>,
}

impl IngestReport {
    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.outcome.is_err())
    }
}

/// List the journal files directly inside `dir`, sorted by file name.
pub fn journal_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .max_depth(Some(1))
        .sort_by_file_name(Ord::cmp)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| IngestError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if entry.file_type().is_some_and(|ft| ft.is_file())
            && path.extension().and_then(|e| e.to_str()) == Some(JOURNAL_EXTENSION)
        {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// Decode and apply each line of `bytes`. Blank lines are skipped.
///
/// Lines are split on `\n` before any decoding, so a line that is not valid
/// UTF-8 fails on its own. Stops at the first malformed line; lines before
/// it stay applied.
pub fn ingest_lines<S: SystemSink>(
    assembler: &mut Assembler<S>,
    bytes: impl AsRef<[u8]>,
) -> Result<LineCounts> {
    let mut counts = LineCounts::default();
    let mut failure = None;

    let events = bytes
        .as_ref()
        .split(|&b| b == b'\n')
        .enumerate()
        .filter(|(_, line)| !line.trim_ascii().is_empty())
        .map_while(|(n, line)| match journal::decode(line) {
            Ok(event) => {
                counts.lines += 1;
                if !matches!(event, Event::Other(_)) {
                    counts.recognized += 1;
                }
                Some(event)
            }
            Err(source) => {
                failure = Some(IngestError::Decode { line: n + 1, source });
                None
            }
        });
    assembler.process(events);

    match failure {
        Some(e) => Err(e),
        None => Ok(counts),
    }
}

/// Read one journal file and apply it.
pub fn ingest_file<S: SystemSink>(assembler: &mut Assembler<S>, path: &Path) -> Result<LineCounts> {
    let bytes = fs::read(path)?;
    ingest_lines(assembler, bytes)
}

/// Apply every journal file in `dir`, in listing order.
///
/// Only a directory that cannot be listed is an error; per-file failures
/// are logged and recorded in the report.
pub fn ingest_directory<S: SystemSink>(
    assembler: &mut Assembler<S>,
    dir: &Path,
    options: IngestOptions,
) -> Result<IngestReport> {
    let mut report = IngestReport::default();
    for path in journal_files(dir)? {
        if options.reset_cursor_per_file {
            assembler.reset_cursor();
        }
        let outcome = ingest_file(assembler, &path);
        match &outcome {
            Ok(counts) => tracing::info!(
                path = %path.display(),
                lines = counts.lines,
                recognized = counts.recognized,
                "journal ingested"
            ),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "journal failed"),
        }
        report.files.push(FileReport { path, outcome });
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    const JUMP_SOL: &str = r#"{"event":"FSDJump","StarSystem":"Sol","SystemAddress":10}"#;
    const JUMP_LHS: &str = r#"{"event":"FSDJump","StarSystem":"LHS 3447","SystemAddress":20}"#;
    const STAR: &str = r#"{"event":"Scan","ScanType":"AutoScan","BodyName":"Sol","StarType":"G","Subclass":2,"Luminosity":"V"}"#;
    const EARTH: &str = r#"{"event":"Scan","ScanType":"Detailed","BodyName":"Earth","PlanetClass":"Earthlike body"}"#;
    const MARS: &str = r#"{"event":"Scan","ScanType":"Detailed","BodyName":"Mars","PlanetClass":"High metal content body"}"#;
    const MALFORMED: &str = r#"{"event":"Scan","ScanType":"#;

    fn write(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, lines.join("\n") + "\n").unwrap();
        path
    }

    fn body_names(assembler: &Assembler<()>, system: &str) -> Vec<String> {
        assembler
            .state()
            .get(system)
            .map(|s| s.bodies.iter().map(|b| b.scan.body_name.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn skips_blank_lines_and_counts_recognized() {
        let mut assembler = Assembler::detached();
        let text = format!("{JUMP_SOL}\n\n   \n{STAR}\n{{\"event\":\"Music\"}}\n{EARTH}\n");
        let counts = ingest_lines(&mut assembler, &text).unwrap();

        assert_eq!(counts, LineCounts { lines: 4, recognized: 3 });
        assert_eq!(body_names(&assembler, "Sol"), ["Earth"]);
    }

    #[test]
    fn malformed_line_keeps_earlier_lines_and_reports_line_number() {
        let mut assembler = Assembler::detached();
        let text = [JUMP_SOL, EARTH, MALFORMED, MARS].join("\n");
        let err = ingest_lines(&mut assembler, &text).unwrap_err();

        assert!(matches!(err, IngestError::Decode { line: 3, .. }));
        assert_eq!(body_names(&assembler, "Sol"), ["Earth"]);
    }

    #[test]
    fn invalid_utf8_line_keeps_earlier_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Journal.01.log");
        let mut bytes = [JUMP_SOL, EARTH].join("\n").into_bytes();
        bytes.extend_from_slice(b"\n{\"event\":\"Scan\",\"BodyName\":\"\xff\xfe\"}\n");
        bytes.extend_from_slice(MARS.as_bytes());
        fs::write(&path, bytes).unwrap();

        let mut assembler = Assembler::detached();
        let err = ingest_file(&mut assembler, &path).unwrap_err();

        assert!(matches!(err, IngestError::Decode { line: 3, .. }));
        assert_eq!(assembler.state().systems().len(), 1);
        assert_eq!(body_names(&assembler, "Sol"), ["Earth"]);
    }

    #[test]
    fn crlf_line_endings_decode() {
        let mut assembler = Assembler::detached();
        let text = format!("{JUMP_SOL}\r\n{EARTH}\r\n\r\n");
        let counts = ingest_lines(&mut assembler, &text).unwrap();

        assert_eq!(counts, LineCounts { lines: 2, recognized: 2 });
        assert_eq!(body_names(&assembler, "Sol"), ["Earth"]);
    }

    #[test]
    fn directory_continues_after_failed_file() {
        let dir = TempDir::new().unwrap();
        write(&dir, "Journal.01.log", &[JUMP_SOL, EARTH, MALFORMED, MARS]);
        write(&dir, "Journal.02.log", &[JUMP_LHS, STAR]);

        let mut assembler = Assembler::detached();
        let report =
            ingest_directory(&mut assembler, dir.path(), IngestOptions::default()).unwrap();

        assert_eq!(report.files.len(), 2);
        assert_eq!(report.failures().count(), 1);
        assert!(report.files[0].outcome.is_err());
        assert_eq!(
            report.files[1].outcome.as_ref().ok(),
            Some(&LineCounts { lines: 2, recognized: 2 })
        );
        assert_eq!(body_names(&assembler, "Sol"), ["Earth"]);
        assert_eq!(assembler.state().get("LHS 3447").unwrap().stars.len(), 1);
    }

    #[test]
    fn lists_only_log_files_in_name_order() {
        let dir = TempDir::new().unwrap();
        write(&dir, "Journal.b.log", &[]);
        write(&dir, "Journal.a.log", &[]);
        write(&dir, "Status.json", &[]);
        write(&dir, "notes.txt", &[]);
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("Journal.c.log"), "").unwrap();

        let names: Vec<_> = journal_files(dir.path())
            .unwrap()
            .iter()
            .filter_map(|p| p.file_name()?.to_str().map(String::from))
            .collect();
        assert_eq!(names, ["Journal.a.log", "Journal.b.log"]);
    }

    #[test]
    fn cursor_carries_across_files_by_default() {
        let dir = TempDir::new().unwrap();
        write(&dir, "Journal.01.log", &[JUMP_SOL]);
        write(&dir, "Journal.02.log", &[EARTH]);

        let mut assembler = Assembler::detached();
        ingest_directory(&mut assembler, dir.path(), IngestOptions::default()).unwrap();

        assert_eq!(body_names(&assembler, "Sol"), ["Earth"]);
    }

    #[test]
    fn cursor_resets_per_file_when_asked() {
        let dir = TempDir::new().unwrap();
        write(&dir, "Journal.01.log", &[JUMP_SOL]);
        write(&dir, "Journal.02.log", &[EARTH, JUMP_SOL, MARS]);

        let mut assembler = Assembler::detached();
        let options = IngestOptions {
            reset_cursor_per_file: true,
        };
        ingest_directory(&mut assembler, dir.path(), options).unwrap();

        assert_eq!(body_names(&assembler, "Sol"), ["Mars"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let mut assembler = Assembler::detached();
        let err = ingest_file(&mut assembler, &dir.path().join("gone.log")).unwrap_err();

        assert!(matches!(err, IngestError::Io(_)));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut assembler = Assembler::detached();
        let result = ingest_directory(
            &mut assembler,
            &dir.path().join("absent"),
            IngestOptions::default(),
        );

        assert!(result.is_err());
    }
}
