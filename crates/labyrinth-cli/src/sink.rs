//! One text file per accepted loop.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use labyrinth_search::{LoopResult, ResultSink, SinkError};
use uuid::Uuid;

/// Writes each accepted loop to `{score}-{uuid}.txt` in a directory.
///
/// The file holds the directions, one per line, followed by one line per
/// walked segment.
#[derive(Debug)]
pub struct FileSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl FileSink {
    /// Create `dir` if needed and write results into it.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).with_context(|| format!("create directory {}", dir.display()))?;
        Ok(Self {
            dir,
            written: Vec::new(),
        })
    }

    /// The output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far, in acceptance order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Take the list of written files.
    pub fn into_written(self) -> Vec<PathBuf> {
        self.written
    }
}

/// File contents for one result.
pub fn format_result(result: &LoopResult) -> String {
    let mut body = String::new();
    for line in &result.instructions {
        body.push_str(line);
        body.push('\n');
    }
    for segment in &result.path {
        // Writing to a String cannot fail.
        let _ = writeln!(body, "{segment}");
    }
    body
}

impl ResultSink for FileSink {
    fn accept(&mut self, result: &LoopResult) -> Result<(), SinkError> {
        let path = self
            .dir
            .join(format!("{}-{}.txt", result.score.value, Uuid::new_v4()));
        fs::write(&path, format_result(result)).map_err(|e| SinkError::Write {
            reason: format!("{}: {e}", path.display()),
        })?;
        tracing::debug!(path = %path.display(), "wrote result");
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_core::{Corner, Quadrant, Segment};
    use labyrinth_route::Score;

    fn result(value: i64) -> LoopResult {
        let hop = Segment::new(
            Corner::new(0, 0).at(Quadrant::SouthEast),
            Corner::new(1, 0).at(Quadrant::SouthWest),
        );
        LoopResult {
            score: Score {
                value,
                length: 2,
                unique: 1,
                ..Score::default()
            },
            instructions: vec!["Start here".to_string(), "Done.".to_string()],
            path: vec![hop, hop.reversed()],
        }
    }

    #[test]
    fn format_lists_directions_then_segments() {
        let text = format_result(&result(3));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Start here");
        assert_eq!(lines[1], "Done.");
        assert_eq!(lines[2], result(3).path[0].to_string());
        assert_eq!(lines[3], result(3).path[1].to_string());
    }

    #[test]
    fn create_makes_nested_directory() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dir = temp.path().join("a").join("b");
        let sink = FileSink::create(&dir).expect("create");
        assert!(dir.is_dir());
        assert_eq!(sink.dir(), dir.as_path());
    }

    #[test]
    fn accept_writes_score_prefixed_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut sink = FileSink::create(temp.path()).expect("create");
        sink.accept(&result(-12)).expect("accept");
        sink.accept(&result(-12)).expect("accept");

        let written = sink.written();
        assert_eq!(written.len(), 2);
        assert_ne!(written[0], written[1]);
        for path in written {
            let name = path.file_name().and_then(|n| n.to_str()).expect("name");
            assert!(name.starts_with("-12-"));
            assert!(name.ends_with(".txt"));
            let uuid = &name["-12-".len()..name.len() - ".txt".len()];
            assert!(Uuid::parse_str(uuid).is_ok());
            let text = fs::read_to_string(path).expect("read");
            assert_eq!(text, format_result(&result(-12)));
        }
    }

    #[test]
    fn accept_into_missing_directory_is_sink_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dir = temp.path().join("gone");
        let mut sink = FileSink::create(&dir).expect("create");
        fs::remove_dir(&dir).expect("remove");
        let err = sink.accept(&result(1)).unwrap_err();
        assert!(matches!(err, SinkError::Write { .. }));
        assert!(sink.written().is_empty());
    }
}
