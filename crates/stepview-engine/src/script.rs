//! Replay scripts: recorded sequence updates fed to the view one frame at a time.
//!
//! A script is a JSON array of frames, each frame being the full step list an
//! external producer sent on one update:
//!
//! ```json
//! [
//!   [{"step_number": 1, "content": "Hello"}],
//!   [{"step_number": 1, "content": "Hello"}, {"step_number": 2, "content": "World"}]
//! ]
//! ```

use crate::models::Sequence;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Failed to read replay script at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse replay script at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid replay script: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplayScript {
    frames: Vec<Sequence>,
}

impl ReplayScript {
    pub fn new(frames: Vec<Sequence>) -> Self {
        Self { frames }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ScriptError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn frames(&self) -> &[Sequence] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Cursor over a [`ReplayScript`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    script: ReplayScript,
    cursor: usize,
}

impl Replay {
    pub fn new(script: ReplayScript) -> Self {
        Self { script, cursor: 0 }
    }

    /// Advance to the next frame, or `None` once every frame has been played.
    pub fn next_frame(&mut self) -> Option<&Sequence> {
        let frame = self.script.frames.get(self.cursor)?;
        self.cursor += 1;
        Some(frame)
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.script.len()
    }

    /// Number of frames played so far.
    pub fn played(&self) -> usize {
        self.cursor
    }

    pub fn total(&self) -> usize {
        self.script.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Step;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const TWO_FRAMES: &str = r#"[
        [{"step_number": 1, "content": "Hello"}],
        [{"step_number": 1, "content": "Hello"}, {"step_number": 2, "content": "World"}]
    ]"#;

    #[test]
    fn test_from_json_reads_frames_in_order() {
        let script = ReplayScript::from_json(TWO_FRAMES).unwrap();

        assert_eq!(script.len(), 2);
        assert_eq!(
            script.frames()[1],
            Sequence::from(vec![Step::new(1, "Hello"), Step::new(2, "World")])
        );
    }

    #[test]
    fn test_from_json_rejects_missing_fields() {
        let result = ReplayScript::from_json(r#"[[{"content": "no number"}]]"#);

        assert!(matches!(result, Err(ScriptError::Json(_))));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("script.json");
        std::fs::write(&path, TWO_FRAMES).unwrap();

        let script = ReplayScript::load(&path).unwrap();

        assert_eq!(script.len(), 2);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let err = ReplayScript::load(&path).unwrap_err();

        assert!(matches!(err, ScriptError::Read { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_load_invalid_json_reports_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "[[{").unwrap();

        let err = ReplayScript::load(&path).unwrap_err();

        assert!(matches!(err, ScriptError::Parse { .. }));
    }

    #[test]
    fn test_replay_walks_every_frame_once() {
        let mut replay = Replay::new(ReplayScript::from_json(TWO_FRAMES).unwrap());

        assert_eq!(replay.next_frame().map(Sequence::len), Some(1));
        assert!(!replay.is_finished());
        assert_eq!(replay.next_frame().map(Sequence::len), Some(2));
        assert!(replay.is_finished());
        assert_eq!(replay.next_frame(), None);
        assert_eq!(replay.played(), 2);
    }

    #[test]
    fn test_empty_script_is_finished_immediately() {
        let mut replay = Replay::new(ReplayScript::default());

        assert!(replay.is_finished());
        assert_eq!(replay.next_frame(), None);
    }
}
