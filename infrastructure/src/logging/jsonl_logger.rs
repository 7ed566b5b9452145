//! Play-through transcript in JSON Lines.
//!
//! A transcript file collects every run of the program that pointed at it.
//! Each run opens with a `transcript_opened` line; every later line carries
//! the run id, the game number within that run and a sequence number, so a
//! reader can split the file into individual play-throughs:
//!
//! ```text
//! {"run":"2026-10-19T08:00:00.000Z","game":0,"seq":0,"type":"transcript_opened",...}
//! {"run":"2026-10-19T08:00:00.000Z","game":1,"seq":1,"type":"game_started","player":"Linh",...}
//! {"run":"2026-10-19T08:00:00.000Z","game":1,"seq":2,"type":"answer_submitted",...}
//! ```

use quiz_application::{SessionEvent, SessionLogger};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

const GAME_STARTED: &str = "game_started";
const TRANSCRIPT_OPENED: &str = "transcript_opened";

/// Keys owned by the line framing; payload fields with these names are dropped.
const FRAME_KEYS: [&str; 5] = ["run", "game", "seq", "type", "timestamp"];

/// One transcript line: framing first, then the event's own fields.
#[derive(Serialize)]
struct TranscriptLine<'a> {
    run: &'a str,
    game: u32,
    seq: u64,
    #[serde(rename = "type")]
    kind: &'a str,
    timestamp: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

/// Write position of this run within the file
struct Cursor {
    writer: BufWriter<File>,
    game: u32,
    seq: u64,
}

impl Cursor {
    /// `game_started` opens a new game; everything else belongs to the
    /// current one (0 before the first start).
    fn advance(&mut self, kind: &str) -> (u32, u64) {
        if kind == GAME_STARTED {
            self.game += 1;
        }
        let position = (self.game, self.seq);
        self.seq += 1;
        position
    }
}

/// Appending transcript writer for [`SessionEvent`]s.
pub struct JsonlSessionLogger {
    cursor: Mutex<Cursor>,
    run: String,
    path: PathBuf,
}

impl JsonlSessionLogger {
    /// Open (or create) the transcript and write the run header.
    ///
    /// Creates parent directories if they don't exist. Returns `None` if the
    /// file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create session log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open session log file {}: {}", path.display(), e);
                return None;
            }
        };

        let logger = Self {
            cursor: Mutex::new(Cursor {
                writer: BufWriter::new(file),
                game: 0,
                seq: 0,
            }),
            run: now(),
            path: path.to_path_buf(),
        };
        logger.write(
            TRANSCRIPT_OPENED,
            serde_json::json!({ "app_version": env!("CARGO_PKG_VERSION") }),
        );
        Some(logger)
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Identifier shared by every line this logger writes
    pub fn run_id(&self) -> &str {
        &self.run
    }

    fn write(&self, kind: &str, payload: Value) {
        let Ok(mut cursor) = self.cursor.lock() else {
            return;
        };
        let (game, seq) = cursor.advance(kind);

        let line = TranscriptLine {
            run: &self.run,
            game,
            seq,
            kind,
            timestamp: now(),
            fields: into_fields(payload),
        };

        match serde_json::to_string(&line) {
            Ok(json) => {
                let _ = writeln!(cursor.writer, "{}", json);
                let _ = cursor.writer.flush();
            }
            Err(e) => debug!("Dropping {} transcript line: {}", kind, e),
        }
    }
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

fn into_fields(payload: Value) -> Map<String, Value> {
    match payload {
        Value::Object(mut map) => {
            for key in FRAME_KEYS {
                map.remove(key);
            }
            map
        }
        Value::Null => Map::new(),
        other => Map::from_iter([("data".to_string(), other)]),
    }
}

impl SessionLogger for JsonlSessionLogger {
    fn log(&self, event: SessionEvent) {
        self.write(event.event_type, event.payload);
    }
}

impl Drop for JsonlSessionLogger {
    fn drop(&mut self) {
        if let Ok(mut cursor) = self.cursor.lock() {
            let _ = cursor.writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_transcript_opens_with_run_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.jsonl");
        let logger = JsonlSessionLogger::new(&path).unwrap();
        let run = logger.run_id().to_string();
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["type"], "transcript_opened");
        assert_eq!(lines[0]["run"], run.as_str());
        assert_eq!(lines[0]["game"], 0);
        assert_eq!(lines[0]["seq"], 0);
        assert!(lines[0]["app_version"].is_string());
    }

    #[test]
    fn test_games_are_numbered_within_a_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.jsonl");
        let logger = JsonlSessionLogger::new(&path).unwrap();

        logger.log(SessionEvent::new(
            "game_started",
            json!({"player": "Linh", "class_name": "3A", "question_count": 5}),
        ));
        logger.log(SessionEvent::new(
            "answer_submitted",
            json!({"question_id": 1, "selected": "30 000", "correct": true}),
        ));
        logger.log(SessionEvent::new("game_restarted", json!({})));
        logger.log(SessionEvent::new("game_started", json!({"player": "Nam"})));
        drop(logger);

        let lines = read_lines(&path);
        let framing: Vec<(&str, u64, u64)> = lines
            .iter()
            .map(|l| {
                (
                    l["type"].as_str().unwrap(),
                    l["game"].as_u64().unwrap(),
                    l["seq"].as_u64().unwrap(),
                )
            })
            .collect();
        assert_eq!(
            framing,
            vec![
                ("transcript_opened", 0, 0),
                ("game_started", 1, 1),
                ("answer_submitted", 1, 2),
                ("game_restarted", 1, 3),
                ("game_started", 2, 4),
            ]
        );
        assert_eq!(lines[1]["player"], "Linh");
        assert_eq!(lines[2]["correct"], true);
        assert!(lines.iter().all(|l| l["timestamp"].is_string()));
    }

    #[test]
    fn test_payload_cannot_override_framing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.jsonl");
        let logger = JsonlSessionLogger::new(&path).unwrap();

        logger.log(SessionEvent::new(
            "game_finished",
            json!({"type": "bogus", "seq": 99, "score": 40}),
        ));
        logger.log(SessionEvent::new("time_expired", json!(7)));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[1]["type"], "game_finished");
        assert_eq!(lines[1]["seq"], 1);
        assert_eq!(lines[1]["score"], 40);
        assert_eq!(lines[2]["data"], 7);
    }

    #[test]
    fn test_runs_append_with_distinct_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.jsonl");

        for score in [10, 20] {
            let logger = JsonlSessionLogger::new(&path).unwrap();
            logger.log(SessionEvent::new("game_finished", json!({"score": score})));
        }

        let lines = read_lines(&path);
        let kinds: Vec<&str> = lines.iter().map(|l| l["type"].as_str().unwrap()).collect();
        assert_eq!(
            kinds,
            vec![
                "transcript_opened",
                "game_finished",
                "transcript_opened",
                "game_finished"
            ]
        );
        // Each run restarts its own sequence
        assert_eq!(lines[2]["seq"], 0);
        assert_eq!(lines[3]["score"], 20);
    }

    #[test]
    fn test_jsonl_logger_returns_none_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        assert!(JsonlSessionLogger::new(blocker.join("session.jsonl")).is_none());
    }
}
