//! Append-only frame log and its replay reader.
//!
//! The canonical on-disk form is a magic-prefixed stream of u32-LE
//! length-framed bincode records, which round-trips topic and payload bytes
//! exactly. Two older text encodings are still readable: one frame per line
//! as `unixtime,topic_b64,payload_b64`, and the oldest logs as a bare base64
//! payload per line. The reader sniffs the magic and falls back to
//! line-oriented parsing, so old logs stay replayable.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Lines, Read, Write};
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use parking_lot::Mutex;

/// First bytes of a canonical log: format name plus a version byte.
pub const FRAME_LOG_MAGIC: [u8; 8] = *b"MWLOG\x01\0\0";

/// Framing guard against a corrupted length prefix.
const MAX_RECORD_LEN: u32 = 64 * 1024 * 1024;

/// One captured frame: when it arrived, which topic delivered it, and the
/// raw payload bytes.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameRecord {
    pub received_at: i64,
    pub topic: String,
    pub payload: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum FrameLogError {
    #[error("frame log i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt frame record: {0}")]
    Corrupt(#[from] bincode::Error),

    #[error("oversized frame record ({0} bytes)")]
    Oversized(u32),

    #[error("invalid base64 in legacy record: {0}")]
    LegacyBase64(#[from] base64::DecodeError),
}

/// Append-only writer in the canonical framing.
///
/// Holds its own mutex over the file handle; the store locks are never
/// taken while this one is held.
pub struct FrameLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl FrameLog {
    /// Open (creating if needed) a log for appending. A brand-new file gets
    /// the magic header; an existing one is appended to as-is.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, FrameLogError> {
        let path = path.as_ref().to_path_buf();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        if file.metadata()?.len() == 0 {
            file.write_all(&FRAME_LOG_MAGIC)?;
        }
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one frame, stamped with the current wall clock.
    pub fn append(&self, topic: &str, payload: &[u8]) -> Result<(), FrameLogError> {
        let record = FrameRecord {
            received_at: chrono::Utc::now().timestamp(),
            topic: topic.to_string(),
            payload: payload.to_vec(),
        };
        self.append_record(&record)
    }

    pub fn append_record(&self, record: &FrameRecord) -> Result<(), FrameLogError> {
        let encoded = bincode::serialize(record)?;
        let mut file = self.file.lock();
        file.write_all(&(encoded.len() as u32).to_le_bytes())?;
        file.write_all(&encoded)?;
        Ok(())
    }
}

#[derive(Debug)]
enum ReaderFormat {
    Framed(BufReader<File>),
    Lines(Lines<BufReader<File>>),
}

/// Sequential reader over a frame log in original write order.
///
/// Yields one `Result` per record: a corrupt legacy line or an undecodable
/// framed record is an item-level error and iteration continues. A short
/// read or oversized length prefix loses the framing, so those end the
/// stream after the error item.
#[derive(Debug)]
pub struct FrameLogReader {
    format: ReaderFormat,
    done: bool,
}

impl FrameLogReader {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, FrameLogError> {
        let mut file = File::open(path.as_ref())?;

        let mut magic = [0u8; FRAME_LOG_MAGIC.len()];
        let mut read = 0;
        while read < magic.len() {
            match file.read(&mut magic[read..])? {
                0 => break,
                n => read += n,
            }
        }

        let format = if read == magic.len() && magic == FRAME_LOG_MAGIC {
            ReaderFormat::Framed(BufReader::new(file))
        } else {
            // No magic: a legacy text log. Start over from the first byte.
            let file = File::open(path.as_ref())?;
            ReaderFormat::Lines(BufReader::new(file).lines())
        };

        Ok(Self {
            format,
            done: false,
        })
    }

    fn next_framed(reader: &mut BufReader<File>) -> Option<Result<FrameRecord, FrameLogError>> {
        let mut len_bytes = [0u8; 4];
        match reader.read_exact(&mut len_bytes) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => return None,
            Err(err) => return Some(Err(err.into())),
        }

        let len = u32::from_le_bytes(len_bytes);
        if len > MAX_RECORD_LEN {
            return Some(Err(FrameLogError::Oversized(len)));
        }

        let mut buf = vec![0u8; len as usize];
        if let Err(err) = reader.read_exact(&mut buf) {
            return Some(Err(err.into()));
        }

        Some(bincode::deserialize(&buf).map_err(FrameLogError::from))
    }

    fn parse_legacy_line(line: &str) -> Result<FrameRecord, FrameLogError> {
        let line = line.trim_end_matches('\r');
        match line.rsplit_once(',') {
            Some((prefix, payload_b64)) => {
                // Only the segment after the last comma is trusted as the
                // payload; older writers varied in what came before it.
                let payload = BASE64.decode(payload_b64.trim())?;
                let (received_at, topic) = match prefix.split_once(',') {
                    Some((ts, topic_b64)) => {
                        let topic = BASE64
                            .decode(topic_b64)
                            .ok()
                            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                            .unwrap_or_default();
                        (ts.trim().parse().unwrap_or(0), topic)
                    }
                    None => (prefix.trim().parse().unwrap_or(0), String::new()),
                };
                Ok(FrameRecord {
                    received_at,
                    topic,
                    payload,
                })
            }
            None => Ok(FrameRecord {
                received_at: 0,
                topic: String::new(),
                payload: BASE64.decode(line.trim())?,
            }),
        }
    }
}

impl Iterator for FrameLogReader {
    type Item = Result<FrameRecord, FrameLogError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match &mut self.format {
            ReaderFormat::Framed(reader) => {
                let item = Self::next_framed(reader);
                if matches!(
                    item,
                    Some(Err(FrameLogError::Io(_))) | Some(Err(FrameLogError::Oversized(_)))
                ) {
                    // Framing is unrecoverable once a prefix is bad.
                    self.done = true;
                }
                item
            }
            ReaderFormat::Lines(lines) => match lines.next()? {
                Ok(line) => Some(Self::parse_legacy_line(&line)),
                Err(err) => {
                    self.done = true;
                    Some(Err(err.into()))
                }
            },
        }
    }
}
