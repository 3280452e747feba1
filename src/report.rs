//! JSON input and output for scoring recitations outside of Rust.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::WerError;
use crate::scoring::wer_to_accuracy;
use crate::types::AlignmentResult;

/// One recitation to score: the verse text and what the reciter said.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WerRequest {
    pub expected: String,
    pub transcribed: String,
}

/// An alignment together with its half-scale accuracy contribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WerReport {
    #[serde(flatten)]
    pub result: AlignmentResult,
    pub accuracy: f64,
}

impl From<AlignmentResult> for WerReport {
    fn from(result: AlignmentResult) -> Self {
        let accuracy = wer_to_accuracy(f64::from(result.wer));
        Self { result, accuracy }
    }
}

/// Parse a JSON array of requests.
pub fn parse_requests(data: &str) -> Result<Vec<WerRequest>, WerError> {
    serde_json::from_str(data).map_err(|e| WerError::json("parse WER requests", e))
}

pub fn read_requests(path: &Path) -> Result<Vec<WerRequest>, WerError> {
    let data =
        std::fs::read_to_string(path).map_err(|e| WerError::io("read WER requests", e))?;
    parse_requests(&data)
}

/// Write `value` as pretty JSON followed by a newline, then flush.
pub fn write_json<W, T>(mut writer: W, value: &T) -> Result<(), WerError>
where
    W: Write,
    T: Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| WerError::json("serialize WER report", e))?;
    writeln!(writer).map_err(|e| WerError::io("write WER report", e))?;
    writer.flush().map_err(|e| WerError::io("flush WER report", e))
}
