//! Optional JSON-lines log with one record per tick.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::TickReport;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: u64,
    pub command: String,
    pub outcome: String,
    pub rotation_blocked: bool,
    pub move_blocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub piece: Option<PieceRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRecord {
    pub kind: String,
    pub orientation: usize,
    pub row: i32,
    pub column: i32,
}

impl TickRecord {
    pub fn from_report(tick: u64, report: &TickReport) -> Self {
        Self {
            tick,
            command: report.command.as_str().to_string(),
            outcome: report.outcome.as_str().to_string(),
            rotation_blocked: report.rotation_blocked,
            move_blocked: report.move_blocked,
            piece: report.piece.map(|p| PieceRecord {
                kind: p.kind().as_str().to_string(),
                orientation: p.orientation(),
                row: p.row(),
                column: p.column(),
            }),
        }
    }
}

/// Appends tick records to any writer, one JSON object per line.
pub struct TickLog<W: Write> {
    out: W,
    buf: Vec<u8>,
}

impl TickLog<BufWriter<File>> {
    /// Open (or create) a log file in append mode.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open tick log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TickLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(256),
        }
    }

    pub fn record(&mut self, tick: u64, report: &TickReport) -> Result<()> {
        self.write(&TickRecord::from_report(tick, report))
    }

    pub fn write(&mut self, record: &TickRecord) -> Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, record)?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
