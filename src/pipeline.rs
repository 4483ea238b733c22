//! Read, classify and emit a stream of log lines
//!
//! Lines are processed strictly one at a time in arrival order. Input bytes
//! are passed through untouched apart from NUL replacement and line ending
//! removal; invalid UTF-8 is decoded lossily for classification only.

use crate::classifier::{Category, LineClassifier};
use crate::error::Result;
use crate::render::ColorWriter;
use serde::Serialize;
use std::io::{BufRead, Write};
use tokio::sync::Mutex;
use tracing::debug;

/// Line counts for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Classified (non-blank) lines
    pub lines: usize,
    pub blank: usize,
    per_category: [usize; 6],
}

impl RunStats {
    pub fn count(&self, category: Category) -> usize {
        self.per_category[category.index()]
    }

    fn record(&mut self, category: Option<Category>) {
        match category {
            Some(category) => {
                self.lines += 1;
                self.per_category[category.index()] += 1;
            }
            None => self.blank += 1,
        }
    }
}

/// Strip the line terminator and replace NUL bytes with spaces.
pub fn normalize_line(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    for byte in buf.iter_mut().filter(|b| **b == 0) {
        *byte = b' ';
    }
}

/// Serializes line output against an out-of-band notice on the same
/// terminal. Each line is written while holding the gate, and once the gate
/// is closed no further line is written.
#[derive(Debug, Default)]
pub struct OutputGate {
    closed: Mutex<bool>,
}

impl OutputGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the gate and run `notice` before releasing it, so the notice
    /// never lands inside a partly written line.
    pub async fn close_with<T>(&self, notice: impl FnOnce() -> T) -> T {
        let mut closed = self.closed.lock().await;
        *closed = true;
        notice()
    }
}

/// Colorize every line of `input` until end of stream.
pub fn run<R, W>(
    input: R,
    writer: &mut ColorWriter<W>,
    classifier: &mut LineClassifier,
) -> Result<RunStats>
where
    R: BufRead,
    W: Write,
{
    run_gated(input, writer, classifier, &OutputGate::new())
}

/// Like [`run`], but stops without writing once `gate` is closed.
///
/// Blocks on the gate, so call it from a blocking thread rather than from
/// inside an async task.
pub fn run_gated<R, W>(
    mut input: R,
    writer: &mut ColorWriter<W>,
    classifier: &mut LineClassifier,
    gate: &OutputGate,
) -> Result<RunStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = RunStats::default();
    let mut buf = Vec::with_capacity(256);

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        normalize_line(&mut buf);

        let text = String::from_utf8_lossy(&buf);
        let category = classifier.classify(&text);

        let closed = gate.closed.blocking_lock();
        if *closed {
            debug!("Output gate closed after {} lines", stats.lines + stats.blank);
            return Ok(stats);
        }
        match category {
            Some(category) => writer.write_line(&buf, category)?,
            None => writer.write_blank()?,
        }
        writer.flush()?;
        drop(closed);
        stats.record(category);
    }

    writer.finish()?;

    debug!(
        "Processed {} lines ({} blank): info={} warning={} debug={} error={} nucleus={} other={}",
        stats.lines,
        stats.blank,
        stats.count(Category::Info),
        stats.count(Category::Warning),
        stats.count(Category::Debug),
        stats.count(Category::Error),
        stats.count(Category::Nucleus),
        stats.count(Category::Other),
    );
    debug!("Identified server: {:?}", classifier.server());

    Ok(stats)
}
