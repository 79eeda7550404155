//! Output sinks: a buffered file, optionally wrapped in a gzip or zstd encoder.
//!
//! Compression is picked by file extension (.gz/.gzip → gzip, .zst/.zstd →
//! zstd). Encoders must be finished explicitly so their trailers get written;
//! call [`Sink::finish`] rather than dropping the sink.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const BUF_CAPACITY: usize = 128 * 1024;

/// Compression applied to the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Zstd,
}

impl Compression {
    /// Detect compression from the path's extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("gz" | "gzip") => Compression::Gzip,
            Some("zst" | "zstd") => Compression::Zstd,
            _ => Compression::None,
        }
    }
}

/// A writable output file.
pub enum Sink {
    Plain(BufWriter<File>),
    Gzip(flate2::write::GzEncoder<BufWriter<File>>),
    Zstd(zstd::Encoder<'static, BufWriter<File>>),
}

impl Sink {
    /// Create (or truncate) `path` and wrap it for the given compression.
    pub fn create(path: &Path, compression: Compression) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("failed to create output file: {}", path.display()))?;
        let buf = BufWriter::with_capacity(BUF_CAPACITY, file);
        let sink = match compression {
            Compression::None => Sink::Plain(buf),
            Compression::Gzip => Sink::Gzip(flate2::write::GzEncoder::new(
                buf,
                flate2::Compression::default(),
            )),
            Compression::Zstd => Sink::Zstd(
                zstd::Encoder::new(buf, zstd::DEFAULT_COMPRESSION_LEVEL).with_context(|| {
                    format!("failed to initialize zstd encoder for: {}", path.display())
                })?,
            ),
        };
        Ok(sink)
    }

    pub fn compression(&self) -> Compression {
        match self {
            Sink::Plain(_) => Compression::None,
            Sink::Gzip(_) => Compression::Gzip,
            Sink::Zstd(_) => Compression::Zstd,
        }
    }

    /// Write any encoder trailer and flush everything down to the file.
    pub fn finish(self) -> io::Result<()> {
        let mut buf = match self {
            Sink::Plain(buf) => buf,
            Sink::Gzip(enc) => enc.finish()?,
            Sink::Zstd(enc) => enc.finish()?,
        };
        buf.flush()
    }
}

impl Write for Sink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Plain(w) => w.write(data),
            Sink::Gzip(w) => w.write(data),
            Sink::Zstd(w) => w.write(data),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Plain(w) => w.flush(),
            Sink::Gzip(w) => w.flush(),
            Sink::Zstd(w) => w.flush(),
        }
    }
}
