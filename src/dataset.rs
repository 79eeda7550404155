//! Dataset generation: a header row followed by one row per user, each row an
//! email plus `assets` independent balances in `[ASSET_MIN, ASSET_MAX]`.
//!
//! Rows are produced lazily by [`RowGenerator`] and streamed straight into the
//! CSV writer, so memory use does not grow with the user count.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::path::Path;

use crate::email::generate_email;
use crate::output::{Compression, Sink};

pub const EMAIL_COLUMN: &str = "UserEmail";
pub const ASSET_MIN: u32 = 1;
pub const ASSET_MAX: u32 = 10_000;

pub const DEFAULT_USERS: usize = 100;
pub const DEFAULT_ASSETS: usize = 3;
pub const DEFAULT_OUTPUT: &str = "data.csv";

/// Number of user rows and asset columns to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetShape {
    pub users: usize,
    pub assets: usize,
}

impl DatasetShape {
    /// Negative counts are not an error: they produce zero rows / columns.
    /// Counts too large for `usize` saturate.
    pub fn new(users: i64, assets: i64) -> Self {
        Self {
            users: clamp_count(users),
            assets: clamp_count(assets),
        }
    }

    /// Total column count, including the email column.
    pub fn columns(&self) -> usize {
        self.assets + 1
    }
}

fn clamp_count(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}

impl Default for DatasetShape {
    fn default() -> Self {
        Self {
            users: DEFAULT_USERS,
            assets: DEFAULT_ASSETS,
        }
    }
}

/// Settings for [`generate_asset_data`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Field separator byte (`,` unless overridden).
    pub delimiter: u8,
    /// Fixed seed for reproducible output; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            seed: None,
        }
    }
}

/// What a generation run wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Data rows, excluding the header.
    pub rows: usize,
    pub columns: usize,
}

/// One user's email and its asset balances, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub email: String,
    pub assets: Vec<u32>,
}

/// Column names: `UserEmail, Asset_1, ..., Asset_<assets>`.
pub fn header(assets: usize) -> Vec<String> {
    let mut cols = Vec::with_capacity(assets + 1);
    cols.push(EMAIL_COLUMN.to_string());
    cols.extend((1..=assets).map(|i| format!("Asset_{i}")));
    cols
}

/// Draw one asset balance.
pub fn sample_asset<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(ASSET_MIN..=ASSET_MAX)
}

/// Lazily yields `users` rows drawn from a borrowed random source.
pub struct RowGenerator<'a, R: ?Sized> {
    rng: &'a mut R,
    assets: usize,
    remaining: usize,
}

impl<'a, R: Rng + ?Sized> RowGenerator<'a, R> {
    pub fn new(shape: DatasetShape, rng: &'a mut R) -> Self {
        Self {
            rng,
            assets: shape.assets,
            remaining: shape.users,
        }
    }
}

impl<R: Rng + ?Sized> Iterator for RowGenerator<'_, R> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let email = generate_email(&mut *self.rng);
        let assets = (0..self.assets)
            .map(|_| sample_asset(&mut *self.rng))
            .collect();
        Some(Row { email, assets })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng + ?Sized> ExactSizeIterator for RowGenerator<'_, R> {}

/// Serialize the header and `shape.users` generated rows into `out`, fields
/// separated by `delimiter`. All randomness comes from `rng`.
///
/// The writer is flushed but not closed; finishing a compressing sink is up
/// to the caller.
pub fn write_dataset<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    shape: DatasetShape,
    delimiter: u8,
    rng: &mut R,
) -> Result<Summary> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    wtr.write_record(header(shape.assets))?;

    let mut num = itoa::Buffer::new();
    let mut rows = 0;
    for row in RowGenerator::new(shape, rng) {
        wtr.write_field(&row.email)?;
        for value in &row.assets {
            wtr.write_field(num.format(*value))?;
        }
        // An empty record terminates the fields written so far.
        wtr.write_record(None::<&[u8]>)?;
        rows += 1;
    }
    wtr.flush()?;

    Ok(Summary {
        rows,
        columns: shape.columns(),
    })
}

/// Build the random source for a run.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Create (or overwrite) `path` and fill it with a generated dataset.
///
/// A failure part-way through leaves whatever was already written; there is
/// no atomic replace.
pub fn generate_asset_data(
    path: &Path,
    shape: DatasetShape,
    options: &GenerateOptions,
) -> Result<Summary> {
    let compression = Compression::from_path(path);
    tracing::info!(
        users = shape.users,
        assets = shape.assets,
        path = %path.display(),
        "generating dataset"
    );
    tracing::debug!(
        ?compression,
        seed = ?options.seed,
        delimiter = %(options.delimiter as char),
        "output settings"
    );

    let mut sink = Sink::create(path, compression)?;
    let mut rng = make_rng(options.seed);
    let summary = write_dataset(&mut sink, shape, options.delimiter, &mut rng)
        .with_context(|| format!("failed to write dataset: {}", path.display()))?;
    sink.finish()
        .with_context(|| format!("failed to finish output file: {}", path.display()))?;

    tracing::info!(
        rows = summary.rows,
        columns = summary.columns,
        "dataset written"
    );
    Ok(summary)
}
