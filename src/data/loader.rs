use std::path::Path;
use std::sync::{Arc, OnceLock};

use anyhow::{bail, Context};
use arrow::array::{Array, AsArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::error::{DataError, Result};
use super::model::{Story, StoryTable, REQUIRED_FIELDS};

/// The dataset the app looks for in the working directory at startup.
pub const DEFAULT_DATASET: &str = "media_data.csv";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a story dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the five required columns (canonical)
/// * `.json`    – `[{ "Month": ..., "Category": ..., ... }, ...]`
/// * `.parquet` – string columns named like the CSV headers
pub fn load_file(path: &Path) -> Result<StoryTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(DataError::UnsupportedExtension(other.to_string())),
    }
}

static DEFAULT_TABLE: OnceLock<StoryTable> = OnceLock::new();

/// Load `path` at most once per process.
///
/// The first successful load is memoized for the process lifetime; later
/// calls return the same snapshot without re-reading the source. There is no
/// invalidation. A failed load is not cached, so the next call retries.
pub fn load_cached(path: &Path) -> Result<&'static StoryTable> {
    if let Some(table) = DEFAULT_TABLE.get() {
        return Ok(table);
    }
    let table = load_file(path)?;
    Ok(DEFAULT_TABLE.get_or_init(|| table))
}

/// Load [`DEFAULT_DATASET`] through the process-wide cache.
pub fn load_default() -> Result<&'static StoryTable> {
    load_cached(Path::new(DEFAULT_DATASET))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<StoryTable> {
    let file = std::fs::File::open(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    for field in REQUIRED_FIELDS {
        if !headers.iter().any(|h| h == field.header()) {
            return Err(DataError::MissingColumn(field.header()));
        }
    }

    let mut stories = Vec::new();
    for result in reader.deserialize::<Story>() {
        stories.push(result?);
    }

    Ok(StoryTable::from_stories(stories))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "Month": "January",
///     "Category": "Health",
///     "Tonality": "Positive",
///     "Media Type": "TV",
///     "Theme": "Vaccination drive"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<StoryTable> {
    let text = std::fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let stories: Vec<Story> = serde_json::from_str(&text)?;
    Ok(StoryTable::from_stories(stories))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

fn load_parquet(path: &Path) -> Result<StoryTable> {
    let file = std::fs::File::open(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut stories = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let mut columns = Vec::with_capacity(REQUIRED_FIELDS.len());
        for field in REQUIRED_FIELDS {
            let idx = schema
                .index_of(field.header())
                .map_err(|_| DataError::MissingColumn(field.header()))?;
            columns.push(batch.column(idx).clone());
        }

        for row in 0..batch.num_rows() {
            let mut values = Vec::with_capacity(columns.len());
            for (col, field) in columns.iter().zip(REQUIRED_FIELDS) {
                let value = string_at(col, row)
                    .with_context(|| format!("row {row}, column '{}'", field.header()))?;
                values.push(value);
            }
            let mut values = values.into_iter();
            stories.push(Story {
                month: values.next().unwrap_or_default(),
                category: values.next().unwrap_or_default(),
                tonality: values.next().unwrap_or_default(),
                media_type: values.next().unwrap_or_default(),
                theme: values.next().unwrap_or_default(),
            });
        }
    }

    Ok(StoryTable::from_stories(stories))
}

/// Read one cell of a string column.  Nulls read as empty strings.
fn string_at(col: &Arc<dyn Array>, row: usize) -> anyhow::Result<String> {
    if col.is_null(row) {
        return Ok(String::new());
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("expected a string column, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
