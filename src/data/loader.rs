use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::model::{LabeledPoints, TrainingLog, TrainingRecord};
use crate::error::DataFormatError;

// ---------------------------------------------------------------------------
// Fixed artifact filenames
// ---------------------------------------------------------------------------

/// Point table written by the training process: 3 rows (x, y, z), N columns.
pub const POINT_TABLE: &str = "x_train.csv";
/// Label table: N values in {0, 1}, written as a single row.
pub const LABEL_TABLE: &str = "y_train.csv";
/// Per-epoch log with header `epoch,loss,train_accuracy`.
pub const TRAINING_LOG: &str = "training_log.csv";

const LOG_COLUMNS: [&str; 3] = ["epoch", "loss", "train_accuracy"];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the labeled point set from its two headerless CSV files.
pub fn load_points(
    point_path: &Path,
    label_path: &Path,
) -> Result<LabeledPoints, DataFormatError> {
    parse_points(open(point_path)?, open(label_path)?)
}

/// Load a training log. Dispatch by extension:
/// * `.csv`  – header row with at least the three required columns
/// * `.json` – records-oriented array, `[{ "epoch": .., "loss": .., ... }]`
pub fn load_training_log(path: &Path) -> Result<TrainingLog, DataFormatError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => parse_log_csv(open(path)?),
        "json" => parse_log_json(open(path)?),
        other => Err(DataFormatError::UnsupportedExtension(other.to_string())),
    }
}

fn open(path: &Path) -> Result<File, DataFormatError> {
    File::open(path).map_err(|source| DataFormatError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Point / label tables (headerless CSV)
// ---------------------------------------------------------------------------

/// Parse the point and label tables from raw readers.
///
/// The point table must have exactly 3 equal-length rows. The label table is
/// flattened in row-major order, so a 1×N row and an N×1 column load the
/// same way; its flattened length must equal the point count.
pub fn parse_points<R: Read, S: Read>(
    points: R,
    labels: S,
) -> Result<LabeledPoints, DataFormatError> {
    let rows = parse_numeric_rows(points)?;
    if rows.len() != 3 {
        return Err(DataFormatError::PointRows { found: rows.len() });
    }
    let mut rows = rows.into_iter();
    let (x, y, z) = (
        rows.next().unwrap(),
        rows.next().unwrap(),
        rows.next().unwrap(),
    );

    let labels: Vec<f64> = parse_numeric_rows(labels)?.into_iter().flatten().collect();
    if labels.len() != x.len() {
        return Err(DataFormatError::LabelCount {
            points: x.len(),
            labels: labels.len(),
        });
    }

    Ok(LabeledPoints { x, y, z, labels })
}

/// Read a headerless CSV into rows of `f64`. Rows of unequal length surface
/// as a CSV error from the reader itself.
fn parse_numeric_rows<R: Read>(rdr: R) -> Result<Vec<Vec<f64>>, DataFormatError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(false).from_reader(rdr);

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let row: Vec<f64> = record
            .iter()
            .enumerate()
            .map(|(col, tok)| {
                tok.trim()
                    .parse::<f64>()
                    .map_err(|_| DataFormatError::NotANumber {
                        row: row_no,
                        col,
                        token: tok.to_string(),
                    })
            })
            .collect::<Result<_, _>>()?;
        rows.push(row);
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Training log
// ---------------------------------------------------------------------------

fn parse_log_csv<R: Read>(rdr: R) -> Result<TrainingLog, DataFormatError> {
    let mut reader = csv::Reader::from_reader(rdr);

    let headers = reader.headers()?.clone();
    for col in LOG_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(DataFormatError::MissingColumn(col));
        }
    }

    let records: Vec<TrainingRecord> = reader
        .deserialize()
        .collect::<Result<_, csv::Error>>()?;

    log::debug!("parsed {} training log rows", records.len());
    Ok(TrainingLog::from_records(records))
}

fn parse_log_json<R: Read>(rdr: R) -> Result<TrainingLog, DataFormatError> {
    let records: Vec<TrainingRecord> = serde_json::from_reader(rdr)?;
    Ok(TrainingLog::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_point_and_label_tables() {
        let pts = parse_points(&b"0,10\n0,10\n0,10\n"[..], &b"0,1\n"[..]).unwrap();
        assert_eq!(pts.len(), 2);
        assert_eq!(pts.point(0), [0.0, 0.0, 0.0]);
        assert_eq!(pts.point(1), [10.0, 10.0, 10.0]);
        assert_eq!(pts.labels, vec![0.0, 1.0]);
    }

    #[test]
    fn label_column_flattens_like_a_row() {
        let row = parse_points(&b"1,2\n3,4\n5,6\n"[..], &b"0,1\n"[..]).unwrap();
        let col = parse_points(&b"1,2\n3,4\n5,6\n"[..], &b"0\n1\n"[..]).unwrap();
        assert_eq!(row, col);
    }

    #[test]
    fn rejects_wrong_row_count() {
        let err = parse_points(&b"1,2\n3,4\n"[..], &b"0,1\n"[..]).unwrap_err();
        assert!(matches!(err, DataFormatError::PointRows { found: 2 }));
    }

    #[test]
    fn rejects_label_count_mismatch() {
        let err = parse_points(&b"1,2\n3,4\n5,6\n"[..], &b"0,1,1\n"[..]).unwrap_err();
        assert!(matches!(
            err,
            DataFormatError::LabelCount { points: 2, labels: 3 }
        ));
    }

    #[test]
    fn rejects_non_numeric_cell() {
        let err = parse_points(&b"1,abc\n3,4\n5,6\n"[..], &b"0,1\n"[..]).unwrap_err();
        assert!(matches!(
            err,
            DataFormatError::NotANumber { row: 0, col: 1, .. }
        ));
    }

    #[test]
    fn log_rows_load_in_file_order() {
        let csv = b"epoch,loss,train_accuracy\n0,1.0,0.5\n1,0.8,0.6\n";
        let log = parse_log_csv(&csv[..]).unwrap();
        assert_eq!(log.epochs, vec![0.0, 1.0]);
        assert_eq!(log.loss, vec![1.0, 0.8]);
        assert_eq!(log.accuracy, vec![0.5, 0.6]);
    }

    #[test]
    fn log_ignores_extra_columns() {
        let csv = b"epoch,loss,train_accuracy,lr\n1,0.9,0.7,0.01\n";
        let log = parse_log_csv(&csv[..]).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.accuracy, vec![0.7]);
    }

    #[test]
    fn log_missing_column_is_rejected() {
        let csv = b"epoch,loss\n0,1.0\n";
        let err = parse_log_csv(&csv[..]).unwrap_err();
        assert!(matches!(
            err,
            DataFormatError::MissingColumn("train_accuracy")
        ));
    }

    #[test]
    fn json_log_loads_records() {
        let json = br#"[
            {"epoch": 0, "loss": 1.0, "train_accuracy": 0.5},
            {"epoch": 1, "loss": 0.8, "train_accuracy": 0.6}
        ]"#;
        let log = parse_log_json(&json[..]).unwrap();
        assert_eq!(log.loss, vec![1.0, 0.8]);
        assert_eq!(log.accuracy, vec![0.5, 0.6]);
    }

    #[test]
    fn unknown_log_extension_is_rejected() {
        let err = load_training_log(Path::new("training_log.txt")).unwrap_err();
        assert!(matches!(err, DataFormatError::UnsupportedExtension(_)));
    }
}
