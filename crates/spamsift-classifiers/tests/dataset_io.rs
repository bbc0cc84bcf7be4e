//! Integration tests for the labeled email CSV reader.

use std::io::Write;
use std::path::PathBuf;

use spamsift_classifiers::io::{read_dataset, DatasetReaderConfig};

fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

// ---------------------------------------------------------------------------
// Layouts
// ---------------------------------------------------------------------------

#[test]
fn reads_training_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "emails.csv",
        "text,spam\n\"Subject: win cash now\",1\n\"Subject: lunch, tomorrow?\",0\n",
    );

    let ds = read_dataset(&path, &DatasetReaderConfig::training()).unwrap();
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.labels(), vec![true, false]);
    assert_eq!(ds.emails[1].text, "Subject: lunch, tomorrow?");
    assert_eq!(ds.label_column, "spam");
    assert_eq!(ds.n_columns, 2);
}

#[test]
fn reads_evaluation_layout_and_ignores_extra_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "spam_ham_dataset.csv",
        ",label,text,label_num\n\
         605,ham,\"Subject: enron methanol\nmeter 988291\",0\n\
         2349,spam,\"Subject: photoshop , windows , office . cheap\",1\n",
    );

    let ds = read_dataset(&path, &DatasetReaderConfig::evaluation()).unwrap();
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.class_counts(), (1, 1));
    assert!(ds.emails[0].text.contains('\n'), "multi-line text must survive");
    assert_eq!(ds.n_columns, 4);
}

#[test]
fn label_columns_are_not_interchangeable() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "emails.csv", "text,spam\nhello,0\n");

    let err = read_dataset(&path, &DatasetReaderConfig::evaluation()).unwrap_err();
    assert!(format!("{:#}", err).contains("label_num"), "{:#}", err);
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn missing_file_is_an_error() {
    let err = read_dataset("/nonexistent/emails.csv", &DatasetReaderConfig::training())
        .unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/emails.csv"));
}

#[test]
fn non_binary_label_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "emails.csv", "text,spam\nhello,0\nbuy now,2\n");

    let err = read_dataset(&path, &DatasetReaderConfig::training()).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("row 2"), "{}", message);
}

#[test]
fn missing_text_column_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "emails.csv", "body,spam\nhello,0\n");

    assert!(read_dataset(&path, &DatasetReaderConfig::training()).is_err());
}

#[test]
fn ragged_row_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "emails.csv", "text,spam\nhello,0,extra\n");

    assert!(read_dataset(&path, &DatasetReaderConfig::training()).is_err());
}

#[test]
fn header_only_file_is_empty_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "emails.csv", "text,spam\n");

    let ds = read_dataset(&path, &DatasetReaderConfig::training()).unwrap();
    assert!(ds.is_empty());
}
