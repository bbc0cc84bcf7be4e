//! CLI binary smoke tests using assert_cmd.
//!
//! These tests run the compiled `spamsift` binary against small CSV files to
//! check argument parsing, error exits and a full train / evaluate / prompt run.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("spamsift").unwrap()
}

const TRAIN_CSV: &str = "\
text,spam
\"Subject: win cash prize now, click http://win.example.com\",1
\"Subject: cheap pills online, free shipping, order today\",1
\"Subject: claim your free prize money, limited offer\",1
\"Subject: lottery winner! send bank details to claim cash\",1
\"Subject: exclusive offer cheap watches free gift\",1
\"Subject: earn money fast from home, free bonus cash\",1
\"Subject: meeting agenda for tomorrow's project review\",0
\"Subject: quarterly report draft attached for review\",0
\"Subject: lunch with the team on friday?\",0
\"Subject: project schedule update and meeting notes\",0
\"Subject: please review the attached budget report\",0
\"Subject: team meeting moved to thursday afternoon\",0
";

const EVAL_CSV: &str = "\
,label,text,label_num
0,spam,\"Subject: free cash prize, claim now\",1
1,spam,\"Subject: cheap offer, free gift for the winner\",1
2,ham,\"Subject: project meeting notes and report\",0
3,ham,\"Subject: review the budget before the team meeting\",0
";

fn write_datasets(dir: &Path, train: &str, eval: &str) -> (PathBuf, PathBuf) {
    let train_path = dir.join("emails.csv");
    let eval_path = dir.join("spam_ham_dataset.csv");
    std::fs::write(&train_path, train).unwrap();
    std::fs::write(&eval_path, eval).unwrap();
    (train_path, eval_path)
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--train"))
        .stdout(predicate::str::contains("--no-interactive"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("spamsift"));
}

#[test]
fn unknown_model_is_rejected() {
    cmd().args(["--model", "svm"]).assert().failure();
}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

#[test]
fn missing_default_datasets_fail() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .current_dir(dir.path())
        .arg("--no-interactive")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Accuracy").not());
}

#[test]
fn malformed_labels_fail() {
    let dir = tempfile::tempdir().unwrap();
    let (train, eval) = write_datasets(dir.path(), "text,spam\nhello,maybe\n", EVAL_CSV);
    cmd()
        .arg("--train")
        .arg(&train)
        .arg("--eval")
        .arg(&eval)
        .arg("--no-interactive")
        .assert()
        .failure();
}

#[test]
fn all_branches_failing_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let (train, eval) = write_datasets(
        dir.path(),
        "text,spam\nwin cash now,1\nfree prize money,1\n",
        EVAL_CSV,
    );
    cmd()
        .arg("--train")
        .arg(&train)
        .arg("--eval")
        .arg(&eval)
        .arg("--no-interactive")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Best model").not());
}

#[test]
fn nonexistent_config_errors() {
    cmd()
        .args(["--config", "/nonexistent/run.json", "--no-interactive"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// Full runs
// ---------------------------------------------------------------------------

#[test]
fn full_run_reports_every_model_then_quits() {
    let dir = tempfile::tempdir().unwrap();
    write_datasets(dir.path(), TRAIN_CSV, EVAL_CSV);

    cmd()
        .current_dir(dir.path())
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Decision Tree Classifier"))
        .stdout(predicate::str::contains("Random Forest Classifier"))
        .stdout(predicate::str::contains("Multinomial Naive Bayes"))
        .stdout(predicate::str::contains("Accuracy"))
        .stdout(predicate::str::contains("Best model"))
        .stdout(predicate::str::contains("Enter your text, Enter quit to quit:"))
        .stdout(predicate::str::contains("Is spam").not());
}

#[test]
fn selected_model_answers_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let (train, eval) = write_datasets(dir.path(), TRAIN_CSV, EVAL_CSV);

    cmd()
        .arg("--train")
        .arg(&train)
        .arg("--eval")
        .arg(&eval)
        .args(["--model", "nb", "--interactive-model", "nb"])
        .write_stdin("free cash prize, claim now\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Prediction (Multinomial Naive Bayes)"))
        .stdout(predicate::str::contains("Is spam: true"))
        .stdout(predicate::str::contains("Decision Tree Classifier").not());
}

#[test]
fn interactive_model_falls_back_to_trained_branch() {
    let dir = tempfile::tempdir().unwrap();
    let (train, eval) = write_datasets(dir.path(), TRAIN_CSV, EVAL_CSV);

    cmd()
        .arg("--train")
        .arg(&train)
        .arg("--eval")
        .arg(&eval)
        .args(["--model", "decision_tree"])
        .write_stdin("team meeting\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Prediction (Decision Tree Classifier)"));
}

#[test]
fn config_file_selects_models() {
    let dir = tempfile::tempdir().unwrap();
    let (train, eval) = write_datasets(dir.path(), TRAIN_CSV, EVAL_CSV);
    let config_path = dir.path().join("run.json");
    let json = serde_json::json!({
        "train_data": train,
        "eval_data": eval,
        "models": [{ "model_type": { "naive_bayes": { "alpha": 1.0 } } }],
        "interactive": false
    });
    std::fs::write(&config_path, json.to_string()).unwrap();

    cmd()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Multinomial Naive Bayes"))
        .stdout(predicate::str::contains("Random Forest Classifier").not())
        .stdout(predicate::str::contains("Enter your text").not());
}

#[test]
fn library_progress_is_logged_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let (train, eval) = write_datasets(dir.path(), TRAIN_CSV, EVAL_CSV);

    cmd()
        .env_remove("SPAMSIFT_LOG")
        .arg("--train")
        .arg(&train)
        .arg("--eval")
        .arg(&eval)
        .args(["--model", "nb", "--no-interactive"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Running Multinomial Naive Bayes"))
        .stderr(predicate::str::contains("Training Multinomial Naive Bayes on 12 emails"));
}
