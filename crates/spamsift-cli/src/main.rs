use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, ArgAction, Command, ValueHint};
use log::LevelFilter;

use spamsift_classifiers::interactive::run_prompt_loop;
use spamsift_cli::run::input::RunConfig;
use spamsift_cli::run::pipeline::run_all;

const MODEL_NAMES: [&str; 6] = ["decision_tree", "random_forest", "naive_bayes", "dt", "rf", "nb"];

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(
            "SPAMSIFT_LOG",
            "error,spamsift=info,spamsift_cli=info,spamsift_classifiers=info",
        ))
        .init();

    let matches = Command::new("spamsift")
        .version(clap::crate_version!())
        .about("Train, compare and query spam/ham email classifiers")
        .arg(
            Arg::new("train_data")
                .short('t')
                .long("train")
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .help("Training CSV with `text` and `spam` columns [default: emails.csv]")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("eval_data")
                .short('e')
                .long("eval")
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .help(
                    "Evaluation CSV with `text` and `label_num` columns \
                     [default: spam_ham_dataset.csv]",
                )
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON run configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .help("Model to train; repeat to select several. Defaults to all models.")
                .value_parser(MODEL_NAMES)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("interactive_model")
                .long("interactive-model")
                .help("Model answering the interactive prompt [default: naive_bayes]")
                .value_parser(MODEL_NAMES),
        )
        .arg(
            Arg::new("no_interactive")
                .long("no-interactive")
                .help("Exit after the model comparison instead of prompting for text.")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = match RunConfig::from_arguments(matches.get_one::<PathBuf>("config"), &matches) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {:#}", e);
            std::process::exit(1)
        }
    };
    log::debug!(
        "[spamsift] Run config:\n{}",
        serde_json::to_string_pretty(&config).unwrap_or_default()
    );

    let summary = match run_all(&config) {
        Ok(summary) => summary,
        Err(e) => {
            log::error!("Run failed: {:#}", e);
            std::process::exit(1)
        }
    };

    if !config.interactive {
        return Ok(());
    }

    if let Some(detector) = summary.interactive_detector(&config.interactive_model) {
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_prompt_loop(detector, stdin.lock(), stdout.lock())?;
    }
    Ok(())
}
