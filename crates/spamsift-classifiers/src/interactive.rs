//! Blocking prompt loop that classifies one line of user input at a time.
use std::io::{self, BufRead, Write};

use crate::detector::SpamDetector;

pub const PROMPT: &str = "Enter your text, Enter quit to quit: ";
pub const QUIT: &str = "quit";

/// Read lines from `input` until the literal line `quit` or EOF, printing a
/// prediction for every other line. Returns the number of predictions made.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD and the line is
/// classified like any other.
pub fn run_prompt_loop<R: BufRead, W: Write>(
    detector: &SpamDetector,
    mut input: R,
    mut output: W,
) -> io::Result<usize> {
    let mut served = 0;
    let mut buf = Vec::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let text = line.trim_end_matches(['\n', '\r']);
        if text == QUIT {
            break;
        }

        match detector.predict_one(text) {
            Ok(result) => {
                writeln!(output, "\nPrediction ({}):", detector.name())?;
                writeln!(output, "Is spam: {}", result.is_spam)?;
                writeln!(output, "Confidence: {:.4}", result.confidence)?;
                writeln!(output, "Spam probability: {:.4}", result.probability_spam)?;
                writeln!(output, "Ham probability: {:.4}", result.probability_ham)?;
                served += 1;
            }
            Err(e) => {
                log::error!("Prediction failed: {}", e);
                writeln!(output, "Unable to classify this text: {}", e)?;
            }
        }
    }

    log::debug!("Interactive session served {} predictions", served);
    Ok(served)
}
