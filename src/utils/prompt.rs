use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stderr and read the answer from stdin.
/// Anything but `y`/`yes` declines.
pub(crate) fn confirm(question: &str, assume_yes: bool) -> bool {
    if assume_yes {
        return true;
    }
    eprint!("{question} [y/N] ");
    let _ = io::stderr().flush();
    read_answer(&mut io::stdin().lock())
}

fn read_answer(input: &mut impl BufRead) -> bool {
    let mut line = String::new();
    if input.read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
