//! Confirmation prompts

use std::io::Write;

/// Ask a yes/no question on the terminal. `assume_yes` (the `--yes`
/// flag) skips the prompt.
pub fn confirm(question: &str, assume_yes: bool) -> std::io::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "т" | "так"
    )
}
