//! Reboot confirmation flow.

use std::io::{self, BufRead};

use crate::cmd;
use crate::error::SetupError;
use crate::utils::prompt_line;

/// Ask twice before rebooting; "no" at either stage skips without error.
pub fn confirm_and_reboot() -> Result<(), SetupError> {
    let stdin = io::stdin();
    if !confirm_twice(&mut stdin.lock())? {
        println!("Reboot skipped.");
        return Ok(());
    }
    cmd::run("sudo", &["reboot"])
}

fn confirm_twice(input: &mut impl BufRead) -> Result<bool, SetupError> {
    Ok(ask(input, "Do you want to reboot now? (yes/no):")?
        && ask(input, "Are you sure you want to reboot? (yes/no):")?)
}

/// Re-prompts until the answer is yes or no; EOF counts as no.
fn ask(input: &mut impl BufRead, question: &str) -> Result<bool, SetupError> {
    loop {
        let answer = match prompt_line(question, input)? {
            Some(line) => line.to_lowercase(),
            None => return Ok(false),
        };
        match answer.as_str() {
            "yes" | "y" => return Ok(true),
            "no" | "n" => return Ok(false),
            _ => println!("Please answer yes or no."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_invalid_then_no_skips_the_reboot() {
        let mut input = Cursor::new("maybe\nno\n");
        assert!(!confirm_twice(&mut input).unwrap());
    }

    #[test]
    fn test_double_yes_confirms() {
        let mut input = Cursor::new("yes\nyes\n");
        assert!(confirm_twice(&mut input).unwrap());
    }

    #[test]
    fn test_second_thoughts_win() {
        let mut input = Cursor::new("yes\nno\n");
        assert!(!confirm_twice(&mut input).unwrap());
    }

    #[test]
    fn test_eof_counts_as_no() {
        let mut input = Cursor::new("");
        assert!(!confirm_twice(&mut input).unwrap());
    }

    #[test]
    fn test_short_answers_are_accepted() {
        let mut input = Cursor::new("y\ny\n");
        assert!(confirm_twice(&mut input).unwrap());
    }

    #[test]
    fn test_confirmation_consumes_exactly_two_answers() {
        let mut input = Cursor::new("yes\nyes\nno\n");
        assert!(confirm_twice(&mut input).unwrap());
        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "no\n");
    }
}
