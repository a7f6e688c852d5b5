use std::collections::VecDeque;
use std::io::{self, Write};

/// Source of line-oriented console input
pub trait Prompt {
    /// Read one line, trimmed. End of input is `UnexpectedEof`.
    fn read_line(&mut self) -> io::Result<String>;

    /// Read a secret; echoes like a normal line unless overridden
    fn read_password(&mut self) -> io::Result<String> {
        self.read_line()
    }
}

/// Interactive terminal input; passwords are read without echo
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn read_line(&mut self) -> io::Result<String> {
        read_line()
    }

    fn read_password(&mut self) -> io::Result<String> {
        rpassword::read_password()
    }
}

/// Pre-recorded input lines, consumed in order
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    lines: VecDeque<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self) -> io::Result<String> {
        self.lines
            .pop_front()
            .map(|line| line.trim().to_string())
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more input"))
    }
}

/// Helper function to read a line from stdin
pub fn read_line() -> io::Result<String> {
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
    }
    Ok(input.trim().to_string())
}

/// Print a label without a newline and read the answer
pub fn ask(prompt: &mut dyn Prompt, label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    prompt.read_line()
}

/// Like `ask`, but reads the answer as a password
pub fn ask_password(prompt: &mut dyn Prompt, label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    prompt.read_password()
}

/// Ask a yes/no question; only "yes" (any case) confirms
pub fn confirm(prompt: &mut dyn Prompt, question: &str) -> io::Result<bool> {
    let answer = ask(prompt, &format!("{} (yes/no): ", question))?;
    Ok(answer.eq_ignore_ascii_case("yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_prompt_order_and_eof() {
        let mut prompt = ScriptedPrompt::new(["first", "  second  "]);

        assert_eq!(prompt.read_line().unwrap(), "first");
        assert_eq!(prompt.read_password().unwrap(), "second");
        assert_eq!(prompt.remaining(), 0);

        let err = prompt.read_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_confirmation() {
        let mut prompt = ScriptedPrompt::new(["yes", "YES", "y", "no", ""]);

        assert!(confirm(&mut prompt, "Confirm action?").unwrap());
        assert!(confirm(&mut prompt, "Confirm action?").unwrap());
        assert!(!confirm(&mut prompt, "Confirm action?").unwrap());
        assert!(!confirm(&mut prompt, "Confirm action?").unwrap());
        assert!(!confirm(&mut prompt, "Confirm action?").unwrap());
    }
}
