//! Prompted line input.

use std::io::{self, BufRead, Write};

/// Source of prompted input lines.
pub trait LineReader {
    /// Show `prompt` and read one line without its trailing newline.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Blocking reader over process stdin. Prompts go to stderr so stdout only
/// carries order dumps.
#[derive(Debug, Default)]
pub struct StdinReader {
    color: bool,
}

impl StdinReader {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl LineReader for StdinReader {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let stdin = io::stdin();
        read_prompted_line(&mut stdin.lock(), &mut io::stderr(), self.color, prompt)
    }
}

fn read_prompted_line<R, W>(
    input: &mut R,
    prompt_out: &mut W,
    color: bool,
    prompt: &str,
) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    if color {
        use crossterm::style::Stylize;
        write!(prompt_out, "{}", prompt.with(super::settings::COLOR_PROMPT))?;
    } else {
        write!(prompt_out, "{prompt}")?;
    }
    prompt_out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(prompt_out)?;
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
