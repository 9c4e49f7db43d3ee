//! Interactive prompts for values not given on the command line.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Print `label`, read one line, and parse it as an integer.
pub fn ask_integer<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<i64> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("unexpected end of input while reading: {}", label.trim_end());
    }
    let trimmed = line.trim();
    trimmed
        .parse()
        .with_context(|| format!("invalid input: {trimmed:?} is not an integer"))
}

/// Ask a yes/no question answered with `1` or `0`.
pub fn ask_flag<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<bool> {
    match ask_integer(input, output, label)? {
        0 => Ok(false),
        1 => Ok(true),
        other => bail!("invalid choice {other}: must be 0 or 1"),
    }
}
