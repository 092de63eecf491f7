use anyhow::{anyhow, Result};
use std::io::{BufRead, Write};

/// Ask for a number, re-prompting until a line parses
/// Fails only when the input is exhausted or unreadable
pub fn read_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<f64> {
    writeln!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(anyhow!("Input closed while waiting for: {}", label));
        }

        match line.trim().parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                writeln!(output, "Error: Input is not a number.")?;
                writeln!(output, "{}", label)?;
                output.flush()?;
            }
        }
    }
}
