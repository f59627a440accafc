//! Console dialogue around a cipher: read an operation, read a text, print
//! the result or the engine's error message, repeat until told to stop.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::cipher::Cipher;

/// Outcome counters for one session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub completed: usize,
    pub rejected: usize,
}

/// Reads one line without its terminator. `None` at end of input.
///
/// Invalid UTF-8 becomes U+FFFD, which the engine then rejects like any
/// other foreign character.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    if input.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&bytes);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn prompt<W: Write>(output: &mut W, text: &str) -> io::Result<()> {
    write!(output, "{text}")?;
    output.flush()
}

/// Asks for a keyword until one is accepted. `None` if input runs out first.
pub fn read_cipher<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Cipher>> {
    loop {
        prompt(output, "Cipher key: ")?;
        let Some(keyword) = read_line(input)? else {
            return Ok(None);
        };
        match Cipher::new(&keyword) {
            Ok(cipher) => return Ok(Some(cipher)),
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}

/// Runs the operation loop: `0` exits, `1` encrypts, `2` decrypts.
pub fn run_session<R: BufRead, W: Write>(
    cipher: &Cipher,
    input: &mut R,
    output: &mut W,
) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    writeln!(output, "Cipher ready. Key length: {}", cipher.key_len())?;

    loop {
        prompt(output, "Operation (0 - exit, 1 - encrypt, 2 - decrypt): ")?;
        let Some(operation) = read_line(input)? else {
            break;
        };
        let encrypting = match operation.trim() {
            "0" => break,
            "1" => true,
            "2" => false,
            _ => {
                writeln!(output, "Illegal operation")?;
                continue;
            }
        };

        prompt(output, "Text: ")?;
        let Some(text) = read_line(input)? else {
            break;
        };
        let result = if encrypting {
            cipher.encrypt(&text)
        } else {
            cipher.decrypt(&text)
        };
        match result {
            Ok(transformed) => {
                let label = if encrypting { "Encrypted" } else { "Decrypted" };
                writeln!(output, "{label} text: {transformed}")?;
                summary.completed += 1;
            }
            Err(err) => {
                debug!(kind = ?err.kind(), "operation rejected");
                writeln!(output, "{err}")?;
                summary.rejected += 1;
            }
        }
    }

    Ok(summary)
}
