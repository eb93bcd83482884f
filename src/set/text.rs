//! Plain-text rule list format.
//!
//! One pattern per line. Blank lines and lines starting with `#` or `//`
//! (after trimming spaces and tabs) are skipped.

use std::io::{BufRead, BufReader, Read, Write};

use super::SuffixSet;
use crate::{Error, Result};

fn trim_line(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
        .trim_matches([' ', '\t'])
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with("//")
}

impl SuffixSet {
    /// Add every pattern read from `reader`.
    ///
    /// Returns the number of bytes consumed. Reading stops at the first IO
    /// error; rules added before it stay in the set. Lines that are not
    /// valid UTF-8 or hold an invalid pattern (such as a lone `.`) are
    /// logged and skipped.
    pub fn read_from<R: Read>(&mut self, reader: R) -> Result<u64> {
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        let mut consumed = 0u64;
        let mut line_no = 0usize;
        let before = self.len();

        loop {
            buf.clear();
            let n = reader.read_until(b'\n', &mut buf)?;
            if n == 0 {
                break;
            }
            consumed += n as u64;
            line_no += 1;

            let Ok(line) = std::str::from_utf8(&buf) else {
                log::warn!("Skipping line {}: not valid UTF-8", line_no);
                continue;
            };
            let pattern = trim_line(line);
            if pattern.is_empty() || is_comment(pattern) {
                continue;
            }

            match self.add(pattern) {
                Ok(_) => {}
                Err(Error::InvalidPattern(p)) => {
                    log::warn!("Skipping invalid pattern {:?} on line {}", p, line_no);
                }
                Err(e) => return Err(e),
            }
        }

        log::debug!(
            "Read {} lines ({} bytes), {} new suffixes",
            line_no,
            consumed,
            self.len() - before
        );
        Ok(consumed)
    }

    /// Write every rule as a pattern line, sorted by the pattern text.
    ///
    /// Ancestor markers are not written. Returns the number of bytes written.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<u64> {
        let mut patterns: Vec<String> = self
            .rules()
            .map(|(suffix, mode)| mode.encode(suffix))
            .collect();
        patterns.sort_unstable();

        let mut written = 0u64;
        for pattern in &patterns {
            writer.write_all(pattern.as_bytes())?;
            writer.write_all(b"\n")?;
            written += pattern.len() as u64 + 1;
        }
        writer.flush()?;
        Ok(written)
    }
}
