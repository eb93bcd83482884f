//! Line scanners that break input lines into fields.

use std::io::{self, BufRead};

/// LineScanner reads input one line at a time and splits it into fields.
pub trait LineScanner {
    /// Advance to the next line. Returns `false` at end of input.
    fn scan(&mut self) -> io::Result<bool>;

    /// The current line without its terminator.
    fn text(&self) -> &str;

    /// Fields extracted from the current line.
    fn fields(&self) -> Vec<&str>;
}

/// SplitScanner splits lines on a separator string.
pub struct SplitScanner<R> {
    reader: R,
    sep: String,
    buf: Vec<u8>,
    line: String,
}

impl<R: BufRead> SplitScanner<R> {
    /// Create a scanner reading from `reader`. An empty separator means TAB.
    pub fn new(reader: R, sep: &str) -> Self {
        let sep = if sep.is_empty() { "\t" } else { sep };
        Self {
            reader,
            sep: sep.to_string(),
            buf: Vec::new(),
            line: String::new(),
        }
    }
}

impl<R: BufRead> LineScanner for SplitScanner<R> {
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    fn scan(&mut self) -> io::Result<bool> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false);
        }
        if self.buf.ends_with(b"\n") {
            self.buf.pop();
            if self.buf.ends_with(b"\r") {
                self.buf.pop();
            }
        }
        self.line = String::from_utf8_lossy(&self.buf).into_owned();
        Ok(true)
    }

    fn text(&self) -> &str {
        &self.line
    }

    fn fields(&self) -> Vec<&str> {
        self.line.split(self.sep.as_str()).collect()
    }
}

/// SingleFieldScanner wraps a scanner and keeps only one of its fields.
pub struct SingleFieldScanner<S> {
    inner: S,
    index: usize,
}

impl<S: LineScanner> SingleFieldScanner<S> {
    /// Keep field `index` (0-based) of every line scanned by `inner`.
    pub fn new(inner: S, index: usize) -> Self {
        Self { inner, index }
    }
}

impl<S: LineScanner> LineScanner for SingleFieldScanner<S> {
    fn scan(&mut self) -> io::Result<bool> {
        self.inner.scan()
    }

    fn text(&self) -> &str {
        self.inner.text()
    }

    /// Empty when the line has too few fields.
    fn fields(&self) -> Vec<&str> {
        self.inner
            .fields()
            .get(self.index)
            .map(|f| vec![*f])
            .unwrap_or_default()
    }
}
