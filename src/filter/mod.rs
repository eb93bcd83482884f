//! Line filter driven by a field matcher.
//!
//! Every input line is split into fields; the first field (left to right)
//! the matcher accepts decides the line. Selected lines are printed whole,
//! as the matching field, or as the matched suffix.

mod config;
mod scanner;

pub use config::{FilterConfig, OutputMode};
pub use scanner::{LineScanner, SingleFieldScanner, SplitScanner};

use std::io::Write;

use crate::{Error, Result, SuffixSet};

/// FieldMatcher decides whether a single field matches.
pub trait FieldMatcher {
    /// The matched part of `field`, or `None` if it does not match.
    fn match_field<'a>(&self, field: &'a str) -> Option<&'a str>;
}

impl<M: FieldMatcher + ?Sized> FieldMatcher for &M {
    fn match_field<'a>(&self, field: &'a str) -> Option<&'a str> {
        (**self).match_field(field)
    }
}

/// Any-suffix matching: yields the most specific matching suffix.
impl FieldMatcher for SuffixSet {
    fn match_field<'a>(&self, field: &'a str) -> Option<&'a str> {
        self.find(field)
    }
}

/// Exact-only matching: a field matches when it was added as an exact rule.
#[derive(Debug, Clone, Copy)]
pub struct ExactNames<'s>(pub &'s SuffixSet);

impl FieldMatcher for ExactNames<'_> {
    fn match_field<'a>(&self, field: &'a str) -> Option<&'a str> {
        self.0.matches_exact(field).then_some(field)
    }
}

/// Filter scans lines and prints the ones selected by its matcher.
pub struct Filter<'m> {
    config: FilterConfig,
    matcher: Option<Box<dyn FieldMatcher + 'm>>,
}

impl<'m> Filter<'m> {
    /// Create a filter with no matcher yet.
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            matcher: None,
        }
    }

    /// Set the field matcher.
    pub fn with_matcher(mut self, matcher: impl FieldMatcher + 'm) -> Self {
        self.matcher = Some(Box::new(matcher));
        self
    }

    /// Scan all input and print selected lines to `out`.
    ///
    /// Returns the number of lines printed. Fails with [`Error::NoMatcher`]
    /// before reading any input if no matcher was set.
    pub fn run<S, W>(&self, scanner: &mut S, out: &mut W) -> Result<u64>
    where
        S: LineScanner + ?Sized,
        W: Write + ?Sized,
    {
        let matcher = self.matcher.as_deref().ok_or(Error::NoMatcher)?;
        let mut printed = 0u64;

        while scanner.scan()? {
            let mut field = "";
            let mut matched = None;
            for f in scanner.fields() {
                field = f;
                if let Some(m) = matcher.match_field(f) {
                    matched = Some(m);
                    break;
                }
            }

            if matched.is_some() == self.config.invert {
                continue;
            }
            match self.config.output {
                OutputMode::Line => writeln!(out, "{}", scanner.text())?,
                OutputMode::Field => writeln!(out, "{}", field)?,
                OutputMode::Suffix => writeln!(out, "{}", matched.unwrap_or(""))?,
            }
            printed += 1;
        }

        Ok(printed)
    }
}
