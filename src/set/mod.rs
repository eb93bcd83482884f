//! Suffix set: rule storage and name matching.

mod iter;
mod text;

pub use iter::MatchIter;

use ahash::AHashMap;

use crate::error::Error;
use crate::{Mode, Result};

/// Per-suffix state.
///
/// `mode` says which names the suffix itself matches; `has_descendant` marks
/// suffixes that some subdomain-capable rule lies strictly below, so the
/// match walk knows it may keep descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) mode: Mode,
    pub(crate) has_descendant: bool,
}

/// A matched suffix, borrowed from the queried name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match<'a> {
    /// The matching suffix.
    pub suffix: &'a str,
    /// True if the whole name matched an exact rule, false for a
    /// subdomain rule on one of its ancestors.
    pub exact: bool,
}

impl Match<'_> {
    /// Owned key identifying the rule that produced this match.
    pub fn to_key(&self) -> RuleKey {
        RuleKey {
            suffix: self.suffix.to_string(),
            exact: self.exact,
        }
    }
}

/// Owned (suffix, exactness) pair identifying one applicable rule.
///
/// Returned by [`SuffixSet::add`] so callers can attach their own data to
/// rules and look it up again from a [`Match`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleKey {
    pub suffix: String,
    pub exact: bool,
}

/// SuffixSet classifies dot-delimited names against a collection of suffix rules.
///
/// # Pattern Formats
/// - `example.com` - matches `example.com` and every name below it
/// - `example.com.` - matches only `example.com`
/// - `.example.com` - matches names below `example.com`, not `example.com` itself
///
/// Matching is case sensitive and performs no normalization.
///
/// # Examples
/// ```
/// use suffixset::SuffixSet;
///
/// let mut set = SuffixSet::new();
/// set.add("com").unwrap();
/// set.add("blogspot.com").unwrap();
///
/// assert_eq!(set.find("bob.blogspot.com"), Some("blogspot.com"));
/// assert_eq!(set.split("bob.blogspot.com"), ("bob", "blogspot.com"));
/// assert_eq!(set.plus_one("bob.dylan.blogspot.com"), Some("dylan.blogspot.com"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SuffixSet {
    entries: AHashMap<String, Entry>,
    /// Entries with at least one mode bit set
    len: usize,
}

impl SuffixSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from an iterator of patterns.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for pattern in patterns {
            set.add(pattern.as_ref())?;
        }
        Ok(set)
    }

    /// Number of distinct rule suffixes. Ancestor markers are not counted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no rule was added.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Add a pattern to the set.
    ///
    /// Modes accumulate: adding `a.b.` and then `.a.b` is the same as adding
    /// `a.b`. Returns the rule keys the pattern covers, one per mode bit,
    /// including keys that an earlier call already enabled.
    pub fn add(&mut self, pattern: &str) -> Result<Vec<RuleKey>> {
        let (suffix, mode) = Mode::decode(pattern);
        if suffix.is_empty() {
            return Err(Error::InvalidPattern(pattern.to_string()));
        }

        let entry = self.entries.entry(suffix.to_string()).or_default();
        if entry.mode.is_empty() {
            self.len += 1;
        }
        entry.mode |= mode;

        // Exact rules are found by full-name lookup and need no ancestors.
        if mode.is_subdomain() {
            self.mark_ancestors(suffix);
        }

        let mut keys = Vec::with_capacity(2);
        if mode.is_exact() {
            keys.push(RuleKey {
                suffix: suffix.to_string(),
                exact: true,
            });
        }
        if mode.is_subdomain() {
            keys.push(RuleKey {
                suffix: suffix.to_string(),
                exact: false,
            });
        }
        Ok(keys)
    }

    fn mark_ancestors(&mut self, suffix: &str) {
        let mut rest = suffix;
        while let Some(dot) = rest.find('.') {
            rest = &rest[dot + 1..];
            match self.entries.get_mut(rest) {
                // Everything above an already marked ancestor is marked too
                Some(entry) if entry.has_descendant => break,
                Some(entry) => entry.has_descendant = true,
                None => {
                    self.entries.insert(
                        rest.to_string(),
                        Entry {
                            mode: Mode::empty(),
                            has_descendant: true,
                        },
                    );
                }
            }
        }
    }

    pub(crate) fn entry(&self, suffix: &str) -> Option<&Entry> {
        self.entries.get(suffix)
    }

    /// Mode stored for `suffix`, empty if it carries no rule.
    pub fn mode_of(&self, suffix: &str) -> Mode {
        self.entry(suffix).map(|e| e.mode).unwrap_or_default()
    }

    /// Iterate stored rules in no particular order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, Mode)> + '_ {
        self.entries
            .iter()
            .filter(|(_, e)| !e.mode.is_empty())
            .map(|(s, e)| (s.as_str(), e.mode))
    }

    /// All suffixes of `name` matching some rule, most specific first.
    ///
    /// An exact hit on `name` itself comes before any subdomain hit. The
    /// sequence is lazy; stop pulling once satisfied.
    pub fn match_all<'s, 'n>(&'s self, name: &'n str) -> MatchIter<'s, 'n> {
        MatchIter::new(self, name)
    }

    /// The most specific matching suffix of `name`.
    pub fn find<'n>(&self, name: &'n str) -> Option<&'n str> {
        self.match_all(name).next().map(|m| m.suffix)
    }

    /// True if any suffix of `name` matches.
    pub fn matches(&self, name: &str) -> bool {
        self.match_all(name).next().is_some()
    }

    /// True if `name` itself was added with the exact bit.
    pub fn matches_exact(&self, name: &str) -> bool {
        self.mode_of(name).is_exact()
    }

    /// Split `name` into the labels before its matching suffix and the suffix.
    ///
    /// Both parts are empty when nothing matches; the prefix is empty when
    /// the whole name matched.
    pub fn split<'n>(&self, name: &'n str) -> (&'n str, &'n str) {
        match self.find(name) {
            None => ("", ""),
            Some(suffix) if suffix.len() == name.len() => ("", suffix),
            Some(suffix) => {
                // Subdomain hits always start right after a dot
                let dot = name.len() - suffix.len() - 1;
                (&name[..dot], suffix)
            }
        }
    }

    /// The matching suffix plus one more label, like an eTLD+1.
    ///
    /// `None` when nothing matches or no further label precedes the suffix.
    pub fn plus_one<'n>(&self, name: &'n str) -> Option<&'n str> {
        let (prefix, suffix) = self.split(name);
        if suffix.is_empty() {
            return None;
        }
        let start = prefix.rfind('.').map_or(0, |dot| dot + 1);
        if start == prefix.len() {
            return None;
        }
        Some(&name[start..])
    }
}
