//! Suffix rules carrying caller data.

use ahash::AHashMap;

use crate::{Match, Result, RuleKey, SuffixSet};

/// SuffixMap associates a value with every rule of a [`SuffixSet`].
///
/// Values are keyed by rule identity, so `example.com.` and `.example.com`
/// can carry different values even though they share a suffix.
///
/// # Examples
/// ```
/// use suffixset::SuffixMap;
///
/// let mut map = SuffixMap::new();
/// map.insert("example.com.", "apex").unwrap();
/// map.insert(".example.com", "child").unwrap();
///
/// assert_eq!(map.get("example.com").map(|(_, v)| *v), Some("apex"));
/// assert_eq!(map.get("www.example.com").map(|(_, v)| *v), Some("child"));
/// ```
#[derive(Debug, Clone)]
pub struct SuffixMap<V> {
    set: SuffixSet,
    exact: AHashMap<String, V>,
    subdomain: AHashMap<String, V>,
}

impl<V> Default for SuffixMap<V> {
    fn default() -> Self {
        Self {
            set: SuffixSet::new(),
            exact: AHashMap::new(),
            subdomain: AHashMap::new(),
        }
    }
}

impl<V: Clone> SuffixMap<V> {
    /// Add `pattern` and attach `value` to every rule it covers.
    ///
    /// A later insert overwrites the value of any rule it shares with an
    /// earlier one.
    pub fn insert(&mut self, pattern: &str, value: V) -> Result<()> {
        for RuleKey { suffix, exact } in self.set.add(pattern)? {
            let values = if exact {
                &mut self.exact
            } else {
                &mut self.subdomain
            };
            values.insert(suffix, value.clone());
        }
        Ok(())
    }
}

impl<V> SuffixMap<V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct rule suffixes.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// True if nothing was inserted.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Value attached to the rule behind `m`.
    pub fn value_of(&self, m: &Match<'_>) -> Option<&V> {
        if m.exact {
            self.exact.get(m.suffix)
        } else {
            self.subdomain.get(m.suffix)
        }
    }

    /// The most specific match for `name` with its value.
    pub fn get<'n>(&self, name: &'n str) -> Option<(Match<'n>, &V)> {
        self.set
            .match_all(name)
            .find_map(|m| self.value_of(&m).map(|v| (m, v)))
    }

    /// Every match for `name` with its value, most specific first.
    pub fn get_all<'s, 'n>(
        &'s self,
        name: &'n str,
    ) -> impl Iterator<Item = (Match<'n>, &'s V)> {
        self.set
            .match_all(name)
            .filter_map(move |m| self.value_of(&m).map(|v| (m, v)))
    }
}
