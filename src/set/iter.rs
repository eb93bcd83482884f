//! Lazy most-specific-first match sequence.

use std::iter::FusedIterator;

use super::{Match, SuffixSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Exact,
    Walk,
    Drain,
    Done,
}

/// Iterator over the rules matching a name, returned by [`SuffixSet::match_all`].
///
/// The exact lookup on the full name happens on the first pull. The ancestor
/// walk runs on the following pull: it starts at the last label and moves
/// toward the full name one label at a time, stopping as soon as a suffix
/// carries no ancestor marker. Hits collected on the way are then yielded
/// from the longest to the shortest.
#[derive(Debug, Clone)]
pub struct MatchIter<'s, 'n> {
    set: &'s SuffixSet,
    name: &'n str,
    stage: Stage,
    /// Start offsets of subdomain hits, shortest suffix first
    hits: Vec<usize>,
    probes: usize,
}

impl<'s, 'n> MatchIter<'s, 'n> {
    pub(super) fn new(set: &'s SuffixSet, name: &'n str) -> Self {
        let stage = if set.is_empty() { Stage::Done } else { Stage::Exact };
        Self {
            set,
            name,
            stage,
            hits: Vec::new(),
            probes: 0,
        }
    }

    /// Number of map lookups performed so far.
    pub fn probes(&self) -> usize {
        self.probes
    }

    fn walk(&mut self) {
        let name = self.name;
        let mut end = name.len();
        while let Some(dot) = name[..end].rfind('.') {
            let start = dot + 1;
            self.probes += 1;
            let Some(entry) = self.set.entry(&name[start..]) else {
                break;
            };
            if entry.mode.is_subdomain() {
                self.hits.push(start);
            }
            if !entry.has_descendant {
                break;
            }
            end = dot;
        }
    }
}

impl<'n> Iterator for MatchIter<'_, 'n> {
    type Item = Match<'n>;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.name;
        loop {
            match self.stage {
                Stage::Exact => {
                    self.stage = Stage::Walk;
                    self.probes += 1;
                    if self.set.mode_of(name).is_exact() {
                        return Some(Match {
                            suffix: name,
                            exact: true,
                        });
                    }
                }
                Stage::Walk => {
                    self.stage = Stage::Drain;
                    self.walk();
                }
                Stage::Drain => match self.hits.pop() {
                    Some(start) => {
                        return Some(Match {
                            suffix: &name[start..],
                            exact: false,
                        })
                    }
                    None => self.stage = Stage::Done,
                },
                Stage::Done => return None,
            }
        }
    }
}

impl FusedIterator for MatchIter<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_stops_without_marker() {
        let mut set = SuffixSet::new();
        set.add("d").unwrap();

        let mut iter = set.match_all("x.y.z");
        assert_eq!(iter.next(), None);
        // Exact lookup plus the single miss on "z"
        assert_eq!(iter.probes(), 2);
    }

    #[test]
    fn test_walk_bounded_by_rule_depth() {
        let mut set = SuffixSet::new();
        set.add("example.com").unwrap();

        let mut iter = set.match_all("a.b.c.d.e.f.example.com");
        assert_eq!(iter.next().map(|m| m.suffix), Some("example.com"));
        // exact, "com", "example.com"
        assert_eq!(iter.probes(), 3);

        let mut iter = set.match_all("a.b.c.d.e.f.other.com");
        assert_eq!(iter.next(), None);
        // exact, "com", "other.com"
        assert_eq!(iter.probes(), 3);
    }

    #[test]
    fn test_exact_rules_do_not_mark_ancestors() {
        let mut set = SuffixSet::new();
        set.add("a.b.c.").unwrap();

        let mut iter = set.match_all("x.a.b.c");
        assert_eq!(iter.next(), None);
        assert_eq!(iter.probes(), 2);
    }

    #[test]
    fn test_empty_set_probes_nothing() {
        let set = SuffixSet::new();
        let mut iter = set.match_all("a.b");
        assert_eq!(iter.next(), None);
        assert_eq!(iter.probes(), 0);
    }

    #[test]
    fn test_fused() {
        let mut set = SuffixSet::new();
        set.add("b").unwrap();
        let mut iter = set.match_all("a.b");
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
