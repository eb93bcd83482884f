//! Suffixset - domain name classification against suffix rules.
//!
//! This crate answers "does this name end in one of these suffixes" for
//! dot-delimited names, the kind of query behind public suffix lookups,
//! tracker domain filters and grouping log lines by owning zone.
//!
//! # Features
//!
//! - **Three rule modes**: exact (`example.com.`), subdomain (`.example.com`)
//!   and both (`example.com`)
//! - **Most specific first**: every applicable rule can be enumerated lazily,
//!   longest suffix first
//! - **Bounded lookups**: the ancestor walk stops at the first label no rule
//!   lies under, so unrelated names cost two map probes
//! - **Plain-text rule lists**: comment-aware loading and sorted output
//! - **Line filter**: grep-like selection of input lines by a matching field
//!
//! # Quick Start
//!
//! ```
//! use suffixset::SuffixSet;
//!
//! let mut set = SuffixSet::new();
//! set.add("golang.org").unwrap();
//! set.add(".co.uk").unwrap();
//!
//! assert_eq!(set.find("blog.golang.org"), Some("golang.org"));
//! assert_eq!(set.find("amigolang.org"), None);
//! assert_eq!(set.find("co.uk"), None);
//! assert_eq!(set.plus_one("www.bbc.co.uk"), Some("bbc.co.uk"));
//! ```
//!
//! # Rule Lists
//!
//! ```
//! use suffixset::SuffixSet;
//!
//! let rules = "// trackers\nexample.com\n# exact only\nads.example.net.\n";
//! let mut set = SuffixSet::new();
//! set.read_from(rules.as_bytes()).unwrap();
//! assert_eq!(set.len(), 2);
//!
//! let mut out = Vec::new();
//! set.write_to(&mut out).unwrap();
//! assert_eq!(out, b"ads.example.net.\nexample.com\n");
//! ```
//!
//! Matching is case sensitive; names are not normalized or validated.

mod error;
mod map;
mod mode;
mod set;

pub mod filter;

// Re-export core types
pub use error::{Error, Result};
pub use map::SuffixMap;
pub use mode::Mode;
pub use set::{Match, MatchIter, RuleKey, SuffixSet};
