//! Rule match modes and the dot-marker pattern encoding.

use bitflags::bitflags;

bitflags! {
    /// Which names a stored suffix applies to.
    ///
    /// The two bits are independent; a suffix added once as `a.b.` and once
    /// as `.a.b` ends up with [`Mode::ALL`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Mode: u8 {
        /// Matches the suffix itself (pattern with a trailing dot).
        const EXACT = 0b01;
        /// Matches strict sub-names of the suffix (pattern with a leading dot).
        const SUBDOMAIN = 0b10;
        /// Matches the suffix and every sub-name (bare pattern).
        const ALL = Self::EXACT.bits() | Self::SUBDOMAIN.bits();
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::empty()
    }
}

impl Mode {
    /// Split a raw pattern into its stored suffix and mode.
    ///
    /// A trailing dot selects [`Mode::EXACT`], a leading dot selects
    /// [`Mode::SUBDOMAIN`]; neither (or both) gives [`Mode::ALL`]. Every
    /// leading and trailing dot is stripped from the returned suffix, which
    /// may therefore be empty.
    ///
    /// ```
    /// use suffixset::Mode;
    ///
    /// assert_eq!(Mode::decode("example.com."), ("example.com", Mode::EXACT));
    /// assert_eq!(Mode::decode(".example.com"), ("example.com", Mode::SUBDOMAIN));
    /// assert_eq!(Mode::decode(".example.com."), ("example.com", Mode::ALL));
    /// ```
    pub fn decode(pattern: &str) -> (&str, Mode) {
        let mut mode = Mode::empty();
        if pattern.ends_with('.') {
            mode |= Mode::EXACT;
        }
        if pattern.starts_with('.') {
            mode |= Mode::SUBDOMAIN;
        }
        if mode.is_empty() {
            mode = Mode::ALL;
        }
        (pattern.trim_matches('.'), mode)
    }

    /// Render a suffix back into pattern form.
    ///
    /// Returns an empty string when neither bit is set; such entries are
    /// never written out.
    pub fn encode(self, suffix: &str) -> String {
        if self.contains(Mode::ALL) {
            suffix.to_string()
        } else if self.contains(Mode::EXACT) {
            format!("{}.", suffix)
        } else if self.contains(Mode::SUBDOMAIN) {
            format!(".{}", suffix)
        } else {
            String::new()
        }
    }

    /// True if the suffix itself matches.
    pub fn is_exact(self) -> bool {
        self.contains(Mode::EXACT)
    }

    /// True if strict sub-names of the suffix match.
    pub fn is_subdomain(self) -> bool {
        self.contains(Mode::SUBDOMAIN)
    }
}
