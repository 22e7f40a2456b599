//! Operating-system name table
//!
//! Maps the OS component of a Rust-style target triple onto the name the
//! Zig driver expects. The table is a `const` value; nothing mutates it.

/// Fixed lookup table from Rust OS names to Zig OS names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsMap {
    entries: &'static [(&'static str, &'static str)],
}

impl OsMap {
    /// The table used by the installed driver shim
    pub const DEFAULT: OsMap = OsMap::new(&[
        ("darwin", "macos"),
        ("windows", "windows"),
        ("linux", "linux"),
        ("none", "freestanding"),
        ("unknown", "freestanding"),
    ]);

    /// Build a table from `(rust, zig)` pairs
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Map `os` to its Zig name, or hand it back untouched when unknown
    pub fn resolve<'a>(&self, os: &'a str) -> &'a str {
        self.lookup(os).unwrap_or(os)
    }

    /// Look up `os`, returning `None` for names outside the table
    pub fn lookup(&self, os: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(from, _)| *from == os)
            .map(|(_, to)| *to)
    }

    /// Iterate over the `(rust, zig)` pairs
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

impl Default for OsMap {
    fn default() -> Self {
        Self::DEFAULT
    }
}
