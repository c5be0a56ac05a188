//! Section anchors.

use std::fmt::Display;
use std::fmt::Formatter;

/// A stable anchor for a page section.
///
/// Anchors are fixed names; equal content always yields equal anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(&'static str);

impl Id {
    /// Creates an anchor with the given name.
    pub const fn new(name: &'static str) -> Id {
        Self(name)
    }

    /// The anchor name.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}
