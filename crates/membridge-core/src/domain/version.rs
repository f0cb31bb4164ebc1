//! Platform version parsing and ordering.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `major.minor.patch` platform version.
///
/// Ordering is lexicographic over the three components, which is what the
/// process-scoped capability check compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlatformVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PlatformVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string as reported by an OS.
    ///
    /// Only the leading dotted-numeric part is read, so vendor suffixes such
    /// as `6.5.0-1025-azure` or `13.4.1 (22F82)` are accepted. Missing
    /// components default to zero, and a component too large for `u32` ends
    /// the prefix. Returns `None` when the string does not start with a
    /// usable number.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = [0_u32; 3];
        let mut seen = 0;

        for (slot, piece) in parts.iter_mut().zip(raw.trim().split('.')) {
            let digits: String = piece.chars().take_while(char::is_ascii_digit).collect();
            if digits.is_empty() {
                break;
            }
            // An overflowing component ends the prefix like a suffix would.
            let Ok(value) = digits.parse::<u32>() else {
                break;
            };
            *slot = value;
            seen += 1;
            // A suffix inside a component ends the numeric prefix.
            if digits.len() != piece.len() {
                break;
            }
        }

        (seen > 0).then(|| Self::new(parts[0], parts[1], parts[2]))
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
