use crate::error::{BumpError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// A `MAJOR.MINOR.PATCH` semantic version.
///
/// Ordering is lexicographic over `(major, minor, patch)`, which the derived
/// `Ord` gives us from field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

static VERSION_RE: OnceLock<Regex> = OnceLock::new();

fn version_re() -> &'static Regex {
    VERSION_RE.get_or_init(|| Regex::new(r"^\d+\.\d+\.\d+$").unwrap())
}

impl Version {
    /// Increment one segment, zeroing everything below it.
    pub fn bump(self, kind: BumpKind) -> Version {
        match kind {
            BumpKind::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            BumpKind::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            BumpKind::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }
}

impl FromStr for Version {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        if !version_re().is_match(s) {
            return Err(BumpError::InvalidVersion(s.to_string()));
        }
        let mut segments = s
            .split('.')
            .map(|seg| seg.parse::<u64>().map_err(|_| BumpError::InvalidVersion(s.to_string())));
        // The regex guarantees exactly three segments; parse can still fail on
        // values that overflow u64.
        Ok(Version {
            major: segments.next().unwrap()?,
            minor: segments.next().unwrap()?,
            patch: segments.next().unwrap()?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which segment of the version to increment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    #[default]
    Patch,
}

impl FromStr for BumpKind {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            other => Err(BumpError::InvalidBumpKind(other.to_string())),
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        };
        f.write_str(s)
    }
}
