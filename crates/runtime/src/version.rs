use std::fmt;
use thiserror::Error;

/// A dotted numeric runtime version.
///
/// The alternate runtime's display string carries a
/// `major.minor[.build[.revision]]` version token; a missing build counts
/// as 0 and a revision component is accepted but not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuntimeVersion {
    /// Major version component.
    pub major: u64,
    /// Minor version component.
    pub minor: u64,
    /// Build (third) component; 0 when the token has only two components.
    pub build: u64,
}

/// Why no alternate-runtime version could be resolved.
///
/// One variant per pipeline stage, so a degraded probe is individually
/// diagnosable. None of these is fatal: the detector records the variant on
/// the profile and answers "no version" everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VersionProbeError {
    /// The alternate runtime's marker is not present in this process.
    #[error("alternate runtime marker not present")]
    MarkerMissing,

    /// The marker is present but its diagnostic hook is missing or unreachable.
    #[error("alternate runtime diagnostic hook unavailable")]
    HookMissing,

    /// The diagnostic hook returned an empty display string.
    #[error("alternate runtime display name is empty")]
    EmptyDisplayName,

    /// The display string has no space-delimited version token.
    #[error("alternate runtime display name has no version token")]
    MissingSeparator,

    /// The version token is not a dotted numeric version.
    #[error("unparsable version token `{token}`")]
    UnparsableVersion {
        /// The token that failed to parse.
        token: String,
    },
}

impl RuntimeVersion {
    /// Creates a version from explicit components.
    #[must_use]
    pub const fn new(major: u64, minor: u64, build: u64) -> Self {
        Self {
            major,
            minor,
            build,
        }
    }

    /// Parses a dotted numeric version token.
    ///
    /// Accepts two to four decimal components. Returns `None` for anything
    /// else — too few or too many components, empty components, or
    /// non-decimal characters.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let components: Vec<&str> = token.split('.').collect();
        if !(2..=4).contains(&components.len()) {
            return None;
        }
        if components
            .iter()
            .any(|c| c.is_empty() || !c.bytes().all(|b| b.is_ascii_digit()))
        {
            return None;
        }

        let major = components[0].parse().ok()?;
        let minor = components[1].parse().ok()?;
        let build = match components.get(2) {
            Some(c) => c.parse().ok()?,
            None => 0,
        };
        Some(Self {
            major,
            minor,
            build,
        })
    }

    /// Whether this version falls in the range known to exhibit the
    /// alternate-runtime defect that callers must work around.
    ///
    /// Affected: 4.3.2 and later 4.3 builds, 4.4.0 through 4.4.2, and
    /// 4.5.0 through 4.5.2. Everything else is clean.
    #[must_use]
    pub fn has_known_defect(&self) -> bool {
        if self.major != 4 {
            return false;
        }
        match self.minor {
            3 => self.build >= 2,
            4 | 5 => self.build <= 2,
            _ => false,
        }
    }

    /// Extracts and parses the version from a diagnostic display string.
    ///
    /// The contract is loose: a descriptive string whose first
    /// space-delimited token is the version, e.g. `"4.4.2 (Stable ...)"`.
    /// A string that is empty, starts with a space, or has no space at all
    /// is rejected with the stage that failed.
    pub fn from_display_name(display: &str) -> Result<Self, VersionProbeError> {
        if display.is_empty() {
            return Err(VersionProbeError::EmptyDisplayName);
        }
        let token = match display.find(' ') {
            None | Some(0) => return Err(VersionProbeError::MissingSeparator),
            Some(index) => &display[..index],
        };
        Self::parse(token).ok_or_else(|| VersionProbeError::UnparsableVersion {
            token: token.to_string(),
        })
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}
