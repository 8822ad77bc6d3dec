//! Package specifiers and the version pin table.

use std::fmt;

/// Packages that are pinned to an exact version when installed.
///
/// Later majors of these packages break the configuration the plugins
/// generate, so selections are rewritten to the known-good release.
const PINNED_VERSIONS: &[(&str, &str)] = &[
    ("tailwindcss", "3.4.0"),
    ("eslint-plugin-tailwindcss", "3.17.0"),
];

/// Look up the pinned version for a package, if it has one.
pub fn pinned_version(name: &str) -> Option<&'static str> {
    PINNED_VERSIONS
        .iter()
        .find(|(pinned, _)| *pinned == name)
        .map(|(_, version)| *version)
}

/// A package name with an optional exact version pin.
///
/// Displays as `name` or `name@version`, the form the package manager
/// accepts on its command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    pub name: String,
    pub version: Option<String>,
}

impl PackageSpec {
    /// A spec with no version pin ("latest" is delegated to the
    /// package manager).
    pub fn latest(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    /// A spec pinned to an exact version.
    pub fn pinned(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
        }
    }

    /// Build the spec for a selected package, applying the pin table.
    ///
    /// Names absent from the table pass through unpinned.
    pub fn for_package(name: &str) -> Self {
        match pinned_version(name) {
            Some(version) => Self::pinned(name, version),
            None => Self::latest(name),
        }
    }
}

impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}@{}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}
