//! Schema version checks
//!
//! Records only carry their version; nothing here runs during decode. Callers
//! pick a policy: strict equality (`validate_version`), or semantic
//! comparison where older payloads are upgraded in place and newer ones are
//! refused (`check_version`, `coerce_version`).

use std::cmp::Ordering;

use semver::Version;

use super::error::VersionError;

/// A root record carrying a schema version string.
pub trait Versioned {
    /// Version this crate's types were built against.
    const CURRENT_VERSION: &'static str;

    fn version(&self) -> &str;
    fn set_version(&mut self, version: String);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VersionStatus {
    Current,
    Older { found: Version, current: Version },
}

/// Reports whether `record` carries exactly `expected`.
pub fn validate_version<T: Versioned>(record: &T, expected: &str) -> bool {
    record.version() == expected
}

pub fn check_version<T: Versioned>(record: &T) -> Result<VersionStatus, VersionError> {
    compare(record.version(), T::CURRENT_VERSION)
}

/// Upgrades an older version string to the current one.
pub fn coerce_version<T: Versioned>(mut record: T) -> Result<T, VersionError> {
    if let VersionStatus::Older { found, current } = check_version(&record)? {
        log::warn!(
            "schema version ({found}) is older than the current version ({current}); coercing"
        );
        record.set_version(current.to_string());
    }
    Ok(record)
}

fn compare(found: &str, current: &str) -> Result<VersionStatus, VersionError> {
    let found = parse(found)?;
    let current = parse(current)?;
    match found.cmp(&current) {
        Ordering::Equal => Ok(VersionStatus::Current),
        Ordering::Less => Ok(VersionStatus::Older { found, current }),
        Ordering::Greater => Err(VersionError::Newer { found, current }),
    }
}

fn parse(version: &str) -> Result<Version, VersionError> {
    Version::parse(version).map_err(|source| VersionError::Invalid {
        version: version.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Logic(String);

    impl Versioned for Logic {
        const CURRENT_VERSION: &'static str = "0.0.2";

        fn version(&self) -> &str {
            &self.0
        }

        fn set_version(&mut self, version: String) {
            self.0 = version;
        }
    }

    #[test]
    fn equal_version_is_current() {
        assert_eq!(check_version(&Logic("0.0.2".into())).unwrap(), VersionStatus::Current);
        assert!(validate_version(&Logic("0.0.2".into()), "0.0.2"));
        assert!(!validate_version(&Logic("0.0.1".into()), "0.0.2"));
    }

    #[test]
    fn older_version_is_coerced() {
        let logic = coerce_version(Logic("0.0.1".into())).unwrap();
        assert_eq!(logic.0, "0.0.2");
    }

    #[test]
    fn newer_version_is_refused() {
        let err = coerce_version(Logic("0.1.0".into())).unwrap_err();
        assert!(matches!(err, VersionError::Newer { .. }));
    }

    #[test]
    fn malformed_version_is_refused() {
        let err = check_version(&Logic("1.0".into())).unwrap_err();
        assert!(matches!(err, VersionError::Invalid { ref version, .. } if version == "1.0"));
    }
}
