//! Version information.

/// Get the version string.
#[must_use]
#[allow(dead_code)]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get the full version string with build info.
#[must_use]
#[allow(dead_code)]
pub fn full_version() -> String {
    format!("sercalc {}", version())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_not_empty() {
        assert!(!version().is_empty());
    }

    #[test]
    fn full_version_names_binary() {
        assert!(full_version().starts_with("sercalc "));
    }
}
