use crate::error::{LauncherError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformSupport {
    Supported(String),
    Unsupported(String),
}

/// Checks an OS identifier against the allow-list.
pub fn check(os: &str, supported: &[String]) -> PlatformSupport {
    if supported.iter().any(|p| p == os) {
        PlatformSupport::Supported(os.to_string())
    } else {
        PlatformSupport::Unsupported(os.to_string())
    }
}

/// Gate run once per query before any directory is touched.
pub fn ensure_supported(support: PlatformSupport) -> Result<String> {
    match support {
        PlatformSupport::Supported(os) => Ok(os),
        PlatformSupport::Unsupported(os) => {
            log::warn!("Refusing to scan applications on unsupported platform '{}'", os);
            Err(LauncherError::UnsupportedPlatform)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linux_only() -> Vec<String> {
        vec!["linux".to_string()]
    }

    #[test]
    fn linux_is_supported() {
        assert_eq!(
            check("linux", &linux_only()),
            PlatformSupport::Supported("linux".to_string())
        );
    }

    #[test]
    fn other_platforms_are_rejected() {
        for os in ["macos", "windows", "freebsd", ""] {
            assert_eq!(
                check(os, &linux_only()),
                PlatformSupport::Unsupported(os.to_string())
            );
        }
    }

    #[test]
    fn unsupported_reports_user_facing_message() {
        let err = ensure_supported(check("windows", &linux_only())).unwrap_err();
        assert_eq!(err.to_string(), "Platform not yet supported");
    }

    #[test]
    fn empty_allow_list_rejects_everything() {
        assert!(ensure_supported(check("linux", &[])).is_err());
    }
}
