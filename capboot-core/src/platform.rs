//! Host platform identification
//!
//! Rules are keyed by `uname -s`-style names ("Darwin", "Linux") rather than
//! Rust's lowercase target names, so the compile-time constant is translated
//! once here.

/// Returns the `uname -s`-style identifier for the host.
pub fn current_platform() -> &'static str {
    uname_style(std::env::consts::OS)
}

fn uname_style(os: &str) -> &'static str {
    match os {
        "macos" => "Darwin",
        "linux" => "Linux",
        "windows" => "Windows_NT",
        "freebsd" => "FreeBSD",
        "netbsd" => "NetBSD",
        "openbsd" => "OpenBSD",
        "solaris" => "SunOS",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uname_style_mapping() {
        assert_eq!(uname_style("macos"), "Darwin");
        assert_eq!(uname_style("linux"), "Linux");
        assert_eq!(uname_style("windows"), "Windows_NT");
        assert_eq!(uname_style("freebsd"), "FreeBSD");
        assert_eq!(uname_style("haiku"), "Unknown");
    }

    #[test]
    fn test_current_platform_matches_build_target() {
        let platform = current_platform();

        #[cfg(target_os = "macos")]
        assert_eq!(platform, "Darwin");

        #[cfg(target_os = "linux")]
        assert_eq!(platform, "Linux");

        #[cfg(not(any(target_os = "macos", target_os = "linux")))]
        assert_ne!(platform, "");
    }
}
