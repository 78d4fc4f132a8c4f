//! capboot-core: installs the Capstone disassembly library using the host's
//! native package manager.
//!
//! The interesting behavior is a single dispatch: the detected platform
//! identifier selects one [`PlatformRule`] from a static table, and the
//! rule's commands run in order, fail-fast. Nothing is retried and nothing
//! already applied is rolled back.

// Internal modules (private)
mod error;
mod executor;
mod platform;
mod rules;

// Re-export public types
pub use error::{InstallError, EXIT_NOT_LAUNCHABLE, EXIT_UNSUPPORTED};
pub use executor::{is_command_available, CommandExecutor, SystemExecutor};
pub use platform::current_platform;
pub use rules::{lookup_rule, package_manager_hint, CommandSpec, PlatformRule, RULES};

/// Detects the host platform and installs Capstone for it.
///
/// This is the zero-argument entry point: it queries the platform once, then
/// delegates to [`install_on`] with the real system executor.
pub fn install() -> Result<(), InstallError> {
    install_on(current_platform(), &mut SystemExecutor::new())
}

/// Installs Capstone for an explicit platform identifier.
///
/// Lookup is exact and case-sensitive. An identifier without a rule yields
/// [`InstallError::UnsupportedPlatform`] and issues no commands.
pub fn install_on(os: &str, executor: &mut dyn CommandExecutor) -> Result<(), InstallError> {
    let rule = lookup_rule(os).ok_or_else(|| InstallError::UnsupportedPlatform(os.to_string()))?;
    log::info!("Installing capstone for {} via {}", os, rule.package_manager());
    run_sequence(rule, executor)
}

/// Runs a rule's commands in order, aborting at the first failure.
///
/// A signal-terminated command carries no exit code and is treated as exit 1.
fn run_sequence(
    rule: &PlatformRule,
    executor: &mut dyn CommandExecutor,
) -> Result<(), InstallError> {
    for spec in rule.commands {
        log::debug!("Running: {}", spec.rendered());

        let code = executor.run(spec).map_err(|source| InstallError::Spawn {
            program: spec.program.to_string(),
            source,
        })?;

        match code {
            Some(0) => {}
            code => {
                return Err(InstallError::CommandFailed {
                    program: spec.program.to_string(),
                    code: code.unwrap_or(1),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::testing::FakeExecutor;
    use std::io;

    #[test]
    fn test_darwin_success_issues_one_command() {
        let mut executor = FakeExecutor::succeeding();
        assert!(install_on("Darwin", &mut executor).is_ok());
        assert_eq!(executor.invoked, ["brew install capstone"]);
    }

    #[test]
    fn test_linux_success_issues_two_commands_in_order() {
        let mut executor = FakeExecutor::succeeding();
        assert!(install_on("Linux", &mut executor).is_ok());
        assert_eq!(
            executor.invoked,
            [
                "apt-get update",
                "apt-get install -y --allow-unauthenticated libcapstone3 libcapstone-dev",
            ]
        );
    }

    #[test]
    fn test_linux_refresh_failure_skips_install() {
        let mut executor = FakeExecutor::new(vec![Ok(Some(100))]);
        let err = install_on("Linux", &mut executor).unwrap_err();

        assert_eq!(err.exit_code(), 100);
        assert_eq!(executor.invoked, ["apt-get update"]);
        match err {
            InstallError::CommandFailed { program, code } => {
                assert_eq!(program, "apt-get");
                assert_eq!(code, 100);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_linux_install_failure_propagates_after_refresh() {
        let mut executor = FakeExecutor::new(vec![Ok(Some(0)), Ok(Some(2))]);
        let err = install_on("Linux", &mut executor).unwrap_err();

        assert_eq!(err.exit_code(), 2);
        assert_eq!(executor.invoked.len(), 2);
    }

    #[test]
    fn test_unsupported_platform_issues_no_commands() {
        for os in ["Solaris", "Windows_NT", "FreeBSD"] {
            let mut executor = FakeExecutor::succeeding();
            let err = install_on(os, &mut executor).unwrap_err();

            assert_eq!(err.exit_code(), EXIT_UNSUPPORTED);
            assert_eq!(err.to_string(), format!("Unsupported platform: {}", os));
            assert!(executor.invoked.is_empty());
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive_through_install() {
        let mut executor = FakeExecutor::succeeding();
        let err = install_on("darwin", &mut executor).unwrap_err();
        assert!(matches!(err, InstallError::UnsupportedPlatform(_)));
        assert!(executor.invoked.is_empty());
    }

    #[test]
    fn test_spawn_failure_maps_to_not_launchable() {
        let mut executor = FakeExecutor::new(vec![Err(io::Error::from(io::ErrorKind::NotFound))]);
        let err = install_on("Darwin", &mut executor).unwrap_err();

        assert_eq!(err.exit_code(), EXIT_NOT_LAUNCHABLE);
        assert!(matches!(err, InstallError::Spawn { .. }));
    }

    #[test]
    fn test_signal_termination_is_treated_as_failure() {
        let mut executor = FakeExecutor::new(vec![Ok(None)]);
        let err = install_on("Darwin", &mut executor).unwrap_err();

        match err {
            InstallError::CommandFailed { code, .. } => assert_eq!(code, 1),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
