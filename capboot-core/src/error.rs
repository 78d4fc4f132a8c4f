use thiserror::Error;

/// Everything that can go wrong during a bootstrap run.
///
/// No variant is recovered internally; each maps to a process exit code via
/// [`InstallError::exit_code`].
#[derive(Debug, Error)]
pub enum InstallError {
    /// The detected platform has no entry in the rule table.
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// A package-manager invocation exited non-zero. The sequence halts at
    /// the first failure; nothing already applied is rolled back.
    #[error("`{program}` exited with status {code}")]
    CommandFailed { program: String, code: i32 },

    /// The package-manager executable could not be launched at all.
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Exit code reserved for the unsupported-platform path.
pub const EXIT_UNSUPPORTED: i32 = 1;

/// Exit code for a package manager that is missing from PATH, matching the
/// shell convention for command-not-found.
pub const EXIT_NOT_LAUNCHABLE: i32 = 127;

impl InstallError {
    /// Maps the error to the process exit code the caller should use.
    ///
    /// A failed command propagates its own exit code verbatim.
    pub fn exit_code(&self) -> i32 {
        match self {
            InstallError::UnsupportedPlatform(_) => EXIT_UNSUPPORTED,
            InstallError::CommandFailed { code, .. } => *code,
            InstallError::Spawn { .. } => EXIT_NOT_LAUNCHABLE,
        }
    }
}
