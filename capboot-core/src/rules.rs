//! Static platform rule table
//!
//! Maps a `uname -s`-style platform identifier to the ordered package-manager
//! commands that install Capstone on that platform. Extending support to a
//! new platform means adding a table entry, not a new code path.

/// A single external invocation: executable name plus a fixed argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl CommandSpec {
    /// Renders the command the way a shell prompt would show it.
    pub fn rendered(&self) -> String {
        let mut line = String::from(self.program);
        for arg in self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Pairing of a platform identifier with the ordered commands for it.
///
/// Identifiers are matched exactly and case-sensitively against the detected
/// platform name.
#[derive(Debug, Clone, Copy)]
pub struct PlatformRule {
    pub os: &'static str,
    pub commands: &'static [CommandSpec],
}

impl PlatformRule {
    /// The package manager this rule shells out to.
    pub fn package_manager(&self) -> &'static str {
        self.commands[0].program
    }
}

/// Every platform capboot knows how to provision.
///
/// The Linux install passes `--allow-unauthenticated`, which skips APT
/// package signature verification for the capstone packages.
pub const RULES: &[PlatformRule] = &[
    PlatformRule {
        os: "Darwin",
        commands: &[CommandSpec {
            program: "brew",
            args: &["install", "capstone"],
        }],
    },
    PlatformRule {
        os: "Linux",
        commands: &[
            // Index refresh must run before the install.
            CommandSpec {
                program: "apt-get",
                args: &["update"],
            },
            CommandSpec {
                program: "apt-get",
                args: &[
                    "install",
                    "-y",
                    "--allow-unauthenticated",
                    "libcapstone3",
                    "libcapstone-dev",
                ],
            },
        ],
    },
];

/// Exact-match lookup of the rule for a platform identifier.
pub fn lookup_rule(os: &str) -> Option<&'static PlatformRule> {
    RULES.iter().find(|rule| rule.os == os)
}

/// Where to get the package manager itself, for the pre-flight hint.
pub fn package_manager_hint(manager: &str) -> Option<&'static str> {
    match manager {
        "brew" => Some("https://brew.sh"),
        "apt-get" => Some("https://wiki.debian.org/Apt"),
        _ => None,
    }
}
