use clap::Parser;

/// A utility that installs the Capstone disassembly library
#[derive(Parser, Debug)]
#[command(name = "capboot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Installs capstone and its development headers with the platform's package manager",
    long_about = "Installs capstone and its development headers with the platform's package \
                  manager (Homebrew on macOS, apt-get on Linux).\n\n\
                  Note: the Linux install passes --allow-unauthenticated to apt-get, which \
                  skips package signature verification."
)]
pub struct Args {
    /// Print the commands that would run without executing them
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// List every supported platform and its install commands
    #[arg(long = "list-rules")]
    pub list_rules: bool,
}

/// Parses command-line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
