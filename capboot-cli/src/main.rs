use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    let args = cli::parse_args();

    // Initialize logger with appropriate level based on verbose flag
    if std::env::var("RUST_LOG").is_err() {
        if args.verbose {
            std::env::set_var("RUST_LOG", "debug");
        } else {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    if args.list_rules {
        print_rules();
        return Ok(());
    }

    let os = capboot_core::current_platform();
    log::debug!("Detected platform: {}", os);

    let rule = match capboot_core::lookup_rule(os) {
        Some(rule) => rule,
        None => {
            eprintln!("Unsupported platform: {}", os);
            std::process::exit(capboot_core::EXIT_UNSUPPORTED);
        }
    };

    if args.dry_run {
        println!("Would run on {}:", os);
        for spec in rule.commands {
            println!("  {}", spec.rendered());
        }
        return Ok(());
    }

    // Courtesy check before shelling out, so a missing package manager gets
    // an install hint instead of a bare launch failure.
    let manager = rule.package_manager();
    if !capboot_core::is_command_available(manager) {
        eprintln!("{} not found in PATH.", manager);
        if let Some(url) = capboot_core::package_manager_hint(manager) {
            eprintln!("Install it first: {}", url);
        }
        std::process::exit(capboot_core::EXIT_NOT_LAUNCHABLE);
    }

    let mut executor = capboot_core::SystemExecutor::new();
    match capboot_core::install_on(os, &mut executor) {
        Ok(()) => {
            log::info!("capstone installed");
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn print_rules() {
    for rule in capboot_core::RULES {
        println!("{}:", rule.os);
        for spec in rule.commands {
            println!("  {}", spec.rendered());
        }
    }
}
