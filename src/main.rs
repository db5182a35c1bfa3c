use gitcli::{cli, config::Config, exitcode, setup_logging};
use std::process;

fn main() {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    if let Err(e) = setup_logging(args.debug) {
        eprintln!("{e:#}");
        process::exit(exitcode::SOFTWARE);
    }

    // Initialize configuration
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            process::exit(e.exit_code());
        }
    };

    // Execute the appropriate command and relay its exit code
    match cli::execute_command(&config, args.command.as_ref()) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{e}");
            process::exit(e.exit_code());
        }
    }
}
