use anyhow::Context;
use clap::Parser;
use exoplanet_portal::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match run_main(args) {
        Ok(code) => process::exit(code),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Run the selected command on a fresh runtime, returning the exit code
fn run_main(args: Args) -> anyhow::Result<i32> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;

    let summary = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => match signal {
                Ok(()) => {
                    eprintln!("\nReceived CTRL+C, shutting down...");
                    Err(exoplanet_portal::Error::interrupted("Upload cancelled by user"))
                }
                Err(e) => Err(exoplanet_portal::Error::io(
                    "Failed to install CTRL+C signal handler",
                    e,
                )),
            },
        }
    })?;

    Ok(summary.exit_code())
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Exoplanet Portal - Bring Your Own Data");
    println!("======================================");
    println!();
    println!("Preview your own planetary observations and explore Kepler planet");
    println!("records from the command line.");
    println!();
    println!("USAGE:");
    println!("    portal <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    upload      Select a CSV or .dat file, preview it and run the simulated upload");
    println!("    sample      Show the detail card of the bundled Kepler sample planet");
    println!("    inspect     Show the detail card of the first planet in a snapshot file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Preview a light-curve table and upload it:");
    println!("    portal upload observations.csv");
    println!();
    println!("    # Select a .dat file with a faster simulated upload:");
    println!("    portal upload lightcurve.dat --type dat --delay-ms 200");
    println!();
    println!("    # Show the stellar properties of the sample planet as JSON:");
    println!("    portal sample --group stellar --format json");
    println!();
    println!("    # Inspect a NASA Exoplanet Archive KOI export:");
    println!("    portal inspect cumulative.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    portal <COMMAND> --help");
}
