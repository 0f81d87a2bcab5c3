//! scicalc: keypad-driven scientific calculator
//!
//! ## Usage
//!
//! ```bash
//! scicalc keys 2 + 3 '*' 4 =        # prints 20
//! scicalc keys --settle 1 / 0 =     # error flashes, then reverts to 0
//! scicalc repl                      # one key script per line
//! scicalc keypad --shift            # shifted button labels
//! scicalc --config calc.yaml config # effective engine configuration
//! ```

use clap::Parser;
use sci_calc_cli::{
    handlers::{execute_config, execute_keypad, execute_keys},
    logging, repl, Cli, CliConfig, CliResult, ColorChoice, Commands, DisplayPrinter, Repl,
    ReplArgs, Verbosity,
};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);
    logging::init_tracing(config.verbosity);

    match cli.command {
        Commands::Repl(args) => run_repl(&config, &args),
        Commands::Keys(args) => {
            let config = config.with_format(args.format.into());
            execute_keys(&config, &args, &mut io::stdout().lock())
        }
        Commands::Keypad(args) => execute_keypad(&args, &mut io::stdout().lock()),
        Commands::Config(args) => execute_config(&config, &args, &mut io::stdout().lock()),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.verbose, cli.quiet);
    let color: ColorChoice = cli.color.clone().into();

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_engine_config(cli.config.clone())
}

fn run_repl(config: &CliConfig, args: &ReplArgs) -> CliResult<()> {
    let printer = DisplayPrinter::new(
        config.format,
        config.color.should_color(),
        config.verbosity.is_quiet(),
    );
    printer.info("scicalc: type key scripts like `12 + 3 =`, :help for more, :quit to leave");

    let mut session = Repl::new(config.load_engine_config()?, printer);
    if !args.off {
        session.power_on();
    }
    repl::run(&mut session, io::stdin().lock(), &mut io::stdout().lock())
}
