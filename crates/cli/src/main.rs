use std::process::ExitCode;

use clap::Parser;

use ledger_ratios_cli::Config;

fn main() -> ExitCode {
    let config = Config::parse();
    ledger_ratios_observability::init(config.log_format);

    tracing::debug!(?config, "starting");

    let stdout = std::io::stdout();
    match ledger_ratios_cli::run(&config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
