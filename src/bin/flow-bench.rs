use std::fs::File;
use std::io::{self, BufWriter};

use clap::Parser;
use tracing::info;

use flow_report::bench::{BenchConfig, BenchRunner};
use flow_report::cli::BenchCli;
use flow_report::{EXIT_SUCCESS, logging};

fn main() {
    let cli = BenchCli::parse();
    logging::init();

    let exit_code = match run_bench(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("{} error: {e}", e.error_type());
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}

fn run_bench(cli: &BenchCli) -> flow_report::Result<()> {
    let config = BenchConfig {
        steps: cli.steps,
        instances: cli.instances,
        runs: cli.runs,
        seed: cli.seed,
        ..BenchConfig::default()
    };
    config.validate()?;

    let output = BufWriter::new(File::create(&cli.output)?);
    let runner = BenchRunner::new(config, output, io::stdout().lock())?;
    let rows = runner.run()?;
    info!(path = %cli.output.display(), rows, "results written");
    Ok(())
}
