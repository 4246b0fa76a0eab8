use std::path::Path;

use clap::Parser;

use flow_report::EXIT_SUCCESS;
use flow_report::chart::{PlottersRenderer, RenderConfig};
use flow_report::cli::Cli;
use flow_report::dataset;
use flow_report::logging;
use flow_report::report::{ReportGenerator, format_summary};

fn main() {
    let cli = Cli::parse();
    logging::init();

    let exit_code = match run_report(&cli.input, RenderConfig::default()) {
        Ok(summary) => {
            print!("{summary}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("{} error: {e}", e.error_type());
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}

/// Load `input`, render all charts and return the summary text.
fn run_report(input: &Path, config: RenderConfig) -> flow_report::Result<String> {
    let dataset = dataset::load(input)?;
    let generator = ReportGenerator::new(PlottersRenderer::new(config.clone()), config);
    let reports = generator.run(&dataset)?;
    Ok(format_summary(&reports))
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
