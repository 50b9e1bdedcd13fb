use std::process::ExitCode;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use generate_ast::GenerateError;
use generate_ast::cli::CommandLineInterface;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let command_line_interface = CommandLineInterface::load();
    let result = command_line_interface.run();
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            let code = error.exit_code();
            let stage = error.stage();
            report(stage, error);
            ExitCode::from(code)
        }
    }
}

fn report(stage: &str, error: GenerateError) {
    let error = anyhow::Error::new(error).context(format!("{stage} failed"));
    eprintln!("{} {error:#}", "error:".red().bold());
}
