use std::process::ExitCode;

use clap::Parser;
use conference_cli::commands::Cli;
use conference_cli::config::read_config;
use conference_reports::GenerationOutcome;
use tracing::error;
use tracing_subscriber::EnvFilter;


fn init_logging(logging_config: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(logging_config));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = read_config(cli.config.as_deref());
    init_logging(&config.logging_config);

    match cli.command.run(&config) {
        Ok(GenerationOutcome::Written(path)) => {
            println!("Документ успешно создан: {}", path.display());
            ExitCode::SUCCESS
        },
        Ok(GenerationOutcome::NoAcceptedPapers) => {
            println!("Нет принятых работ для формирования списка.");
            ExitCode::SUCCESS
        },
        Err(e) => {
            error!("{:?}", e);
            eprintln!("Не удалось создать файл:\n{:#}", e);
            ExitCode::FAILURE
        }
    }
}
