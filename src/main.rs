use std::process::ExitCode;

use clap::Parser;
use search_tracker::cli::{Cli, Commands};
use search_tracker::config::StaticConfig;
use search_tracker::runtime::modes;
use search_tracker::system::init_logging;

fn config_gen(output_path: Option<&str>, force: bool) -> ExitCode {
    let Some(path) = output_path else {
        print!("{}", StaticConfig::generate_sample_config());
        return ExitCode::SUCCESS;
    };

    if std::path::Path::new(path).exists() && !force {
        eprintln!("{} already exists, use --force to overwrite", path);
        return ExitCode::FAILURE;
    }

    match StaticConfig::default().save_to_file(path) {
        Ok(()) => {
            println!("Sample configuration written to {}", path);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.format_colored());
            ExitCode::FAILURE
        }
    }
}

#[actix_web::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Serve);
    if let Commands::ConfigGen { output_path, force } = &command {
        return config_gen(output_path.as_deref(), *force);
    }

    let config = match StaticConfig::load_from(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            return ExitCode::FAILURE;
        }
    };

    // 日志 guard 必须存活到进程结束
    let _log_guard = match init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match command {
        Commands::InitSchema => modes::run_init_schema(&config).await,
        _ => modes::run_server(config).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
