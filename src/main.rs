//! HTTP API route-table compiler (CLI)
//!
//! # Architecture Overview
//!
//! ```text
//!   service file ──▶ config::loader ──▶ config::validation ──▶ ServiceConfig
//!                                                                  │
//!                                         route_declarations()     │  cors()
//!                                                  ▼               ▼
//!                              ┌──────────────────────────────────────────┐
//!                              │                compiler                   │
//!                              │  routing::resolver ──▶ cors::policy       │
//!                              │  (RouteTable, bound methods)              │
//!                              └───────────────────┬──────────────────────┘
//!                                                  ▼
//!                                    CompiledApi (JSON on stdout)
//! ```
//!
//! `watch` keeps a notify watcher on the file and recompiles on every change
//! until Ctrl-C.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use http_api_routes::compiler::compile_service;
use http_api_routes::config::loader::load_config;
use http_api_routes::config::watcher::{process_reloads, ConfigWatcher};
use http_api_routes::config::ServiceConfig;
use http_api_routes::observability::logging::{init_logging, LogFormat};

#[derive(Parser)]
#[command(name = "http-api-routes")]
#[command(about = "Compile HTTP API route bindings into a route table and CORS policy", long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a service file and print the result as JSON
    Compile {
        file: PathBuf,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Compile a service file and print a summary
    Check { file: PathBuf },
    /// Recompile whenever the service file changes
    Watch { file: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level, cli.log_format) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let result = match cli.command {
        Commands::Compile { file, pretty } => run_compile(&file, pretty),
        Commands::Check { file } => run_check(&file),
        Commands::Watch { file } => run_watch(&file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Compile a loaded config and render a one-line summary, or the error with its kind.
fn summarize(config: &ServiceConfig) -> Result<String, String> {
    let declarations = config.route_declarations();
    let api = compile_service(config, &declarations)
        .map_err(|e| format!("[{}] {}", e.kind(), e))?;
    Ok(format!(
        "{} route(s){}{}",
        api.routes.len(),
        if api.catch_all().is_some() { ", catch-all" } else { "" },
        if api.cors.is_some() { ", CORS enabled" } else { "" },
    ))
}

fn run_compile(path: &Path, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(path)?;
    let declarations = config.route_declarations();
    let api = compile_service(&config, &declarations)
        .map_err(|e| format!("[{}] {}", e.kind(), e))?;

    let json = if pretty {
        serde_json::to_string_pretty(&api)?
    } else {
        serde_json::to_string(&api)?
    };
    println!("{}", json);
    Ok(())
}

fn run_check(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(path)?;
    let summary = summarize(&config)?;
    println!("{}: {}", path.display(), summary);
    Ok(())
}

#[tokio::main]
async fn run_watch(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    report(path, load_config(path).map_err(|e| e.to_string()));

    let (watcher, mut updates) = ConfigWatcher::new(path);
    let _watcher = watcher.run()?;

    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };
    let reloads = process_reloads(&mut updates, ctrl_c, |reload| {
        report(path, reload.map_err(|e| e.to_string()))
    })
    .await;

    tracing::info!(reloads, "Watch stopped");
    Ok(())
}

fn report(path: &Path, loaded: Result<ServiceConfig, String>) {
    match loaded.and_then(|config| summarize(&config)) {
        Ok(summary) => {
            tracing::info!(path = %path.display(), %summary, "Compiled");
            println!("{}: {}", path.display(), summary);
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Configuration rejected");
            eprintln!("{}: {}", path.display(), e);
        }
    }
}
