//! Command-line host for the project board core.
//!
//! # Responsibility
//! - Play the part of the view shell: pick files, hand text buffers to the
//!   store and write exported snapshots back out.
//! - Keep all entity rules inside `projectboard_core`.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use projectboard_core::{
    default_log_level, init_logging, read_snapshot_file, write_snapshot_file, ImportReport,
    LoggingConfig, ProjectField, ProjectStore, StoreConfig,
};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let config = LoggingConfig {
            level: cli
                .log_level
                .clone()
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: log_dir.clone(),
        };
        init_logging(&config)
            .map_err(|err| anyhow::anyhow!("failed to initialize logging: {err}"))?;
    }

    let store_config = load_store_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Export { output } => {
            let store = ProjectStore::seeded(store_config);
            emit(&store, output)
        }
        Commands::Merge {
            inputs,
            base,
            output,
        } => {
            let store = merge(store_config, base.as_deref(), &inputs)?;
            emit(&store, output)
        }
        Commands::Show { input } => {
            let mut store = ProjectStore::new(StoreConfig {
                seed_default_project: false,
                ..store_config
            });
            let report = import_file(&mut store, &input)?;
            print_failures(&input, &report);
            print_projects(&store);
            Ok(())
        }
    }
}

fn load_store_config(path: Option<&Path>) -> Result<StoreConfig> {
    let Some(path) = path else {
        return Ok(StoreConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config `{}`", path.display()))?;
    Ok(StoreConfig::from_json(&text)?)
}

fn merge(config: StoreConfig, base: Option<&Path>, inputs: &[PathBuf]) -> Result<ProjectStore> {
    let mut store = match base {
        Some(base) => {
            let mut store = ProjectStore::new(StoreConfig {
                seed_default_project: false,
                ..config
            });
            let report = import_file(&mut store, base)?;
            print_failures(base, &report);
            store
        }
        None => ProjectStore::seeded(config),
    };

    for input in inputs {
        let report = import_file(&mut store, input)?;
        eprintln!(
            "{}: created={} updated={} skipped={}",
            input.display(),
            report.created.len(),
            report.updated.len(),
            report.failures.len()
        );
        print_failures(input, &report);
    }
    Ok(store)
}

fn import_file(store: &mut ProjectStore, path: &Path) -> Result<ImportReport> {
    let text = read_snapshot_file(path)
        .with_context(|| format!("failed to read snapshot `{}`", path.display()))?;
    store
        .import_snapshot(&text)
        .with_context(|| format!("failed to import snapshot `{}`", path.display()))
}

fn emit(store: &ProjectStore, output: Option<PathBuf>) -> Result<()> {
    let text = store.export_snapshot()?;
    match output {
        Some(path) => write_snapshot_file(&path, &text)
            .with_context(|| format!("failed to write snapshot `{}`", path.display())),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

fn print_failures(path: &Path, report: &ImportReport) {
    for failure in &report.failures {
        eprintln!(
            "{}: skipped project #{}: {}",
            path.display(),
            failure.index,
            failure.error
        );
    }
}

fn print_projects(store: &ProjectStore) {
    for project in store.iter() {
        println!(
            "[{}] {} ({}, {}) cost={} progress={} due={} todos={}",
            project.display(ProjectField::Initials),
            project.display(ProjectField::Name),
            project.display(ProjectField::Status),
            project.display(ProjectField::UserRole),
            project.display(ProjectField::Cost),
            project.display(ProjectField::Progress),
            project.display(ProjectField::FinishDate),
            project.todo_list.len()
        );
    }
}
