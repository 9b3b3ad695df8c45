use std::io::{BufRead, Write};
use std::path::Path;

use calibman::config::{self, CalibmanConfig};
use calibman::output::{emit_success, OutputMode};
use calibman::prompt::{self, Prompter};
use calibman::storage::{self, CalibrationStore};
use calibman::ui::{self, Icons};
use chrono::Local;
use owo_colors::OwoColorize;

pub fn run_list(store: &CalibrationStore, table: bool, output_mode: OutputMode) -> anyhow::Result<()> {
    if !output_mode.is_human() {
        emit_success(output_mode, "list", store.records())?;
        return Ok(());
    }

    if store.is_empty() {
        ui::empty("No calibrations found.");
        return Ok(());
    }

    if table {
        println!("{}", ui::calibration_table(store.records()));
    } else {
        for record in store.records() {
            ui::print_calibration(record);
        }
    }
    Ok(())
}

pub fn run_view(store: &CalibrationStore, id: &str, output_mode: OutputMode) -> anyhow::Result<()> {
    let found = store.find_by_id(id);
    if !output_mode.is_human() {
        emit_success(output_mode, "view", found)?;
        return Ok(());
    }

    match found {
        Some(record) => ui::print_calibration(record),
        None => ui::empty(&format!("Calibration with ID '{}' not found.", id)),
    }
    Ok(())
}

pub fn run_search(store: &CalibrationStore, term: &str, output_mode: OutputMode) -> anyhow::Result<()> {
    let results = store.search(term);
    if !output_mode.is_human() {
        emit_success(output_mode, "search", &results)?;
        return Ok(());
    }

    if results.is_empty() {
        ui::empty(&format!("No calibrations found matching '{}'.", term));
        return Ok(());
    }

    println!(
        "{} Found {} match(es) for '{}':",
        Icons::SEARCH,
        results.len(),
        term.style(ui::theme().header.clone())
    );
    for record in results {
        ui::print_calibration(record);
    }
    Ok(())
}

/// Prompt for a new record, append it and save the store.
pub fn run_add<R: BufRead, W: Write>(
    store: &mut CalibrationStore,
    prompter: &mut Prompter<R, W>,
    default_cameras: usize,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    if output_mode.is_human() {
        ui::header("New calibration");
        ui::status(Icons::FILE, "Store", &store.path().display().to_string());
    }

    let today = Local::now().date_naive();
    let added = prompt::add_calibration(store, prompter, today, default_cameras)?;

    if added.duplicate_id {
        // Counting ids can repeat after manual edits to the file
        ui::warn(&format!("ID '{}' is also used by an earlier record", added.id));
    }

    if output_mode.is_human() {
        println!();
        ui::success(&format!("Successfully added new calibration with ID: {}", added.id));
    } else {
        emit_success(output_mode, "add", store.records().last())?;
    }
    Ok(())
}

pub fn run_init(config_path: &Path, force: bool, output_mode: OutputMode) -> anyhow::Result<()> {
    let config = CalibmanConfig::starter();
    config::write_config(config_path, &config, force)?;

    if output_mode.is_human() {
        ui::success(&format!("Wrote {}", config_path.display()));
        ui::info("Store", config.file.as_deref().unwrap_or_default());
        ui::info("Cameras", &config.default_cameras().to_string());
    } else {
        let data = serde_json::json!({
            "config": config_path.display().to_string(),
            "file": config.file,
            "cameras": config.cameras,
        });
        emit_success(output_mode, "init", data)?;
    }
    Ok(())
}

pub fn run_version(output_mode: OutputMode) -> anyhow::Result<()> {
    if output_mode.is_human() {
        ui::section("Calibman");
        println!("Version {}", env!("CARGO_PKG_VERSION").bold());
        println!("{}", ui::muted(&format!("default store: {}", config::default_store_path().display())));
        println!("{}", ui::muted(&format!("store formats: {}, {}", storage::StoreFormat::Yaml, storage::StoreFormat::Json)));
    } else {
        let data = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
        });
        emit_success(output_mode, "version", data)?;
    }
    Ok(())
}
