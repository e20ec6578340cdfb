use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use film_shelf_lib::settings;
use film_shelf_omdb::{ConfigSource, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, OmdbConfig};

use crate::CliError;
use crate::console::prompt;

fn mask_value(s: &str) -> String {
    if s.chars().count() <= 2 {
        "****".to_string()
    } else {
        format!("{}****", s.chars().take(2).collect::<String>())
    }
}

/// Show current settings and their sources.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = film_shelf_omdb::config_path();
    let sources = film_shelf_omdb::config_sources();

    log::info!(
        "{}",
        "OMDb Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    crate::log_blank();

    let config = OmdbConfig::load()?;
    let fields: [(&str, &ConfigSource, Option<String>); 3] = [
        ("endpoint", &sources.endpoint, Some(config.endpoint.clone())),
        (
            "api_key",
            &sources.api_key,
            config.api_key.as_deref().map(mask_value),
        ),
        (
            "timeout_secs",
            &sources.timeout_secs,
            Some(config.timeout_secs.to_string()),
        ),
    ];

    for (name, source, value) in &fields {
        let source_str = format!("({})", source);
        match value {
            Some(v) => {
                log::info!(
                    "  {} {} {}",
                    format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
                    v,
                    source_str.if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
            None => {
                log::info!(
                    "  {} {} {}",
                    format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
                    "not set".if_supports_color(Stdout, |t| t.yellow()),
                    source_str.if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
        }
    }

    crate::log_blank();
    log::info!("{}", "Settings".if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();
    log::info!(
        "  Settings file: {}",
        settings::settings_path()
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    let last = settings::load_last_directory();
    if last.is_empty() {
        log::info!(
            "  {} {}",
            "last_directory:".if_supports_color(Stdout, |t| t.cyan()),
            "not set".if_supports_color(Stdout, |t| t.yellow()),
        );
    } else {
        log::info!(
            "  {} {}",
            "last_directory:".if_supports_color(Stdout, |t| t.cyan()),
            last,
        );
    }

    Ok(())
}

/// Interactively write the OMDb config file.
pub(crate) fn run_config_setup() -> Result<(), CliError> {
    println!(
        "{}",
        "OMDb Setup".if_supports_color(Stdout, |t| t.bold()),
    );
    println!();

    // Existing values become the defaults; a broken env value shouldn't
    // block rewriting the file.
    let existing = OmdbConfig::load().unwrap_or_default();

    let read_line = |name: &str, default: Option<&str>| -> Option<String> {
        let question = match default {
            Some(def) => format!("  {} [{}]: ", name, def),
            None => format!("  {}: ", name),
        };
        match prompt(&question) {
            Some(answer) if !answer.is_empty() => Some(answer),
            _ => default.map(str::to_string),
        }
    };

    println!(
        "  {}",
        "Get a free key at https://www.omdbapi.com/apikey.aspx (press Enter to keep the current value)"
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
    let api_key = read_line("api_key", existing.api_key.as_deref());
    let endpoint = read_line("endpoint", Some(existing.endpoint.as_str()))
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let timeout_default = existing.timeout_secs.to_string();
    let timeout_secs = match read_line("timeout_secs", Some(timeout_default.as_str())) {
        Some(raw) => raw.parse().map_err(|_| {
            CliError::config(format!("timeout_secs must be a whole number, got {:?}", raw))
        })?,
        None => DEFAULT_TIMEOUT_SECS,
    };

    let config = OmdbConfig {
        endpoint,
        api_key,
        timeout_secs,
    };

    let path = film_shelf_omdb::save_to_file(&config)
        .map_err(|e| CliError::config(format!("Failed to save config: {}", e)))?;

    println!();
    log::info!(
        "{} Config saved to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    match film_shelf_omdb::config_path() {
        Some(path) => log::info!("{}", path.display()),
        None => {
            return Err(CliError::config("Could not determine config directory"));
        }
    }

    Ok(())
}
