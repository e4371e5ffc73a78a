use std::io::{self, Write};

use crate::config::{parse_base_url, parse_locale, Config};
use crate::constants::DEFAULT_BASE_URL;
use crate::error::{DirectoryError, Result};

fn prompt(question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("User Directory Configuration");
    println!("============================\n");

    let base_url = prompt(&format!("API base URL [{DEFAULT_BASE_URL}]: "))?;
    let base_url = if base_url.is_empty() {
        None
    } else {
        parse_base_url(&base_url)?;
        Some(base_url)
    };

    let locale = prompt("Locale for dates, e.g. ko_KR [en_US]: ")?;
    let locale = if locale.is_empty() {
        None
    } else {
        parse_locale(&locale)?;
        Some(locale)
    };

    let utc = prompt("Show registration dates in UTC? [y/N] ")?.eq_ignore_ascii_case("y");

    let config = Config {
        base_url,
        locale,
        utc,
    };

    // Create config directory if it doesn't exist
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| DirectoryError::ConfigRead {
            path: config_path.clone(),
            source: e,
        })?;
    }

    std::fs::write(&config_path, config.to_toml()?).map_err(|e| DirectoryError::ConfigRead {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now use 'userdir' commands!");

    Ok(())
}
