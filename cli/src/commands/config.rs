use color_eyre::eyre::{eyre, Result};

use crate::config::{config_path, preferences_path, UserConfig};

fn editor() -> String {
    std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .unwrap_or_else(|_| "nano".to_string())
}

pub fn run(path: bool, reset: bool, edit: bool) -> Result<()> {
    let config_file = config_path();

    if path {
        println!("{}", config_file.display());
        return Ok(());
    }

    if reset {
        UserConfig::default().save()?;
        println!("Config reset to defaults at: {}", config_file.display());
        println!(
            "Profile answers are kept in {}",
            preferences_path().display()
        );
        return Ok(());
    }

    if edit {
        if !config_file.exists() {
            UserConfig::default().save()?;
        }

        let editor = editor();
        let status = std::process::Command::new(&editor)
            .arg(&config_file)
            .status()?;
        if !status.success() {
            return Err(eyre!("{} exited with {}", editor, status));
        }

        let content = std::fs::read_to_string(&config_file)?;
        if let Err(e) = toml::from_str::<UserConfig>(&content) {
            eprintln!("Warning: config is invalid and will fall back to defaults: {}", e);
        }
        return Ok(());
    }

    let config = UserConfig::load();
    println!("Config file: {}", config_file.display());
    println!("Preferences: {}", preferences_path().display());
    println!();
    println!("{}", toml::to_string_pretty(&config)?);

    Ok(())
}
