use color_eyre::eyre::{bail, Result};
use drainwatch_platform::default_usage_access;

use crate::cli::Gender;
use crate::config::preferences_path;
use crate::data::{complete_onboarding, Preferences};

fn validate(name: &str, age: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Name must not be empty");
    }
    if age.is_empty() || !age.chars().all(|c| c.is_ascii_digit()) {
        bail!("Age must be a whole number, got {:?}", age);
    }
    Ok(())
}

pub fn run(name: &str, age: &str, gender: Gender) -> Result<()> {
    validate(name, age)?;

    let access = default_usage_access();
    if !access.has_usage_access() {
        bail!("{}", access.grant_instructions());
    }

    let mut prefs = Preferences::load(preferences_path())?;
    let profile = complete_onboarding(&mut prefs, name, age, gender.is_male())?;

    println!(
        "Saved profile for {} (age {}) to {}",
        profile.name,
        profile.age,
        prefs.path().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(validate("Ada", "36").is_ok());
        assert!(validate("  ", "36").is_err());
        assert!(validate("Ada", "").is_err());
        assert!(validate("Ada", "3x").is_err());
        assert!(validate("Ada", "-4").is_err());
    }
}
