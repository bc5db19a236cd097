pub use trimics_core::config::*;

use crate::cli::Cli;

/// ## Summary
/// Loads layered settings, then applies command-line overrides on top.
///
/// Flags only ever switch features on; `-v` raises the log level to `debug`.
///
/// ## Errors
/// Returns an error if the configuration sources cannot be loaded.
pub fn resolve(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings = load_config()?;
    apply_cli(&mut settings, cli);
    Ok(settings)
}

/// Overlays command-line options onto loaded settings.
pub fn apply_cli(settings: &mut Settings, cli: &Cli) {
    let trim = &mut settings.trim;
    if let Some(months) = cli.months_before {
        trim.months_before = months;
    }
    trim.strip_extensions |= cli.strip_extensions;
    trim.keep_timezones |= cli.keep_timezones;
    if let Some(prodid) = &cli.prodid {
        trim.prodid.clone_from(prodid);
    }
    if cli.verbose {
        settings.logging.level = "debug".to_string();
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn defaults() -> Settings {
        Settings::from_toml_str("").unwrap()
    }

    #[test]
    fn no_flags_keep_loaded_settings() {
        let mut settings = Settings::from_toml_str("[trim]\nmonths_before = 3\n").unwrap();
        let cli = Cli::parse_from(["trimics", "-i", "a", "-o", "b"]);
        apply_cli(&mut settings, &cli);

        assert_eq!(settings.trim.months_before, 3);
        assert!(!settings.trim.strip_extensions);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn flags_override() {
        let mut settings = defaults();
        let cli = Cli::parse_from([
            "trimics",
            "-i",
            "a",
            "-o",
            "b",
            "-v",
            "-s",
            "-m",
            "1",
            "--keep-timezones",
            "--prodid",
            "-//X//EN",
        ]);
        apply_cli(&mut settings, &cli);

        assert_eq!(settings.trim.months_before, 1);
        assert!(settings.trim.strip_extensions);
        assert!(settings.trim.keep_timezones);
        assert_eq!(settings.trim.prodid, "-//X//EN");
        assert_eq!(settings.logging.level, "debug");
    }
}
