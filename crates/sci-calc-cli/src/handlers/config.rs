//! Config command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::ConfigArgs;
use sci_calc::EngineConfig;
use std::io::Write;

/// Execute the config command
pub fn execute_config<W: Write>(config: &CliConfig, args: &ConfigArgs, out: &mut W) -> CliResult<()> {
    let engine = if args.defaults {
        EngineConfig::default()
    } else {
        config.load_engine_config()?
    };

    if config.verbosity.is_verbose() {
        print_cli_settings(config, out)?;
    }
    write!(out, "{}", engine.to_yaml()?)?;
    Ok(())
}

/// Print the CLI settings as YAML comments
pub fn print_cli_settings<W: Write>(config: &CliConfig, out: &mut W) -> CliResult<()> {
    writeln!(out, "# verbosity: {:?}", config.verbosity)?;
    writeln!(out, "# color: {:?}", config.color)?;
    match &config.engine_config {
        Some(path) => writeln!(out, "# source: {}", path.display())?,
        None => writeln!(out, "# source: built-in defaults")?,
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::Verbosity;
    use std::io::Write as _;
    use std::path::PathBuf;

    fn run(config: &CliConfig, defaults: bool) -> CliResult<String> {
        let mut out = Vec::new();
        execute_config(config, &ConfigArgs { defaults }, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_execute_config_defaults() {
        let output = run(&CliConfig::new(), false).unwrap();
        assert!(output.contains("error_revert_ms: 2000"));
        assert!(output.contains("off_text: Calculator Off"));
        assert!(!output.contains("# source"));
    }

    #[test]
    fn test_execute_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "message_revert_ms: 250").unwrap();
        let config = CliConfig::new().with_engine_config(Some(file.path().to_path_buf()));

        assert!(run(&config, false).unwrap().contains("message_revert_ms: 250"));
        assert!(run(&config, true).unwrap().contains("message_revert_ms: 1000"));
    }

    #[test]
    fn test_execute_config_verbose_shows_source() {
        let config = CliConfig::new().with_verbosity(Verbosity::Verbose);
        let output = run(&config, false).unwrap();
        assert!(output.contains("# source: built-in defaults"));
    }

    #[test]
    fn test_execute_config_missing_file() {
        let config = CliConfig::new().with_engine_config(Some(PathBuf::from("/missing.yaml")));
        assert!(run(&config, false).is_err());
        assert!(run(&config, true).is_ok());
    }
}
