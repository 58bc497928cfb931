use crate::prelude::*;
use foobarqix_core::policy::DEFAULT_SEPARATOR;
use foobarqix_core::{PolicyConfig, Rule};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, clap::Parser)]
#[command(name = "custom")]
#[command(about = "Classify an integer with a policy described by flags or a TOML file")]
pub struct App {
    /// A positive integer (e.g., "15" or "007")
    pub input: String,

    /// TOML file with `separator`, `divisor` and `[[rules]]` entries
    #[arg(long, env = "FOOBARQIX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Mapping entry as KEY=LABEL; repeat in the order labels should appear.
    /// Replaces the rules from --config.
    #[arg(long = "rule", value_name = "KEY=LABEL", value_parser = parse_rule)]
    pub rules: Vec<Rule>,

    /// String used to join labels
    #[arg(long, env = "FOOBARQIX_SEPARATOR")]
    pub separator: Option<String>,

    /// Append a digit sum divisibility check for this divisor
    #[arg(long)]
    pub divisor: Option<u64>,
}

/// Module entry point
pub fn run(app: App, global: crate::Global) -> Result<()> {
    let file = match &app.config {
        Some(path) => Some(load_policy(path)?),
        None => None,
    };

    let config = resolve(file, app.rules, app.separator, app.divisor)?;
    log::debug!(
        "Using custom policy: {} rules, separator {:?}, divisor {:?}",
        config.rules.len(),
        config.separator,
        config.divisor
    );

    let composer = config.composer().map_err(Error::from)?;
    crate::output::classify_and_print(&composer, app.input, &global)
}

/// Read a policy from a TOML file
pub fn load_policy(path: &Path) -> Result<PolicyConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| f!("Failed to read policy file at {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| f!("Failed to parse policy file {}", path.display()))
}

/// Merge command line flags over an optional policy file
///
/// `--rule` flags replace the file's rules as a whole; `--separator` and
/// `--divisor` replace the file's values.
pub fn resolve(
    file: Option<PolicyConfig>,
    rules: Vec<Rule>,
    separator: Option<String>,
    divisor: Option<u64>,
) -> std::result::Result<PolicyConfig, Error> {
    let mut config = file.unwrap_or_else(|| PolicyConfig {
        separator: DEFAULT_SEPARATOR.to_string(),
        divisor: None,
        rules: Vec::new(),
    });

    if !rules.is_empty() {
        config.rules = rules;
    }
    if let Some(separator) = separator {
        config.separator = separator;
    }
    if divisor.is_some() {
        config.divisor = divisor;
    }

    if config.rules.is_empty() {
        return Err(Error::Config(
            "no rules configured; pass --rule KEY=LABEL or --config FILE".to_string(),
        ));
    }

    Ok(config)
}

/// Parse a `KEY=LABEL` flag value
fn parse_rule(value: &str) -> std::result::Result<Rule, Error> {
    let (key, label) = value
        .split_once('=')
        .ok_or_else(|| Error::InvalidRule(value.to_string()))?;

    let key: u64 = key
        .trim()
        .parse()
        .map_err(|_| Error::InvalidRule(value.to_string()))?;

    if key == 0 || label.is_empty() {
        return Err(Error::InvalidRule(value.to_string()));
    }

    Ok(Rule {
        key,
        label: label.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn rule(key: u64, label: &str) -> Rule {
        Rule {
            key,
            label: label.to_string(),
        }
    }

    // ============================================================================
    // parse_rule tests
    // ============================================================================

    #[test]
    fn test_parse_rule() {
        assert_eq!(parse_rule("3=Foo").unwrap(), rule(3, "Foo"));
    }

    #[test]
    fn test_parse_rule_keeps_label_verbatim() {
        assert_eq!(parse_rule("7=Qix = 7").unwrap(), rule(7, "Qix = 7"));
    }

    #[test]
    fn test_parse_rule_invalid() {
        for value in ["Foo", "x=Foo", "0=Zero", "3=", "-3=Neg"] {
            assert!(
                matches!(parse_rule(value), Err(Error::InvalidRule(_))),
                "{}",
                value
            );
        }
    }

    // ============================================================================
    // resolve tests
    // ============================================================================

    #[test]
    fn test_resolve_flags_only() {
        let config = resolve(None, vec![rule(2, "Two")], None, None).unwrap();
        assert_eq!(config.separator, DEFAULT_SEPARATOR);
        assert_eq!(config.divisor, None);
        assert_eq!(config.rules, vec![rule(2, "Two")]);
    }

    #[test]
    fn test_resolve_flags_override_file() {
        let file = foobarqix_core::Policy::InfQixFoo.config();
        let config = resolve(Some(file), vec![rule(2, "Two")], Some("/".to_string()), Some(4)).unwrap();

        assert_eq!(config.rules, vec![rule(2, "Two")]);
        assert_eq!(config.separator, "/");
        assert_eq!(config.divisor, Some(4));
    }

    #[test]
    fn test_resolve_keeps_file_values() {
        let file = foobarqix_core::Policy::InfQixFoo.config();
        let config = resolve(Some(file.clone()), Vec::new(), None, None).unwrap();
        assert_eq!(config, file);
    }

    #[test]
    fn test_resolve_requires_rules() {
        let result = resolve(None, Vec::new(), Some(", ".to_string()), None);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    // ============================================================================
    // load_policy tests
    // ============================================================================

    #[test]
    fn test_load_policy() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
separator = "; "
divisor = 8

[[rules]]
key = 8
label = "Inf"

[[rules]]
key = 7
label = "Qix"

[[rules]]
key = 3
label = "Foo"
"#
        )
        .unwrap();

        let config = load_policy(file.path()).unwrap();
        assert_eq!(config, foobarqix_core::Policy::InfQixFoo.config());

        let composer = config.composer().unwrap();
        assert_eq!(composer.process("8").unwrap(), "Inf; InfInf");
    }

    #[test]
    fn test_load_policy_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = load_policy(&dir.path().join("missing.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_policy_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "rules = \"not a list\"").unwrap();
        assert!(load_policy(file.path()).is_err());
    }
}
