//! Check command implementation.

use anyhow::{Context, Result};
use std::path::Path;

use effect_lint_core::{CallRuleBox, Config};
use effect_lint_js::Analyzer;
use effect_lint_rules::{recommended_rules, Preset};

use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    excludes: Vec<String>,
    explicit_config: Option<&Path>,
) -> Result<()> {
    let config = match crate::config_file::find_config(path, explicit_config) {
        Some(file) => file.load()?,
        None => Config::default(),
    };

    let rules = select_rules(&config, rules_filter.as_deref());
    anyhow::ensure!(!rules.is_empty(), "no rules selected");

    let root = if config.analyzer.root == Path::new(".") {
        path.to_path_buf()
    } else if config.analyzer.root.is_absolute() {
        config.analyzer.root.clone()
    } else {
        path.join(&config.analyzer.root)
    };

    let fail_on = config.fail_on_severity();

    let mut builder = Analyzer::builder()
        .root(root)
        .excludes(excludes)
        .config(config);
    for rule in rules {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;
    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, format, analyzer.root())?;

    if result.has_diagnostics_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Selects rules from the configured preset, then applies `--rules`.
fn select_rules(config: &Config, filter: Option<&str>) -> Vec<CallRuleBox> {
    let rules = config
        .preset
        .as_deref()
        .and_then(Preset::from_name)
        .map_or_else(recommended_rules, Preset::rules);

    let Some(filter) = filter else {
        return rules;
    };

    let wanted: Vec<&str> = filter
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    rules
        .into_iter()
        .filter(|r| wanted.iter().any(|w| *w == r.name() || *w == r.code()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_rules_defaults_to_recommended() {
        let rules = select_rules(&Config::default(), None);
        assert!(!rules.is_empty());
    }

    #[test]
    fn select_rules_filters_by_name_or_code() {
        let by_name = select_rules(&Config::default(), Some("named-effect-with-cleanup"));
        assert_eq!(by_name.len(), 1);

        let by_code = select_rules(&Config::default(), Some("EL001"));
        assert_eq!(by_code.len(), 1);

        let none = select_rules(&Config::default(), Some("no-such-rule"));
        assert!(none.is_empty());
    }

    #[test]
    fn select_rules_honors_preset() {
        let mut config = Config::default();
        config.preset = Some("strict".to_string());
        let rules = select_rules(&config, None);
        assert!(rules
            .iter()
            .all(|r| r.default_severity() == effect_lint_core::Severity::Error));
    }
}
