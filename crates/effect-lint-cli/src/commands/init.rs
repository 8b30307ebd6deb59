//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# effect-lint configuration

# Preset: "recommended" or "strict"
preset = "recommended"

# Severity threshold for a failing exit code
# fail_on = "warning"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/coverage/**",
]

# Respect .gitignore files
respect_gitignore = true

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.named-effect-with-cleanup]
enabled = true
# severity = "error"  # Override default severity
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("effect-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created effect-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit effect-lint.toml to configure rules");
    println!("  2. Run: effect-lint check");

    Ok(())
}
