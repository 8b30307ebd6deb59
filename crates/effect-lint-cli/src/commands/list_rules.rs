//! List rules command implementation.

use effect_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<30} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<30} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nPresets:");
    println!("  recommended  - EL001 at warning severity (default)");
    println!("  strict       - all rules at error severity");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  effect-lint check --rules named-effect-with-cleanup");
    println!("  effect-lint check --rules EL001");
}
