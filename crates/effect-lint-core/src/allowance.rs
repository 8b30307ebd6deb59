//! Comment-based allowance directives.
//!
//! Supports directives like:
//! ```text
//! // effect-lint: allow(named-effect-with-cleanup) reason="subscription owned by router"
//! ```
//!
//! A directive on the flagged line, or on the line directly above it,
//! suppresses the named rule for that line.

use std::collections::HashSet;

/// Result of checking for an allow directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowCheck {
    /// Rule is not allowed.
    Denied,
    /// Rule is allowed with optional reason.
    Allowed {
        /// The reason provided (if any).
        reason: Option<String>,
    },
}

impl AllowCheck {
    /// Returns true if allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Returns the reason if allowed.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allowed { reason } => reason.as_deref(),
            Self::Denied => None,
        }
    }
}

/// Parsed allowance directive.
#[derive(Debug, Clone)]
struct AllowDirective {
    /// Rule names that are allowed.
    rules: HashSet<String>,
    /// Optional reason for the allowance.
    reason: Option<String>,
}

/// Checks source code for an allowance comment covering `line`.
///
/// # Arguments
///
/// * `content` - Source code content
/// * `line` - Line number to check (1-indexed)
/// * `rule_name` - Name of the rule to check for
///
/// # Returns
///
/// `AllowCheck::Allowed` with optional reason if a directive is found
/// for the rule (or for `all`).
#[must_use]
pub fn check_allow_with_reason(content: &str, line: usize, rule_name: &str) -> AllowCheck {
    let lines: Vec<&str> = content.lines().collect();

    for check_line in [line.saturating_sub(1), line] {
        if check_line == 0 || check_line > lines.len() {
            continue;
        }

        let line_content = lines[check_line - 1];
        if let Some(directive) = parse_allow_directive(line_content) {
            if directive.rules.contains(rule_name) || directive.rules.contains("all") {
                return AllowCheck::Allowed {
                    reason: directive.reason,
                };
            }
        }
    }

    AllowCheck::Denied
}

/// Parses an allowance directive from a line of source.
///
/// The directive may follow code on the same line
/// (`effect(fn); // effect-lint: allow(...)`), so the `//` is searched
/// anywhere in the line, not only at its start.
fn parse_allow_directive(line: &str) -> Option<AllowDirective> {
    let comment_start = line.find("//")?;
    let comment_content = line[comment_start + 2..].trim();

    let directive = comment_content.strip_prefix("effect-lint:")?.trim();
    let allow_content = directive.strip_prefix("allow(")?.trim();

    let paren_end = allow_content.find(')')?;
    let rules_str = &allow_content[..paren_end];

    let rules: HashSet<String> = rules_str
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if rules.is_empty() {
        return None;
    }

    let rest = allow_content[paren_end + 1..].trim();
    let reason = if let Some(reason_part) = rest.strip_prefix("reason=") {
        let reason_part = reason_part.trim();
        if reason_part.starts_with('"') && reason_part.len() > 1 {
            let end = reason_part[1..].find('"').map(|i| i + 1)?;
            Some(reason_part[1..end].to_string())
        } else {
            None
        }
    } else {
        None
    };

    Some(AllowDirective { rules, reason })
}
