//! Outcome of a dependency check.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::detection::ToolInfo;

/// Result of [`check`](crate::requirements::check).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolutionResult {
    /// Everything verifiable is installed.
    Satisfied {
        /// Every tool that was found, keyed by canonical name.
        tools: BTreeMap<String, ToolInfo>,
    },
    /// Something is missing; here is how to install it.
    Missing(Instructions),
}

impl ResolutionResult {
    /// Whether nothing is missing.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied { .. })
    }

    /// Missing canonical names (empty when satisfied).
    pub fn missing(&self) -> &[String] {
        match self {
            Self::Satisfied { .. } => &[],
            Self::Missing(instructions) => &instructions.missing,
        }
    }
}

/// Commands that would install the missing dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instructions {
    /// Canonical names that are missing, in table order.
    pub missing: Vec<String>,
    /// Platform package names to install, sorted and deduplicated.
    pub packages: Vec<String>,
    /// Shell command lines, in execution order.
    pub commands: Vec<String>,
}

impl Instructions {
    /// Lines of the human-readable report.
    ///
    /// `location` names the system in the "On ..., you can install" line:
    /// the release codename when known, otherwise the platform name.
    pub fn report_lines(&self, location: &str) -> Vec<String> {
        let pronoun = if self.packages.len() == 1 { "it" } else { "them" };
        let mut lines = vec![
            String::new(),
            format!("missing dependencies: {}", self.packages.join(" ")),
            format!("On {}, you can install {} with:", location, pronoun),
            String::new(),
        ];
        lines.extend(self.commands.iter().map(|c| format!("    $ {}", c)));
        lines.push(String::new());
        lines.push("Then, try ./configure again".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instructions(packages: &[&str]) -> Instructions {
        Instructions {
            missing: packages.iter().map(|s| s.to_string()).collect(),
            packages: packages.iter().map(|s| s.to_string()).collect(),
            commands: vec![format!("brew install {}", packages.join(" "))],
        }
    }

    #[test]
    fn report_for_single_package() {
        let lines = instructions(&["ninja"]).report_lines("macOS");
        assert_eq!(
            lines,
            vec![
                "",
                "missing dependencies: ninja",
                "On macOS, you can install it with:",
                "",
                "    $ brew install ninja",
                "",
                "Then, try ./configure again",
            ]
        );
    }

    #[test]
    fn report_for_several_packages_uses_them() {
        let lines = instructions(&["gn", "ninja"]).report_lines("bookworm");
        assert_eq!(lines[2], "On bookworm, you can install them with:");
    }

    #[test]
    fn missing_accessor() {
        let satisfied = ResolutionResult::Satisfied {
            tools: BTreeMap::new(),
        };
        assert!(satisfied.is_satisfied());
        assert!(satisfied.missing().is_empty());

        let missing = ResolutionResult::Missing(instructions(&["ninja"]));
        assert!(!missing.is_satisfied());
        assert_eq!(missing.missing(), ["ninja".to_string()]);
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(ResolutionResult::Missing(instructions(&["ninja"]))).unwrap();
        assert_eq!(json["status"], "missing");
        assert_eq!(json["packages"][0], "ninja");

        let json = serde_json::to_value(ResolutionResult::Satisfied {
            tools: BTreeMap::from([("gn".to_string(), ToolInfo::new("/usr/bin/gn", None))]),
        })
        .unwrap();
        assert_eq!(json["status"], "satisfied");
        assert_eq!(json["tools"]["gn"]["path"], "/usr/bin/gn");
    }
}
