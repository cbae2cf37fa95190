//! Flagged base-interface rule.
//!
//! Matches base-list entries by name text only; an interface that merely
//! shares a flagged name is indistinguishable from the real one without
//! semantic binding, which this engine does not do.

use pendant_core::{Diagnostic, Location, NodeKind, Rule, RuleError, SyntaxNode};

/// Category the base-interface rule reports under.
pub const CATEGORY: &str = "InterfaceImplementation";

/// INP0001: classes must not list a flagged interface among their bases.
#[derive(Debug, Clone)]
pub struct FlaggedBaseInterface {
    flagged: Vec<String>,
}

impl Default for FlaggedBaseInterface {
    fn default() -> Self {
        Self::new()
    }
}

impl FlaggedBaseInterface {
    /// Creates the rule with the default flagged set:
    /// `INotifyPropertyChanged`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            flagged: vec!["INotifyPropertyChanged".to_string()],
        }
    }

    /// Replaces the flagged-name set.
    #[must_use]
    pub fn flagged(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.flagged = names.into_iter().collect();
        self
    }

    /// Adds one name to the flagged set.
    #[must_use]
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.flagged.push(name.into());
        self
    }
}

impl Rule for FlaggedBaseInterface {
    fn name(&self) -> &'static str {
        "flagged-base-interface"
    }
    fn code(&self) -> &'static str {
        "INP0001"
    }
    fn description(&self) -> &'static str {
        "Classes must not implement flagged interfaces directly"
    }
    fn category(&self) -> &'static str {
        CATEGORY
    }
    fn kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::ClassDecl]
    }

    fn check(&self, node: SyntaxNode<'_>) -> Result<Vec<Diagnostic>, RuleError> {
        let mut diagnostics = Vec::new();
        for base_list in node.children().filter(|c| c.kind() == NodeKind::BaseList) {
            for entry in base_list.descendants() {
                if entry.kind() != NodeKind::IdentifierRef {
                    continue;
                }
                let Some(token) = entry.identifier() else {
                    continue;
                };
                if self.flagged.iter().any(|f| f == &token.text) {
                    diagnostics.push(Diagnostic::new(
                        self.code(),
                        self.name(),
                        self.default_severity(),
                        Location::of_span(entry, token.span),
                        format!("Classes should not declare '{}' in their base list", token.text),
                    ));
                }
            }
        }
        Ok(diagnostics)
    }
}
