//! Rule trait and static rule metadata.

use crate::tree::{NodeKind, SyntaxNode};
use crate::types::{Diagnostic, Severity};

/// Failure of a rule implementation on a single node.
///
/// This is the engine-fault channel: rules return it instead of panicking,
/// and the dispatcher records it without aborting analysis of sibling nodes
/// or other rules. Expected conditions (missing identifiers, absent doc
/// comments) are not faults; rules skip those silently.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The tree did not have the shape the rule requires.
    #[error("malformed syntax tree: {0}")]
    MalformedTree(String),
    /// Any other rule-internal failure.
    #[error("{0}")]
    Internal(String),
}

/// A single lint rule, dispatched by syntax-node kind.
///
/// Rules are pure functions of the node they receive: no mutable state, no
/// cross-invocation memory, safe to run concurrently over independent trees.
/// Immutable configuration (regular expressions, thresholds) is fine.
///
/// # Example
///
/// ```ignore
/// use pendant_core::{Diagnostic, Location, NodeKind, Rule, RuleError, Severity, SyntaxNode};
///
/// pub struct ClassNaming;
///
/// impl Rule for ClassNaming {
///     fn name(&self) -> &'static str { "class-naming" }
///     fn code(&self) -> &'static str { "NAM0007" }
///     fn kinds(&self) -> &'static [NodeKind] { &[NodeKind::ClassDecl] }
///
///     fn check(&self, node: SyntaxNode<'_>) -> Result<Vec<Diagnostic>, RuleError> {
///         // inspect node.identifier() ...
///         Ok(Vec::new())
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g. "class-naming").
    fn name(&self) -> &'static str;

    /// Returns the primary rule code (e.g. "NAM0007"). Codes are stable;
    /// message text may vary, the code never does.
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the diagnostic category this rule reports under.
    fn category(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for diagnostics from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// The node kinds this rule is dispatched on.
    fn kinds(&self) -> &'static [NodeKind];

    /// Checks a single node and returns any diagnostics found.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] only for rule-internal faults; pattern
    /// mismatches and syntactically-incomplete input yield `Ok(vec![])`.
    fn check(&self, node: SyntaxNode<'_>) -> Result<Vec<Diagnostic>, RuleError>;
}

/// Type alias for boxed [`Rule`] trait objects.
pub type RuleBox = Box<dyn Rule>;

/// Static metadata for one diagnostic code: the enumerable registry row the
/// host uses to render diagnostics without hardcoded locale text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDescriptor {
    /// Stable diagnostic code.
    pub code: &'static str,
    /// Title displayed when the diagnostic is shown.
    pub title: &'static str,
    /// Default message template; `{0}` is substituted with the
    /// rule-provided argument.
    pub message_template: &'static str,
    /// Category used to group diagnostics.
    pub category: &'static str,
    /// Default severity.
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{NodeKind, Span, SyntaxTree};
    use crate::types::Location;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }
        fn kinds(&self) -> &'static [NodeKind] {
            &[NodeKind::ClassDecl]
        }

        fn check(&self, node: SyntaxNode<'_>) -> Result<Vec<Diagnostic>, RuleError> {
            Ok(vec![Diagnostic::new(
                self.code(),
                self.name(),
                self.default_severity(),
                Location::of_node(node),
                "Test violation",
            )])
        }
    }

    #[test]
    fn rule_trait_defaults() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.category(), "");
        assert_eq!(rule.default_severity(), Severity::Warning);
    }

    #[test]
    fn check_reports_within_node_span() {
        let mut b = SyntaxTree::builder("class a { }");
        b.start_node(NodeKind::ClassDecl, Span::new(0, 11))
            .identifier("a", Span::new(6, 1))
            .finish_node();
        let tree = b.finish();
        let class = tree.root().children().next().expect("class node");

        let diagnostics = TestRule.check(class).expect("check succeeds");
        assert_eq!(diagnostics.len(), 1);
        let location = &diagnostics[0].location;
        assert!(location.offset >= class.span().start);
        assert!(location.offset + location.length <= class.span().end());
    }
}
