//! Statement nesting rule.
//!
//! A statement whose parent is another plain statement is a single-line
//! body without braces (`if (x) DoSomething();`). Braced bodies introduce a
//! block node between the two, so they never match.

use pendant_core::{Diagnostic, Location, NodeKind, Rule, RuleError, SyntaxNode};

/// Category the nesting rule reports under.
pub const CATEGORY: &str = "Style";

const MESSAGE: &str = "Statements nested inside another statement must be enclosed in a block";

/// IDE0011: nested statements must be enclosed in a block.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementNesting;

impl Rule for StatementNesting {
    fn name(&self) -> &'static str {
        "statement-nesting"
    }
    fn code(&self) -> &'static str {
        "IDE0011"
    }
    fn description(&self) -> &'static str {
        "Nested statements must be enclosed in a block"
    }
    fn category(&self) -> &'static str {
        CATEGORY
    }
    fn kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::Statement, NodeKind::LocalVarDecl]
    }

    fn check(&self, node: SyntaxNode<'_>) -> Result<Vec<Diagnostic>, RuleError> {
        let Some(parent) = node.parent() else {
            return Ok(Vec::new());
        };
        if parent.kind() != NodeKind::Statement {
            return Ok(Vec::new());
        }

        let location = match node.first_token() {
            Some(token) => Location::of_span(node, token.span),
            None => Location::of_node(node),
        };
        Ok(vec![Diagnostic::new(
            self.code(),
            self.name(),
            self.default_severity(),
            location,
            MESSAGE,
        )])
    }
}
