//! Property self-reference rule.
//!
//! A getter written as `public int Test { get { return Test; } }` recurses
//! at runtime; the match here is purely textual, so a shadowing local with
//! the same name is also flagged. Accepted trade-off for a syntax-only
//! engine.

use pendant_core::{Diagnostic, Label, Location, NodeKind, Rule, RuleError, SyntaxNode};

/// Category the self-reference rule reports under.
pub const CATEGORY: &str = "PropertySelfReference";

const MESSAGE: &str = "Properties should not be referencing themselves, check your getter.";

/// PSR0001: a property body must not reference the property's own name.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertySelfReference;

impl Rule for PropertySelfReference {
    fn name(&self) -> &'static str {
        "property-self-reference"
    }
    fn code(&self) -> &'static str {
        "PSR0001"
    }
    fn description(&self) -> &'static str {
        "Property accessors must not reference the property itself"
    }
    fn category(&self) -> &'static str {
        CATEGORY
    }
    fn kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::PropertyDecl]
    }

    fn check(&self, node: SyntaxNode<'_>) -> Result<Vec<Diagnostic>, RuleError> {
        let Some(token) = node.identifier() else {
            return Ok(Vec::new());
        };
        if token.text.is_empty() {
            return Ok(Vec::new());
        }

        let mut labels = Vec::new();
        for descendant in node.descendants() {
            if descendant.kind() != NodeKind::IdentifierRef {
                continue;
            }
            if let Some(reference) = descendant.identifier() {
                if reference.text == token.text {
                    labels.push(Label::new(
                        Location::of_span(descendant, reference.span),
                        reference.text.clone(),
                    ));
                }
            }
        }

        if labels.is_empty() {
            return Ok(Vec::new());
        }

        Ok(vec![Diagnostic::new(
            self.code(),
            self.name(),
            self.default_severity(),
            Location::of_span(node, token.span),
            MESSAGE,
        )
        .with_labels(labels)])
    }
}
