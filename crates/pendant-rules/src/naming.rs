//! Naming convention rules.
//!
//! Nine independent checks, one per declaration kind, each inspecting only
//! the declaration's identifier token. No semantic resolution is performed:
//! a field named `9count` is still only checked on its first character.
//! Synthesized/missing identifiers (zero-length tokens) are skipped, never
//! indexed into.

use pendant_core::{
    Diagnostic, Label, Location, NodeKind, Rule, RuleError, SyntaxNode, Token,
};
use regex::Regex;

/// Category every naming rule reports under.
pub const CATEGORY: &str = "NamingConventions";

fn first_char(token: &Token) -> Option<char> {
    token.text.chars().next()
}

fn identifier_diagnostic(
    rule: &dyn Rule,
    code: &'static str,
    node: SyntaxNode<'_>,
    token: &Token,
    message: &str,
) -> Diagnostic {
    Diagnostic::new(
        code,
        rule.name(),
        rule.default_severity(),
        Location::of_span(node, token.span),
        message,
    )
}

/// NAM0007: class names should begin with a capital letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassNaming;

impl Rule for ClassNaming {
    fn name(&self) -> &'static str {
        "class-naming"
    }
    fn code(&self) -> &'static str {
        "NAM0007"
    }
    fn description(&self) -> &'static str {
        "Class names should begin with a capital letter"
    }
    fn category(&self) -> &'static str {
        CATEGORY
    }
    fn kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::ClassDecl]
    }

    fn check(&self, node: SyntaxNode<'_>) -> Result<Vec<Diagnostic>, RuleError> {
        let Some(token) = node.identifier() else {
            return Ok(Vec::new());
        };
        if first_char(token).is_some_and(char::is_lowercase) {
            return Ok(vec![identifier_diagnostic(
                self,
                self.code(),
                node,
                token,
                "Class names should begin with a capital letter",
            )]);
        }
        Ok(Vec::new())
    }
}

/// NAM0005: struct names should begin with a capital letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructNaming;

impl Rule for StructNaming {
    fn name(&self) -> &'static str {
        "struct-naming"
    }
    fn code(&self) -> &'static str {
        "NAM0005"
    }
    fn description(&self) -> &'static str {
        "Struct names should begin with a capital letter"
    }
    fn category(&self) -> &'static str {
        CATEGORY
    }
    fn kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::StructDecl]
    }

    fn check(&self, node: SyntaxNode<'_>) -> Result<Vec<Diagnostic>, RuleError> {
        let Some(token) = node.identifier() else {
            return Ok(Vec::new());
        };
        if first_char(token).is_some_and(char::is_lowercase) {
            return Ok(vec![identifier_diagnostic(
                self,
                self.code(),
                node,
                token,
                "Struct names should begin with a capital letter",
            )]);
        }
        Ok(Vec::new())
    }
}

/// NAM0006: enum names should begin with a capital letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumNaming;

impl Rule for EnumNaming {
    fn name(&self) -> &'static str {
        "enum-naming"
    }
    fn code(&self) -> &'static str {
        "NAM0006"
    }
    fn description(&self) -> &'static str {
        "Enum names should begin with a capital letter"
    }
    fn category(&self) -> &'static str {
        CATEGORY
    }
    fn kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::EnumDecl]
    }

    fn check(&self, node: SyntaxNode<'_>) -> Result<Vec<Diagnostic>, RuleError> {
        let Some(token) = node.identifier() else {
            return Ok(Vec::new());
        };
        if first_char(token).is_some_and(char::is_lowercase) {
            return Ok(vec![identifier_diagnostic(
                self,
                self.code(),
                node,
                token,
                "Enum names should begin with a capital letter",
            )]);
        }
        Ok(Vec::new())
    }
}

/// NAM0008: method names should begin with a capital letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodNaming;

impl Rule for MethodNaming {
    fn name(&self) -> &'static str {
        "method-naming"
    }
    fn code(&self) -> &'static str {
        "NAM0008"
    }
    fn description(&self) -> &'static str {
        "Method names should begin with a capital letter"
    }
    fn category(&self) -> &'static str {
        CATEGORY
    }
    fn kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::MethodDecl]
    }

    fn check(&self, node: SyntaxNode<'_>) -> Result<Vec<Diagnostic>, RuleError> {
        let Some(token) = node.identifier() else {
            return Ok(Vec::new());
        };
        if first_char(token).is_some_and(char::is_lowercase) {
            return Ok(vec![identifier_diagnostic(
                self,
                self.code(),
                node,
                token,
                "Method names should begin with a capital letter",
            )]);
        }
        Ok(Vec::new())
    }
}

/// NAM0003/NAM0004: interface names start with `I` followed by a capital.
///
/// The two conditions are independent: `itest` fires only NAM0003 (first
/// character is not `I`), `Itest` fires only NAM0004, `ITest` fires
/// neither. A single-character name `I` fires neither.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceNaming;

impl Rule for InterfaceNaming {
    fn name(&self) -> &'static str {
        "interface-naming"
    }
    fn code(&self) -> &'static str {
        "NAM0003"
    }
    fn description(&self) -> &'static str {
        "Interface names should start with an 'I' followed by a capital letter"
    }
    fn category(&self) -> &'static str {
        CATEGORY
    }
    fn kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::InterfaceDecl]
    }

    fn check(&self, node: SyntaxNode<'_>) -> Result<Vec<Diagnostic>, RuleError> {
        let Some(token) = node.identifier() else {
            return Ok(Vec::new());
        };
        let mut chars = token.text.chars();
        let Some(first) = chars.next() else {
            return Ok(Vec::new());
        };
        let second = chars.next();

        let mut diagnostics = Vec::new();
        if first != 'I' {
            diagnostics.push(identifier_diagnostic(
                self,
                "NAM0003",
                node,
                token,
                "Interfaces should start with an 'I'",
            ));
        }
        if first == 'I' && second.is_some_and(char::is_lowercase) {
            diagnostics.push(identifier_diagnostic(
                self,
                "NAM0004",
                node,
                token,
                "Interfaces should start with an 'I' and the second letter should be capital",
            ));
        }
        Ok(diagnostics)
    }
}

/// NAM0002: private fields should start with an underscore.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldNaming;

impl Rule for FieldNaming {
    fn name(&self) -> &'static str {
        "field-naming"
    }
    fn code(&self) -> &'static str {
        "NAM0002"
    }
    fn description(&self) -> &'static str {
        "Private fields should start with an underscore"
    }
    fn category(&self) -> &'static str {
        CATEGORY
    }
    fn kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::FieldDecl]
    }

    fn check(&self, node: SyntaxNode<'_>) -> Result<Vec<Diagnostic>, RuleError> {
        let Some(token) = node.identifier() else {
            return Ok(Vec::new());
        };
        match first_char(token) {
            Some('_') | None => Ok(Vec::new()),
            Some(_) => Ok(vec![identifier_diagnostic(
                self,
                self.code(),
                node,
                token,
                "Private Fields should start with an '_'",
            )]),
        }
    }
}

/// NAM0009: parameter names should be in camel case.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterNaming;

impl Rule for ParameterNaming {
    fn name(&self) -> &'static str {
        "parameter-naming"
    }
    fn code(&self) -> &'static str {
        "NAM0009"
    }
    fn description(&self) -> &'static str {
        "Parameter names should be in camel case"
    }
    fn category(&self) -> &'static str {
        CATEGORY
    }
    fn kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::ParameterDecl]
    }

    fn check(&self, node: SyntaxNode<'_>) -> Result<Vec<Diagnostic>, RuleError> {
        let Some(token) = node.identifier() else {
            return Ok(Vec::new());
        };
        match first_char(token) {
            Some(c) if !c.is_lowercase() => Ok(vec![identifier_diagnostic(
                self,
                self.code(),
                node,
                token,
                "Parameter names should be in camel case",
            )]),
            _ => Ok(Vec::new()),
        }
    }
}

/// NAM0010: local variable names should be in camel case.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalVariableNaming;

impl Rule for LocalVariableNaming {
    fn name(&self) -> &'static str {
        "local-variable-naming"
    }
    fn code(&self) -> &'static str {
        "NAM0010"
    }
    fn description(&self) -> &'static str {
        "Local variable names should be in camel case"
    }
    fn category(&self) -> &'static str {
        CATEGORY
    }
    fn kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::LocalVarDecl]
    }

    fn check(&self, node: SyntaxNode<'_>) -> Result<Vec<Diagnostic>, RuleError> {
        let Some(token) = node.identifier() else {
            return Ok(Vec::new());
        };
        match first_char(token) {
            Some(c) if !c.is_lowercase() => Ok(vec![identifier_diagnostic(
                self,
                self.code(),
                node,
                token,
                "Local variable names should be in camel case",
            )]),
            _ => Ok(Vec::new()),
        }
    }
}

/// NAM0001: short all-letter identifiers in property declarations.
///
/// Fires when the property's identifier, or any bare identifier reference
/// inside the property, is all letters and shorter than the threshold
/// (default 5). The threshold is a style heuristic, not a semantic check; it
/// can false-positive on legitimately short names, so it is configurable
/// rather than fixed.
#[derive(Debug, Clone)]
pub struct PropertyShortName {
    /// Identifiers shorter than this are flagged.
    pub threshold: usize,
    letters: Regex,
}

impl Default for PropertyShortName {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyShortName {
    /// Creates the rule with the default threshold of 5.
    #[must_use]
    pub fn new() -> Self {
        #[allow(clippy::expect_used)]
        let letters = Regex::new("^[A-Za-z]+$").expect("pattern is a valid literal");
        Self {
            threshold: 5,
            letters,
        }
    }

    /// Sets the length threshold.
    #[must_use]
    pub fn threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    fn is_short(&self, text: &str) -> bool {
        !text.is_empty() && self.letters.is_match(text) && text.len() < self.threshold
    }
}

impl Rule for PropertyShortName {
    fn name(&self) -> &'static str {
        "property-short-name"
    }
    fn code(&self) -> &'static str {
        "NAM0001"
    }
    fn description(&self) -> &'static str {
        "Flags short all-letter identifiers in property declarations"
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
                if self.is_short(&reference.text) {
                    labels.push(Label::new(
                        Location::of_span(descendant, reference.span),
                        reference.text.clone(),
                    ));
                }
            }
        }

        if labels.is_empty() && !self.is_short(&token.text) {
            return Ok(Vec::new());
        }

        Ok(vec![Diagnostic::new(
            self.code(),
            self.name(),
            self.default_severity(),
            Location::of_span(node, token.span),
            format!("Violation: {}", token.text),
        )
        .with_labels(labels)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pendant_core::{Span, SyntaxTree};

    fn decl_tree(kind: NodeKind, name: &str) -> SyntaxTree {
        let source = format!("{name} body");
        let len = source.len();
        let mut b = SyntaxTree::builder(source);
        b.start_node(kind, Span::new(0, len))
            .identifier(name, Span::new(0, name.len()))
            .finish_node();
        b.finish()
    }

    fn check_decl(rule: &dyn Rule, kind: NodeKind, name: &str) -> Vec<Diagnostic> {
        let tree = decl_tree(kind, name);
        let node = tree.root().children().next().expect("declaration node");
        rule.check(node).expect("rule check")
    }

    #[test]
    fn lowercase_class_name_fires_at_identifier() {
        let diagnostics = check_decl(&ClassNaming, NodeKind::ClassDecl, "widget");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "NAM0007");
        assert_eq!(diagnostics[0].location.offset, 0);
        assert_eq!(diagnostics[0].location.length, "widget".len());
    }

    #[test]
    fn capitalized_class_name_is_clean() {
        assert!(check_decl(&ClassNaming, NodeKind::ClassDecl, "Widget").is_empty());
    }

    #[test]
    fn struct_enum_method_share_the_predicate() {
        assert_eq!(
            check_decl(&StructNaming, NodeKind::StructDecl, "point")[0].code,
            "NAM0005"
        );
        assert_eq!(
            check_decl(&EnumNaming, NodeKind::EnumDecl, "color")[0].code,
            "NAM0006"
        );
        assert_eq!(
            check_decl(&MethodNaming, NodeKind::MethodDecl, "doWork")[0].code,
            "NAM0008"
        );
        assert!(check_decl(&MethodNaming, NodeKind::MethodDecl, "DoWork").is_empty());
    }

    #[test]
    fn interface_name_matrix() {
        let itest = check_decl(&InterfaceNaming, NodeKind::InterfaceDecl, "itest");
        assert_eq!(itest.len(), 1);
        assert_eq!(itest[0].code, "NAM0003");

        let capital_itest = check_decl(&InterfaceNaming, NodeKind::InterfaceDecl, "Itest");
        assert_eq!(capital_itest.len(), 1);
        assert_eq!(capital_itest[0].code, "NAM0004");

        assert!(check_decl(&InterfaceNaming, NodeKind::InterfaceDecl, "ITest").is_empty());
        assert!(check_decl(&InterfaceNaming, NodeKind::InterfaceDecl, "I").is_empty());
    }

    #[test]
    fn field_underscore_prefix() {
        let count = check_decl(&FieldNaming, NodeKind::FieldDecl, "count");
        assert_eq!(count.len(), 1);
        assert_eq!(count[0].code, "NAM0002");
        assert!(check_decl(&FieldNaming, NodeKind::FieldDecl, "_count").is_empty());
    }

    #[test]
    fn parameter_and_local_variable_casing() {
        assert_eq!(
            check_decl(&ParameterNaming, NodeKind::ParameterDecl, "Value")[0].code,
            "NAM0009"
        );
        assert!(check_decl(&ParameterNaming, NodeKind::ParameterDecl, "value").is_empty());
        assert_eq!(
            check_decl(&LocalVariableNaming, NodeKind::LocalVarDecl, "Total")[0].code,
            "NAM0010"
        );
        assert!(check_decl(&LocalVariableNaming, NodeKind::LocalVarDecl, "total").is_empty());
    }

    #[test]
    fn underscore_parameter_is_not_camel_case() {
        // '_' is not a lowercase letter; only the first character is checked.
        assert_eq!(
            check_decl(&ParameterNaming, NodeKind::ParameterDecl, "_value").len(),
            1
        );
    }

    #[test]
    fn empty_identifier_is_skipped() {
        assert!(check_decl(&ClassNaming, NodeKind::ClassDecl, "").is_empty());
        assert!(check_decl(&InterfaceNaming, NodeKind::InterfaceDecl, "").is_empty());
        assert!(check_decl(&FieldNaming, NodeKind::FieldDecl, "").is_empty());
        let rule = PropertyShortName::new();
        assert!(check_decl(&rule, NodeKind::PropertyDecl, "").is_empty());
    }

    #[test]
    fn short_property_references_are_labelled_in_document_order() {
        let source = "public int Value { get { return ab + cd; } }";
        let ab = source.find("ab").expect("ab");
        let cd = source.find("cd").expect("cd");
        let mut b = SyntaxTree::builder(source);
        b.start_node(NodeKind::PropertyDecl, Span::new(0, source.len()))
            .identifier("Value", Span::new(11, 5))
            .start_node(NodeKind::AccessorDecl, Span::new(19, 23))
            .start_node(NodeKind::IdentifierRef, Span::new(ab, 2))
            .identifier("ab", Span::new(ab, 2))
            .finish_node()
            .start_node(NodeKind::IdentifierRef, Span::new(cd, 2))
            .identifier("cd", Span::new(cd, 2))
            .finish_node()
            .finish_node()
            .finish_node();
        let tree = b.finish();
        let property = tree.root().children().next().expect("property");

        let diagnostics = PropertyShortName::new().check(property).expect("check");
        assert_eq!(diagnostics.len(), 1);
        let diagnostic = &diagnostics[0];
        assert_eq!(diagnostic.code, "NAM0001");
        assert_eq!(diagnostic.message, "Violation: Value");
        assert_eq!(diagnostic.location.offset, 11);
        assert_eq!(diagnostic.labels.len(), 2);
        assert_eq!(diagnostic.labels[0].message, "ab");
        assert_eq!(diagnostic.labels[1].message, "cd");
        assert!(diagnostic.labels[0].location.offset < diagnostic.labels[1].location.offset);
    }

    #[test]
    fn short_property_name_alone_fires_without_labels() {
        let rule = PropertyShortName::new();
        let diagnostics = check_decl(&rule, NodeKind::PropertyDecl, "Test");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Violation: Test");
        assert!(diagnostics[0].labels.is_empty());
    }

    #[test]
    fn long_or_non_letter_names_do_not_fire() {
        let rule = PropertyShortName::new();
        assert!(check_decl(&rule, NodeKind::PropertyDecl, "Balance").is_empty());
        // digits fail the all-letters pattern
        assert!(check_decl(&rule, NodeKind::PropertyDecl, "X1").is_empty());
    }

    #[test]
    fn threshold_is_configurable() {
        let strict = PropertyShortName::new().threshold(10);
        assert_eq!(check_decl(&strict, NodeKind::PropertyDecl, "Balance").len(), 1);
        let lax = PropertyShortName::new().threshold(2);
        assert!(check_decl(&lax, NodeKind::PropertyDecl, "Test").is_empty());
    }
}
