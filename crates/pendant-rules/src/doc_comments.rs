//! Documentation-comment rules.
//!
//! COM0002..COM0008 require an XML `<summary>` block on each declaration
//! kind; COM0001 flags a summary that is present but blank. COM0009 checks
//! parameter documentation on methods, and only once a summary exists at
//! all, so an entirely undocumented method reports the missing summary
//! alone rather than a pile-up.

use pendant_core::{trivia, Diagnostic, Location, NodeKind, Rule, RuleError, SyntaxNode};

/// Category every documentation rule reports under.
pub const CATEGORY: &str = "Comments";

/// Code for a summary that exists but has no content.
pub const BLANK_SUMMARY_CODE: &str = "COM0001";

const BLANK_SUMMARY_MESSAGE: &str =
    "Must include a summary in xml summary comment with no extra new lines.";

/// The declaration kind a [`RequireDocSummary`] instance targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTarget {
    /// Property declarations (COM0002).
    Property,
    /// Field declarations (COM0003).
    Field,
    /// Interface declarations (COM0004).
    Interface,
    /// Struct declarations (COM0005).
    Struct,
    /// Enum declarations (COM0006).
    Enum,
    /// Class declarations (COM0007).
    Class,
    /// Method declarations (COM0008).
    Method,
}

impl DocTarget {
    fn rule_name(self) -> &'static str {
        match self {
            Self::Property => "property-doc-summary",
            Self::Field => "field-doc-summary",
            Self::Interface => "interface-doc-summary",
            Self::Struct => "struct-doc-summary",
            Self::Enum => "enum-doc-summary",
            Self::Class => "class-doc-summary",
            Self::Method => "method-doc-summary",
        }
    }

    fn missing_code(self) -> &'static str {
        match self {
            Self::Property => "COM0002",
            Self::Field => "COM0003",
            Self::Interface => "COM0004",
            Self::Struct => "COM0005",
            Self::Enum => "COM0006",
            Self::Class => "COM0007",
            Self::Method => "COM0008",
        }
    }

    fn missing_message(self) -> &'static str {
        match self {
            Self::Property => "Properties must have an xml summary comment.",
            Self::Field => "Fields must have an xml summary comment.",
            Self::Interface => "Interfaces must have an xml summary comment.",
            Self::Struct => "Structs must have an xml summary comment.",
            Self::Enum => "Enums must have an xml summary comment.",
            Self::Class => "Classes must have an xml summary comment.",
            Self::Method => "Methods must have an xml summary comment.",
        }
    }

    fn kinds(self) -> &'static [NodeKind] {
        match self {
            Self::Property => &[NodeKind::PropertyDecl],
            Self::Field => &[NodeKind::FieldDecl],
            Self::Interface => &[NodeKind::InterfaceDecl],
            Self::Struct => &[NodeKind::StructDecl],
            Self::Enum => &[NodeKind::EnumDecl],
            Self::Class => &[NodeKind::ClassDecl],
            Self::Method => &[NodeKind::MethodDecl],
        }
    }
}

/// COM0001..COM0008: declarations must carry a non-blank `<summary>`.
///
/// One instance per declaration kind; a missing summary reports the kind's
/// own code, a blank one reports COM0001. Both are located at the whole
/// declaration.
#[derive(Debug, Clone, Copy)]
pub struct RequireDocSummary {
    target: DocTarget,
}

impl RequireDocSummary {
    /// Summary check for class declarations.
    #[must_use]
    pub fn class() -> Self {
        Self {
            target: DocTarget::Class,
        }
    }

    /// Summary check for struct declarations.
    #[must_use]
    pub fn struct_decl() -> Self {
        Self {
            target: DocTarget::Struct,
        }
    }

    /// Summary check for enum declarations.
    #[must_use]
    pub fn enum_decl() -> Self {
        Self {
            target: DocTarget::Enum,
        }
    }

    /// Summary check for interface declarations.
    #[must_use]
    pub fn interface() -> Self {
        Self {
            target: DocTarget::Interface,
        }
    }

    /// Summary check for method declarations.
    #[must_use]
    pub fn method() -> Self {
        Self {
            target: DocTarget::Method,
        }
    }

    /// Summary check for property declarations.
    #[must_use]
    pub fn property() -> Self {
        Self {
            target: DocTarget::Property,
        }
    }

    /// Summary check for field declarations.
    #[must_use]
    pub fn field() -> Self {
        Self {
            target: DocTarget::Field,
        }
    }

    /// The declaration kind this instance targets.
    #[must_use]
    pub fn target(&self) -> DocTarget {
        self.target
    }
}

impl Rule for RequireDocSummary {
    fn name(&self) -> &'static str {
        self.target.rule_name()
    }
    fn code(&self) -> &'static str {
        self.target.missing_code()
    }
    fn description(&self) -> &'static str {
        "Declarations must have an xml summary comment"
    }
    fn category(&self) -> &'static str {
        CATEGORY
    }
    fn kinds(&self) -> &'static [NodeKind] {
        self.target.kinds()
    }

    fn check(&self, node: SyntaxNode<'_>) -> Result<Vec<Diagnostic>, RuleError> {
        let doc = trivia::doc_comment_run(node.leading_trivia());
        let summary = doc.as_deref().and_then(trivia::summary_body);
        match summary {
            Some(body) if body.trim().is_empty() => Ok(vec![Diagnostic::new(
                BLANK_SUMMARY_CODE,
                self.name(),
                self.default_severity(),
                Location::of_node(node),
                BLANK_SUMMARY_MESSAGE,
            )]),
            Some(_) => Ok(Vec::new()),
            None => Ok(vec![Diagnostic::new(
                self.target.missing_code(),
                self.name(),
                self.default_severity(),
                Location::of_node(node),
                self.target.missing_message(),
            )]),
        }
    }
}

/// COM0009: every parameter of a documented method needs a non-blank
/// `<param>` entry.
///
/// Gated on the summary existing; undocumented methods are COM0008's
/// business. One diagnostic per method regardless of how many parameters
/// are undescribed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireParamDocs;

const PARAM_DOCS_MESSAGE: &str = "Parameters must have a definition in an xml summary comment.";

impl Rule for RequireParamDocs {
    fn name(&self) -> &'static str {
        "parameter-docs"
    }
    fn code(&self) -> &'static str {
        "COM0009"
    }
    fn description(&self) -> &'static str {
        "Method parameters must be documented"
    }
    fn category(&self) -> &'static str {
        CATEGORY
    }
    fn kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::MethodDecl]
    }

    fn check(&self, node: SyntaxNode<'_>) -> Result<Vec<Diagnostic>, RuleError> {
        let Some(doc) = trivia::doc_comment_run(node.leading_trivia()) else {
            return Ok(Vec::new());
        };
        if trivia::summary_body(&doc).is_none() {
            return Ok(Vec::new());
        }

        let mut violated = trivia::has_empty_element(&doc);
        for parameter in node.descendants() {
            if parameter.kind() != NodeKind::ParameterDecl {
                continue;
            }
            let Some(token) = parameter.identifier() else {
                continue;
            };
            if token.text.is_empty() {
                continue;
            }
            match trivia::param_description(&doc, &token.text) {
                Some(body) if !body.trim().is_empty() => {}
                _ => violated = true,
            }
        }

        if violated {
            Ok(vec![Diagnostic::new(
                self.code(),
                self.name(),
                self.default_severity(),
                Location::of_node(node),
                PARAM_DOCS_MESSAGE,
            )])
        } else {
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pendant_core::{Span, SyntaxTree};

    fn documented_decl(kind: NodeKind, trivia: &str) -> SyntaxTree {
        let source = "declaration body here";
        let mut b = SyntaxTree::builder(source);
        b.start_node(kind, Span::new(0, source.len()))
            .identifier("Name", Span::new(0, 4))
            .trivia(trivia)
            .finish_node();
        b.finish()
    }

    fn check_summary(rule: RequireDocSummary, kind: NodeKind, trivia: &str) -> Vec<Diagnostic> {
        let tree = documented_decl(kind, trivia);
        let node = tree.root().children().next().expect("declaration");
        rule.check(node).expect("rule check")
    }

    const GOOD_DOC: &str = "/// <summary>\n/// Does something.\n/// </summary>\n";
    const BLANK_DOC: &str = "/// <summary>\n/// </summary>\n";

    #[test]
    fn documented_class_is_clean() {
        assert!(check_summary(RequireDocSummary::class(), NodeKind::ClassDecl, GOOD_DOC).is_empty());
    }

    #[test]
    fn missing_summary_reports_the_kind_code() {
        let cases = [
            (RequireDocSummary::property(), NodeKind::PropertyDecl, "COM0002"),
            (RequireDocSummary::field(), NodeKind::FieldDecl, "COM0003"),
            (RequireDocSummary::interface(), NodeKind::InterfaceDecl, "COM0004"),
            (RequireDocSummary::struct_decl(), NodeKind::StructDecl, "COM0005"),
            (RequireDocSummary::enum_decl(), NodeKind::EnumDecl, "COM0006"),
            (RequireDocSummary::class(), NodeKind::ClassDecl, "COM0007"),
            (RequireDocSummary::method(), NodeKind::MethodDecl, "COM0008"),
        ];
        for (rule, kind, code) in cases {
            let diagnostics = check_summary(rule, kind, "");
            assert_eq!(diagnostics.len(), 1);
            assert_eq!(diagnostics[0].code, code);
        }
    }

    #[test]
    fn missing_summary_message_names_the_kind() {
        let diagnostics = check_summary(RequireDocSummary::class(), NodeKind::ClassDecl, "");
        assert_eq!(
            diagnostics[0].message,
            "Classes must have an xml summary comment."
        );
    }

    #[test]
    fn blank_summary_is_com0001() {
        let diagnostics = check_summary(RequireDocSummary::class(), NodeKind::ClassDecl, BLANK_DOC);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "COM0001");
        assert_eq!(
            diagnostics[0].message,
            "Must include a summary in xml summary comment with no extra new lines."
        );
    }

    #[test]
    fn plain_comment_is_not_a_summary() {
        let diagnostics = check_summary(
            RequireDocSummary::method(),
            NodeKind::MethodDecl,
            "// regular comment\n",
        );
        assert_eq!(diagnostics[0].code, "COM0008");
    }

    #[test]
    fn doc_run_without_summary_element_counts_as_missing() {
        let diagnostics = check_summary(
            RequireDocSummary::method(),
            NodeKind::MethodDecl,
            "/// just prose, no markers\n",
        );
        assert_eq!(diagnostics[0].code, "COM0008");
    }

    #[test]
    fn location_covers_the_whole_declaration() {
        let diagnostics = check_summary(RequireDocSummary::class(), NodeKind::ClassDecl, "");
        assert_eq!(diagnostics[0].location.offset, 0);
        assert_eq!(diagnostics[0].location.length, "declaration body here".len());
    }

    fn method_with_params(trivia: &str, params: &[&str]) -> SyntaxTree {
        let source = "void Work(...) { }";
        let mut b = SyntaxTree::builder(source);
        b.start_node(NodeKind::MethodDecl, Span::new(0, source.len()))
            .identifier("Work", Span::new(5, 4))
            .trivia(trivia)
            .start_node(NodeKind::ParameterList, Span::new(9, 5));
        for (i, name) in params.iter().enumerate() {
            b.start_node(NodeKind::ParameterDecl, Span::new(10 + i, 1))
                .identifier(*name, Span::new(10 + i, 1))
                .finish_node();
        }
        b.finish_node().finish_node();
        b.finish()
    }

    fn check_params(trivia: &str, params: &[&str]) -> Vec<Diagnostic> {
        let tree = method_with_params(trivia, params);
        let method = tree.root().children().next().expect("method");
        RequireParamDocs.check(method).expect("rule check")
    }

    const FULL_DOC: &str = "/// <summary>Adds.</summary>\n/// <param name=\"left\">Left operand.</param>\n/// <param name=\"right\">Right operand.</param>\n";

    #[test]
    fn fully_documented_parameters_are_clean() {
        assert!(check_params(FULL_DOC, &["left", "right"]).is_empty());
    }

    #[test]
    fn missing_param_entry_fires_once() {
        let doc = "/// <summary>Adds.</summary>\n/// <param name=\"left\">Left operand.</param>\n";
        let diagnostics = check_params(doc, &["left", "right"]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "COM0009");
        assert_eq!(
            diagnostics[0].message,
            "Parameters must have a definition in an xml summary comment."
        );
    }

    #[test]
    fn empty_param_body_fires() {
        let doc = "/// <summary>Adds.</summary>\n/// <param name=\"left\"></param>\n";
        let diagnostics = check_params(doc, &["left"]);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn several_undocumented_parameters_still_one_diagnostic() {
        let doc = "/// <summary>Adds.</summary>\n";
        assert_eq!(check_params(doc, &["a", "b", "c"]).len(), 1);
    }

    #[test]
    fn undocumented_method_is_out_of_scope() {
        // No summary at all: the missing-summary rule owns that report.
        assert!(check_params("", &["left"]).is_empty());
        assert!(check_params("// note\n", &["left"]).is_empty());
    }

    #[test]
    fn parameterless_documented_method_is_clean() {
        assert!(check_params("/// <summary>Runs.</summary>\n", &[]).is_empty());
    }
}
