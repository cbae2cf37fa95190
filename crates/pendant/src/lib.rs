//! # pendant
//!
//! Style and documentation linting over host-supplied syntax trees.
//!
//! The host parses source files and materializes them through
//! [`TreeBuilder`]; the engine runs the built-in rules over each tree in one
//! deterministic pass.
//!
//! ## Example
//!
//! ```
//! use pendant::{Analyzer, NodeKind, Span, SyntaxTree};
//!
//! let source = "class widget { }";
//! let mut builder = SyntaxTree::builder(source);
//! builder
//!     .start_node(NodeKind::ClassDecl, Span::new(0, source.len()))
//!     .identifier("widget", Span::new(6, 6))
//!     .finish_node();
//! let tree = builder.finish();
//!
//! let analyzer = Analyzer::builder().rules(pendant::rules::all_rules()).build();
//! let result = analyzer.analyze(&tree);
//! assert!(result.diagnostics.iter().any(|d| d.code == "NAM0007"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use pendant_core::{
    Analyzer, AnalyzerBuilder, AnalysisResult, CancellationToken, Config, ConfigError,
    Diagnostic, DiagnosticReport, Fault, Label, Location, LogEntry, NodeKind, Preorder, Rule,
    RuleBox, RuleConfig, RuleDescriptor, RuleError, SessionLog, Severity, Span, SyntaxNode,
    SyntaxTree, Token, TreeBuilder, trivia,
};

/// The built-in rule set.
pub mod rules {
    pub use pendant_rules::*;
}
