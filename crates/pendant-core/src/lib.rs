//! # pendant-core
//!
//! Core framework for syntax-tree style linting.
//!
//! This crate provides the foundational types for building style/
//! documentation linters over parsed syntax trees supplied by a host:
//!
//! - [`SyntaxTree`]/[`SyntaxNode`] — the immutable tree contract the host
//!   materializes through [`TreeBuilder`] (parsing itself stays external)
//! - [`Rule`] trait for node-kind-dispatched rules
//! - [`Analyzer`] for driving one deterministic pre-order pass per tree
//! - [`Diagnostic`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use pendant_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .rule(MyRule::new())
//!     .build();
//!
//! let result = analyzer.analyze(&tree);
//! println!("{}", result.format_report());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod engine;
mod rule;
mod session_log;
mod tree;
mod types;

/// Documentation-comment classification helpers for rule implementations.
pub mod trivia;

pub use config::{Config, ConfigError, RuleConfig};
pub use engine::{Analyzer, AnalyzerBuilder, CancellationToken};
pub use rule::{Rule, RuleBox, RuleDescriptor, RuleError};
pub use session_log::{LogEntry, SessionLog};
pub use tree::{NodeKind, Preorder, Span, SyntaxNode, SyntaxTree, Token, TreeBuilder};
pub use types::{
    AnalysisResult, Diagnostic, DiagnosticReport, Fault, Label, Location, Severity,
};
