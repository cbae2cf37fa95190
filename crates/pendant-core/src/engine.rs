//! Rule engine: kind-keyed registry and single-pass tree dispatch.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::rule::{Rule, RuleBox};
use crate::session_log::SessionLog;
use crate::tree::{NodeKind, SyntaxTree};
use crate::types::{AnalysisResult, Fault};

/// Cooperative cancellation signal, checked between node visits.
///
/// Cloning shares the signal; any clone may cancel. Cancellation abandons
/// the current traversal cleanly, keeping diagnostics already reported.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    inner: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a fresh, un-cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals cancellation.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::Relaxed);
    }

    /// Returns true once cancellation has been signalled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
    config: Config,
    session_log: Option<Arc<SessionLog>>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with no rules registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule. Handlers run in registration order on each node.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Registers a boxed rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Registers several boxed rules, preserving order.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration (rule enablement and severity overrides).
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Attaches a host-owned session log; the engine appends one entry per
    /// reported diagnostic.
    #[must_use]
    pub fn session_log(mut self, log: Arc<SessionLog>) -> Self {
        self.session_log = Some(log);
        self
    }

    /// Builds the analyzer, freezing the kind → handler registry.
    #[must_use]
    pub fn build(self) -> Analyzer {
        let mut by_kind: HashMap<NodeKind, Vec<usize>> = HashMap::new();
        for (index, rule) in self.rules.iter().enumerate() {
            for &kind in rule.kinds() {
                by_kind.entry(kind).or_default().push(index);
            }
        }
        Analyzer {
            rules: self.rules,
            by_kind,
            config: self.config,
            session_log: self.session_log,
        }
    }
}

/// The rule engine.
///
/// The registry is built once and read-only afterwards; the analyzer is
/// shareable across threads, and independent trees may be analyzed
/// concurrently. Traversal within one tree is strictly sequential so that
/// diagnostic order is deterministic.
pub struct Analyzer {
    rules: Vec<RuleBox>,
    by_kind: HashMap<NodeKind, Vec<usize>>,
    config: Config,
    session_log: Option<Arc<SessionLog>>,
}

impl Analyzer {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes one tree to completion.
    #[must_use]
    pub fn analyze(&self, tree: &SyntaxTree) -> AnalysisResult {
        self.analyze_cancellable(tree, &CancellationToken::new())
    }

    /// Analyzes one tree, checking the token between node visits.
    ///
    /// On cancellation the traversal is abandoned cleanly: diagnostics
    /// already reported stay in the result and `cancelled` is set.
    #[must_use]
    pub fn analyze_cancellable(
        &self,
        tree: &SyntaxTree,
        cancel: &CancellationToken,
    ) -> AnalysisResult {
        info!("starting analysis, {} rule(s) registered", self.rules.len());
        let mut result = AnalysisResult::new();

        for node in tree.preorder() {
            if cancel.is_cancelled() {
                debug!("analysis cancelled, keeping {} diagnostic(s)", result.diagnostics.len());
                result.cancelled = true;
                break;
            }

            let Some(handlers) = self.by_kind.get(&node.kind()) else {
                continue;
            };

            for &index in handlers {
                let rule = &self.rules[index];
                if !self.config.is_rule_enabled(rule.name()) {
                    debug!("skipping disabled rule: {}", rule.name());
                    continue;
                }

                // A failing handler must not abort sibling handlers or the
                // rest of the traversal.
                match rule.check(node) {
                    Ok(diagnostics) => {
                        for mut diagnostic in diagnostics {
                            if let Some(severity) = self.config.rule_severity(rule.name()) {
                                diagnostic.severity = severity;
                            }
                            if let Some(log) = &self.session_log {
                                log.append(diagnostic.message.clone(), rule.category());
                            }
                            result.diagnostics.push(diagnostic);
                        }
                    }
                    Err(error) => {
                        warn!("rule {} failed: {error}", rule.name());
                        result.faults.push(Fault {
                            rule: rule.name().to_string(),
                            message: error.to_string(),
                        });
                    }
                }
            }
        }

        info!(
            "analysis complete: {} diagnostic(s), {} fault(s)",
            result.diagnostics.len(),
            result.faults.len()
        );
        result
    }
}
