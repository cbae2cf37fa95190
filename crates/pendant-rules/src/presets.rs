//! Ready-made rule sets.

use pendant_core::{Config, RuleBox};

use crate::doc_comments::{RequireDocSummary, RequireParamDocs};
use crate::flagged_base::FlaggedBaseInterface;
use crate::naming::{
    ClassNaming, EnumNaming, FieldNaming, InterfaceNaming, LocalVariableNaming, MethodNaming,
    ParameterNaming, PropertyShortName, StructNaming,
};
use crate::self_reference::PropertySelfReference;
use crate::statement_nesting::StatementNesting;

/// Every built-in rule with default options, in a fixed order: naming,
/// documentation, self-reference, interface implementation, nesting.
/// Registration order is part of the deterministic-output contract.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    with_options(PropertyShortName::new(), FlaggedBaseInterface::new())
}

/// Every built-in rule, with per-rule options taken from the configuration.
///
/// Enablement and severity overrides stay with the engine; only options
/// that shape a rule's behavior (thresholds, flagged-name lists) are
/// applied here.
#[must_use]
pub fn configured_rules(config: &Config) -> Vec<RuleBox> {
    let mut short_name = PropertyShortName::new();
    if let Some(rule_config) = config.rule_config("property-short-name") {
        let threshold = rule_config.get_int("threshold", 5);
        short_name = short_name.threshold(usize::try_from(threshold).unwrap_or(5));
    }

    let mut flagged = FlaggedBaseInterface::new();
    if let Some(rule_config) = config.rule_config("flagged-base-interface") {
        let names = rule_config.get_str_array("flagged");
        if !names.is_empty() {
            flagged = flagged.flagged(names);
        }
    }

    with_options(short_name, flagged)
}

fn with_options(short_name: PropertyShortName, flagged: FlaggedBaseInterface) -> Vec<RuleBox> {
    vec![
        Box::new(ClassNaming),
        Box::new(StructNaming),
        Box::new(EnumNaming),
        Box::new(InterfaceNaming),
        Box::new(MethodNaming),
        Box::new(FieldNaming),
        Box::new(ParameterNaming),
        Box::new(LocalVariableNaming),
        Box::new(short_name),
        Box::new(RequireDocSummary::class()),
        Box::new(RequireDocSummary::struct_decl()),
        Box::new(RequireDocSummary::enum_decl()),
        Box::new(RequireDocSummary::interface()),
        Box::new(RequireDocSummary::method()),
        Box::new(RequireDocSummary::property()),
        Box::new(RequireDocSummary::field()),
        Box::new(RequireParamDocs),
        Box::new(PropertySelfReference),
        Box::new(flagged),
        Box::new(StatementNesting),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pendant_core::NodeKind;

    #[test]
    fn all_rules_have_unique_names() {
        let rules = all_rules();
        let mut names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), rules.len());
    }

    #[test]
    fn all_rules_declare_kinds_and_categories() {
        for rule in all_rules() {
            assert!(!rule.kinds().is_empty(), "{} has no kinds", rule.name());
            assert!(!rule.category().is_empty(), "{} has no category", rule.name());
        }
    }

    #[test]
    fn preset_order_is_stable() {
        let rules = all_rules();
        assert_eq!(rules[0].name(), "class-naming");
        assert_eq!(rules.last().map(|r| r.name()), Some("statement-nesting"));
        assert_eq!(rules.len(), 20);
    }

    #[test]
    fn configured_threshold_reaches_the_rule() {
        let config = pendant_core::Config::parse(
            "[rules.property-short-name]\nthreshold = 3\n",
        )
        .expect("valid toml");
        let rules = configured_rules(&config);
        // the short-name rule is the only PropertyDecl-dispatched naming rule
        let short = rules
            .iter()
            .find(|r| r.name() == "property-short-name")
            .expect("present");
        assert_eq!(short.kinds(), [NodeKind::PropertyDecl].as_slice());
    }

    #[test]
    fn configured_flagged_list_replaces_default() {
        let config = pendant_core::Config::parse(
            "[rules.flagged-base-interface]\nflagged = [\"IDisposable\"]\n",
        )
        .expect("valid toml");
        let rules = configured_rules(&config);
        assert!(rules.iter().any(|r| r.name() == "flagged-base-interface"));
    }
}
