//! Static descriptor table for every diagnostic code the built-in rules
//! can emit.
//!
//! The host renders diagnostics from these rows; codes are stable across
//! releases, titles and templates are display text only.

use pendant_core::{RuleDescriptor, Severity};

const NAMING_TITLE: &str = "Naming Convention Violation";
const COMMENT_TITLE: &str = "Xml Comment Violation";

static DESCRIPTORS: [RuleDescriptor; 22] = [
    RuleDescriptor {
        code: "NAM0001",
        title: NAMING_TITLE,
        message_template: "Violation: {0}",
        category: "NamingConventions",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "NAM0002",
        title: NAMING_TITLE,
        message_template: "Private Fields should start with an '_'",
        category: "NamingConventions",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "NAM0003",
        title: NAMING_TITLE,
        message_template: "Interfaces should start with an 'I'",
        category: "NamingConventions",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "NAM0004",
        title: NAMING_TITLE,
        message_template: "Interfaces should start with an 'I' and the second letter should be capital",
        category: "NamingConventions",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "NAM0005",
        title: NAMING_TITLE,
        message_template: "Struct names should begin with a capital letter",
        category: "NamingConventions",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "NAM0006",
        title: NAMING_TITLE,
        message_template: "Enum names should begin with a capital letter",
        category: "NamingConventions",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "NAM0007",
        title: NAMING_TITLE,
        message_template: "Class names should begin with a capital letter",
        category: "NamingConventions",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "NAM0008",
        title: NAMING_TITLE,
        message_template: "Method names should begin with a capital letter",
        category: "NamingConventions",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "NAM0009",
        title: NAMING_TITLE,
        message_template: "Parameter names should be in camel case",
        category: "NamingConventions",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "NAM0010",
        title: NAMING_TITLE,
        message_template: "Local variable names should be in camel case",
        category: "NamingConventions",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "COM0001",
        title: COMMENT_TITLE,
        message_template: "Must include a summary in xml summary comment with no extra new lines.",
        category: "Comments",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "COM0002",
        title: COMMENT_TITLE,
        message_template: "Properties must have an xml summary comment.",
        category: "Comments",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "COM0003",
        title: COMMENT_TITLE,
        message_template: "Fields must have an xml summary comment.",
        category: "Comments",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "COM0004",
        title: COMMENT_TITLE,
        message_template: "Interfaces must have an xml summary comment.",
        category: "Comments",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "COM0005",
        title: COMMENT_TITLE,
        message_template: "Structs must have an xml summary comment.",
        category: "Comments",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "COM0006",
        title: COMMENT_TITLE,
        message_template: "Enums must have an xml summary comment.",
        category: "Comments",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "COM0007",
        title: COMMENT_TITLE,
        message_template: "Classes must have an xml summary comment.",
        category: "Comments",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "COM0008",
        title: COMMENT_TITLE,
        message_template: "Methods must have an xml summary comment.",
        category: "Comments",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "COM0009",
        title: COMMENT_TITLE,
        message_template: "Parameters must have a definition in an xml summary comment.",
        category: "Comments",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "PSR0001",
        title: "Property Self Reference Violation",
        message_template: "Properties should not be referencing themselves, check your getter.",
        category: "PropertySelfReference",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "INP0001",
        title: "Interface Implementation Violation",
        message_template: "Classes should not declare '{0}' in their base list",
        category: "InterfaceImplementation",
        severity: Severity::Warning,
    },
    RuleDescriptor {
        code: "IDE0011",
        title: "Statement Nesting Violation",
        message_template: "Statements nested inside another statement must be enclosed in a block",
        category: "Style",
        severity: Severity::Warning,
    },
];

/// All built-in diagnostic descriptors, in code order.
#[must_use]
pub fn descriptors() -> &'static [RuleDescriptor] {
    &DESCRIPTORS
}

/// Looks up the descriptor for one code.
#[must_use]
pub fn descriptor(code: &str) -> Option<&'static RuleDescriptor> {
    DESCRIPTORS.iter().find(|d| d.code == code)
}
