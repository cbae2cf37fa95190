//! # pendant-rules
//!
//! Built-in style and documentation rules for the pendant engine.
//!
//! | Code | Rule | Checks |
//! |------|------|--------|
//! | NAM0001 | `property-short-name` | short all-letter identifiers in properties |
//! | NAM0002 | `field-naming` | fields start with `_` |
//! | NAM0003/NAM0004 | `interface-naming` | interfaces start with `I` + capital |
//! | NAM0005 | `struct-naming` | structs start with a capital |
//! | NAM0006 | `enum-naming` | enums start with a capital |
//! | NAM0007 | `class-naming` | classes start with a capital |
//! | NAM0008 | `method-naming` | methods start with a capital |
//! | NAM0009 | `parameter-naming` | parameters are camel case |
//! | NAM0010 | `local-variable-naming` | locals are camel case |
//! | COM0001..COM0008 | `*-doc-summary` | XML summary present and non-blank |
//! | COM0009 | `parameter-docs` | parameters documented |
//! | PSR0001 | `property-self-reference` | getters do not reference the property |
//! | INP0001 | `flagged-base-interface` | flagged interfaces not in base lists |
//! | IDE0011 | `statement-nesting` | nested statements are braced |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod doc_comments;
pub mod flagged_base;
pub mod naming;
pub mod presets;
pub mod registry;
pub mod self_reference;
pub mod statement_nesting;

pub use doc_comments::{DocTarget, RequireDocSummary, RequireParamDocs};
pub use flagged_base::FlaggedBaseInterface;
pub use naming::{
    ClassNaming, EnumNaming, FieldNaming, InterfaceNaming, LocalVariableNaming, MethodNaming,
    ParameterNaming, PropertyShortName, StructNaming,
};
pub use presets::{all_rules, configured_rules};
pub use registry::{descriptor, descriptors};
pub use self_reference::PropertySelfReference;
pub use statement_nesting::StatementNesting;
