//! Form domain layer
//!
//! Headless model of the signup form: typed fields, dependent groups, and the
//! dependency rules that keep them consistent. Nothing here touches the
//! terminal.

mod document;
mod field;
mod rules;

pub use document::{FieldGroup, FormDocument, GroupId};
pub use field::{FieldId, FieldKind, FormField, SelectOption};
pub use rules::{DependencyEngine, DependencyRule, GroupTransition, RuleBinding, ShowWhen};
