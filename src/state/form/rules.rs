//! Field dependency engine
//!
//! Keeps each dependent group's visibility and required flags synchronized
//! with its discriminator field's current value. The engine only toggles
//! state on the document; submit-blocking and rendering belong to the
//! surrounding app and UI layers.

use super::document::{FormDocument, GroupId};
use super::field::FieldId;

/// Predicate on a discriminator's current value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowWhen {
    /// Show the group while the discriminator's value equals this code
    ValueIs(&'static str),
}

impl ShowWhen {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            ShowWhen::ValueIs(code) => value == *code,
        }
    }
}

/// One visibility rule: discriminator value drives a dependent group
#[derive(Debug, Clone)]
pub struct DependencyRule {
    pub discriminator: FieldId,
    pub group: GroupId,
    pub show_when: ShowWhen,
    /// Clear member values when the group hides (stale hidden input must not
    /// survive to submission)
    pub clear_on_hide: bool,
}

/// Outcome of registering a rule against a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleBinding {
    /// Discriminator and group both resolved; the rule is active
    Bound,
    /// Discriminator or group absent from this document variant; the rule
    /// was dropped and will never fire
    Skipped,
}

/// A visibility change produced by re-evaluating the rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupTransition {
    pub group: GroupId,
    pub now_visible: bool,
}

/// Holds the bound rules and applies them to a document
#[derive(Debug, Default)]
pub struct DependencyEngine {
    rules: Vec<DependencyRule>,
}

impl DependencyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two signup rules: business fields track the account type, and the
    /// state/zip fields track the country. Only the state/zip group clears
    /// its values on hide.
    pub fn signup(doc: &FormDocument) -> Self {
        let mut engine = Self::new();
        engine.register(
            doc,
            DependencyRule {
                discriminator: FieldId::AccountType,
                group: GroupId::BusinessFields,
                show_when: ShowWhen::ValueIs("biz"),
                clear_on_hide: false,
            },
        );
        engine.register(
            doc,
            DependencyRule {
                discriminator: FieldId::Country,
                group: GroupId::StateZipFields,
                show_when: ShowWhen::ValueIs("US"),
                clear_on_hide: true,
            },
        );
        engine
    }

    /// Register a rule. A missing discriminator or group makes the rule a
    /// no-op: it is skipped here and never re-checked.
    pub fn register(&mut self, doc: &FormDocument, rule: DependencyRule) -> RuleBinding {
        if doc.field(rule.discriminator).is_none() {
            tracing::debug!(
                discriminator = ?rule.discriminator,
                "dependency rule skipped: discriminator not in document"
            );
            return RuleBinding::Skipped;
        }
        if doc.group(rule.group).is_none() {
            tracing::debug!(
                group = ?rule.group,
                "dependency rule skipped: group not in document"
            );
            return RuleBinding::Skipped;
        }
        self.rules.push(rule);
        RuleBinding::Bound
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Evaluate every rule against the document's current values and set
    /// group state directly. Used once on load so the first paint already
    /// shows the right groups; callers must not animate these transitions.
    pub fn initialize(&self, doc: &mut FormDocument) {
        for rule in &self.rules {
            let show = rule.show_when.matches(doc.value_of(rule.discriminator));
            Self::sync_group(doc, rule, show);
        }
    }

    /// Re-evaluate the rules gated by `changed` and return the transitions
    /// that occurred. Rules on other discriminators are untouched.
    pub fn apply(&self, doc: &mut FormDocument, changed: FieldId) -> Vec<GroupTransition> {
        let mut transitions = Vec::new();
        for rule in self.rules.iter().filter(|r| r.discriminator == changed) {
            let show = rule.show_when.matches(doc.value_of(rule.discriminator));
            let was_visible = doc.group(rule.group).map(|g| g.visible).unwrap_or(false);
            if show == was_visible {
                continue;
            }
            Self::sync_group(doc, rule, show);
            transitions.push(GroupTransition {
                group: rule.group,
                now_visible: show,
            });
        }
        transitions
    }

    /// Set a group's visibility and bring its members' required flags (and,
    /// on hide, optionally their values) in line.
    fn sync_group(doc: &mut FormDocument, rule: &DependencyRule, show: bool) {
        let (members, required_members) = match doc.group_mut(rule.group) {
            Some(group) => {
                group.visible = show;
                (group.members.clone(), group.required_members.clone())
            }
            None => return,
        };

        if show {
            for id in &required_members {
                if let Some(field) = doc.field_mut(*id) {
                    field.required = true;
                }
            }
        } else {
            for id in &required_members {
                if let Some(field) = doc.field_mut(*id) {
                    field.required = false;
                }
            }
            if rule.clear_on_hide {
                for id in &members {
                    if let Some(field) = doc.field_mut(*id) {
                        field.clear();
                    }
                }
            }
        }
    }
}
