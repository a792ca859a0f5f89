//! Form field value objects

/// Symbolic names for every control in the signup form.
///
/// Lookups by `FieldId` replace string selectors: a reference to a field that
/// does not exist in the document is an `Option::None`, not a silent mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Password,
    PasswordConfirm,
    AccountType,
    BusinessName,
    Address1,
    Address2,
    City,
    Country,
    State,
    ZipCode,
}

/// A single option in a select control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value (e.g. an ISO country code)
    pub code: String,
    /// Label shown to the user
    pub label: String,
}

impl SelectOption {
    pub fn new(code: &str, label: &str) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
        }
    }
}

/// Kind of control a field renders as
#[derive(Debug, Clone)]
pub enum FieldKind {
    Text,
    /// Rendered masked
    Password,
    /// Single-select; `selected` indexes into `options`.
    /// The first option acts as the prompt ("Country", "State").
    Select {
        options: Vec<SelectOption>,
        selected: usize,
    },
}

/// Represents a single form control with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    /// Shown in place of an empty value
    pub placeholder: String,
    pub kind: FieldKind,
    /// Current text value (empty for selects; their value is the selected code)
    value: String,
    /// Whether the field must be non-empty at submission
    pub required: bool,
}

impl FormField {
    /// Create a text field
    pub fn text(id: FieldId, label: &str, placeholder: &str, required: bool) -> Self {
        Self {
            id,
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            kind: FieldKind::Text,
            value: String::new(),
            required,
        }
    }

    /// Create a password field
    pub fn password(id: FieldId, label: &str, placeholder: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            kind: FieldKind::Password,
            value: String::new(),
            required: true,
        }
    }

    /// Create a select field; option 0 is the prompt entry
    pub fn select(id: FieldId, label: &str, options: Vec<SelectOption>, required: bool) -> Self {
        Self {
            id,
            label: label.to_string(),
            placeholder: String::new(),
            kind: FieldKind::Select {
                options,
                selected: 0,
            },
            value: String::new(),
            required,
        }
    }

    /// Current submitted value: text content, or the selected option's code
    pub fn value(&self) -> &str {
        match &self.kind {
            FieldKind::Text | FieldKind::Password => &self.value,
            FieldKind::Select { options, selected } => options
                .get(*selected)
                .map(|o| o.code.as_str())
                .unwrap_or(""),
        }
    }

    /// Whether the field would fail a required-on-submit check
    pub fn is_empty(&self) -> bool {
        self.value().is_empty()
    }

    /// Push a character (text/password only)
    pub fn push_char(&mut self, c: char) {
        if matches!(self.kind, FieldKind::Text | FieldKind::Password) {
            self.value.push(c);
        }
    }

    /// Remove the last character (text/password only)
    pub fn pop_char(&mut self) {
        if matches!(self.kind, FieldKind::Text | FieldKind::Password) {
            self.value.pop();
        }
    }

    /// Clear the stored value; selects reset to their prompt option
    pub fn clear(&mut self) {
        match &mut self.kind {
            FieldKind::Text | FieldKind::Password => self.value.clear(),
            FieldKind::Select { selected, .. } => *selected = 0,
        }
    }

    /// Advance a select to its next option, wrapping past the end
    pub fn cycle_next(&mut self) {
        if let FieldKind::Select { options, selected } = &mut self.kind {
            if !options.is_empty() {
                *selected = (*selected + 1) % options.len();
            }
        }
    }

    /// Move a select to its previous option, wrapping before the start
    pub fn cycle_prev(&mut self) {
        if let FieldKind::Select { options, selected } = &mut self.kind {
            if !options.is_empty() {
                *selected = if *selected == 0 {
                    options.len() - 1
                } else {
                    *selected - 1
                };
            }
        }
    }

    /// Select the option whose code matches, if present
    pub fn select_code(&mut self, code: &str) -> bool {
        if let FieldKind::Select { options, selected } = &mut self.kind {
            if let Some(idx) = options.iter().position(|o| o.code == code) {
                *selected = idx;
                return true;
            }
        }
        false
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.kind {
            FieldKind::Text => self.value.clone(),
            FieldKind::Password => "•".repeat(self.value.chars().count()),
            FieldKind::Select { options, selected } => options
                .get(*selected)
                .map(|o| o.label.clone())
                .unwrap_or_default(),
        }
    }
}
