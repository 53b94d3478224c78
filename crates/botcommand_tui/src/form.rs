//! Field-by-field text form shared by create and edit flows.

/// Whether a form creates a record or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormMode {
    /// Add a new record
    Create,
    /// Edit the record with this id
    Edit(String),
}

/// One labelled text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Field label
    pub label: &'static str,
    /// Current text
    pub value: String,
}

/// Edit buffer for inline editing.
///
/// # Examples
///
/// ```
/// use botcommand_tui::{EditForm, FormMode};
///
/// let mut form = EditForm::new(FormMode::Create, &["Name", "Action"], vec![]);
/// form.push_char('x');
/// form.focus_next();
/// form.push_char('y');
/// assert_eq!(form.values(), vec!["x".to_string(), "y".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    mode: FormMode,
    fields: Vec<FormField>,
    focused: usize,
    error: Option<String>,
}

impl EditForm {
    /// Form with `labels`, prefilled from `values` where given.
    pub fn new(mode: FormMode, labels: &[&'static str], values: Vec<String>) -> Self {
        let mut values = values.into_iter();
        let fields = labels
            .iter()
            .map(|&label| FormField {
                label,
                value: values.next().unwrap_or_default(),
            })
            .collect();
        Self {
            mode,
            fields,
            focused: 0,
            error: None,
        }
    }

    /// Create or edit.
    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// All fields in display order.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Index of the focused field.
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Validation message from the last submit.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Record a validation message.
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    /// Current field values.
    pub fn values(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.value.clone()).collect()
    }

    /// Replace the value of field `index`.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
    }

    /// Move focus down, wrapping.
    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    /// Move focus up, wrapping.
    pub fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Type into the focused field.
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.push(c);
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.pop();
        }
    }
}

/// Parse a yes/no form value.
pub(crate) fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "true" | "on" | "1"
    )
}

/// Render a flag for a form field.
pub(crate) fn flag(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

/// Trimmed value of a required field, or a message naming it.
pub(crate) fn required(values: &[String], index: usize, label: &str) -> Result<String, String> {
    let value = values.get(index).map(|v| v.trim()).unwrap_or_default();
    if value.is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(value.to_string())
    }
}

/// Trimmed value of an optional field.
pub(crate) fn optional(values: &[String], index: usize) -> String {
    values
        .get(index)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}
