//! Form field value objects

/// Visual mark rendered next to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMark {
    #[default]
    Neutral,
    Error,
    Success,
}

/// A single named input value with an optional required constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Key used in snapshots; empty means the field is unnamed
    pub name: String,
    pub label: String,
    pub value: String,
    pub required: bool,
    pub mark: FieldMark,
}

impl Field {
    /// Create an optional text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            required: false,
            mark: FieldMark::Neutral,
        }
    }

    /// Create a required text field
    pub fn required(name: &str, label: &str) -> Self {
        Self {
            required: true,
            ..Self::text(name, label)
        }
    }

    /// Builder-style initial value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// The value with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// True when the field is required and blank after trimming
    pub fn is_violation(&self) -> bool {
        self.required && self.trimmed().is_empty()
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> &str {
        &self.value
    }

    /// Label with a trailing asterisk for required fields
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_sets_flag() {
        let field = Field::required("mass", "Mass");
        assert!(field.required);
        assert_eq!(field.mark, FieldMark::Neutral);
        assert!(field.value.is_empty());
    }

    #[test]
    fn test_violation_only_when_required_and_blank() {
        assert!(Field::required("a", "A").with_value("   ").is_violation());
        assert!(!Field::required("a", "A").with_value(" x ").is_violation());
        assert!(!Field::text("a", "A").is_violation());
    }

    #[test]
    fn test_push_and_pop() {
        let mut field = Field::text("section", "Section");
        field.push_char('A');
        field.push_char('1');
        assert_eq!(field.display_value(), "A1");
        field.pop_char();
        assert_eq!(field.display_value(), "A");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut field = Field::text("section", "Section");
        field.pop_char();
        assert_eq!(field.display_value(), "");
    }

    #[test]
    fn test_display_label_marks_required() {
        assert_eq!(Field::required("a", "Mass").display_label(), "Mass *");
        assert_eq!(Field::text("a", "Heat").display_label(), "Heat");
    }

    #[test]
    fn test_unnamed_field() {
        assert!(!Field::text("", "Notes").has_name());
        assert!(Field::text("notes", "Notes").has_name());
    }
}
