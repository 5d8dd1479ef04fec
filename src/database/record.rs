use std::collections::HashMap;

/// Field-level failures found while mapping request input onto a record
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("Invalid fields")]
    Fields(HashMap<String, String>),
}

impl RecordError {
    /// Per-field messages suitable for a validation response
    pub fn field_errors(&self) -> HashMap<String, String> {
        match self {
            RecordError::Fields(errors) => errors.clone(),
        }
    }
}

/// Collects field errors so a request reports every bad field at once.
#[derive(Debug, Default)]
pub struct FieldCheck {
    errors: HashMap<String, String>,
}

impl FieldCheck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Present and non-blank, returned trimmed.
    pub fn text(&mut self, field: &str, value: Option<String>) -> String {
        match value.map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => v,
            _ => {
                self.errors.insert(field.to_string(), "This field is required".to_string());
                String::new()
            }
        }
    }

    /// Same as `text` but keeps the value byte for byte.
    pub fn verbatim(&mut self, field: &str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                self.errors.insert(field.to_string(), "This field is required".to_string());
                String::new()
            }
        }
    }

    pub fn finite(&mut self, field: &str, value: f64) -> f64 {
        if !value.is_finite() {
            self.errors.insert(field.to_string(), "Must be a finite number".to_string());
        }
        value
    }

    pub fn finish(self) -> Result<(), RecordError> {
        match self.errors.len() {
            0 => Ok(()),
            _ => Err(RecordError::Fields(self.errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_missing() {
        let mut check = FieldCheck::new();
        assert_eq!(check.text("email", Some("  a@b.c ".into())), "a@b.c");
        check.text("first_name", Some("   ".into()));
        check.text("last_name", None);
        let err = check.finish().unwrap_err();
        let fields = err.field_errors();
        assert_eq!(fields.len(), 2);
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("last_name"));
    }

    #[test]
    fn verbatim_keeps_whitespace() {
        let mut check = FieldCheck::new();
        assert_eq!(check.verbatim("password", Some(" pw ".into())), " pw ");
        assert!(check.finish().is_ok());
    }

    #[test]
    fn non_finite_numbers_rejected() {
        let mut check = FieldCheck::new();
        check.finite("mass", f64::NAN);
        check.finite("radius", 1.0);
        let fields = check.finish().unwrap_err().field_errors();
        assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["mass"]);
    }
}
