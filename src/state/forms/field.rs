//! Form field value objects

use crate::state::Complexity;

/// Size forwarded to the service when the field text does not parse
pub const DEFAULT_SIZE_MM: f64 = 100.0;

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// Numeric text; parsed to millimetres on submit
    Size(String),
    Complexity(Complexity),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    /// Shown dimmed while the field is empty
    pub placeholder: String,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            placeholder: placeholder.to_string(),
        }
    }

    /// Create a new size field with an initial value in millimetres
    pub fn size(name: &str, label: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Size(format!("{value}")),
            placeholder: String::new(),
        }
    }

    /// Create a new complexity field
    pub fn complexity(name: &str, label: &str, value: Complexity) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Complexity(value),
            placeholder: String::new(),
        }
    }

    /// Get the text value (returns empty string for complexity fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Size(s) => s,
            FieldValue::Complexity(_) => "",
        }
    }

    /// Parse the size in millimetres, falling back to the default when the
    /// text is not a number (returns the default for non-size fields)
    pub fn as_size(&self) -> f64 {
        match &self.value {
            FieldValue::Size(s) => s.trim().parse().unwrap_or(DEFAULT_SIZE_MM),
            _ => DEFAULT_SIZE_MM,
        }
    }

    /// Get the complexity value (returns the default for other fields)
    pub fn as_complexity(&self) -> Complexity {
        match &self.value {
            FieldValue::Complexity(c) => *c,
            _ => Complexity::default(),
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Size(s) => {
                if c.is_ascii_digit() || c == '.' {
                    s.push(c);
                }
            }
            FieldValue::Complexity(level) => match c {
                'l' => *level = Complexity::Low,
                'm' => *level = Complexity::Medium,
                'h' => *level = Complexity::High,
                _ => {}
            },
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Size(s) => {
                s.pop();
            }
            FieldValue::Complexity(_) => {
                // Complexity has no character buffer to erase
            }
        }
    }

    /// Cycle a complexity field forwards (no-op for other fields)
    pub fn cycle_next(&mut self) {
        if let FieldValue::Complexity(level) = &mut self.value {
            *level = level.next();
        }
    }

    /// Cycle a complexity field backwards (no-op for other fields)
    pub fn cycle_prev(&mut self) {
        if let FieldValue::Complexity(level) = &mut self.value {
            *level = level.prev();
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Size(s) => s.clear(),
            FieldValue::Complexity(level) => *level = Complexity::default(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Size(s) => s.clone(),
            FieldValue::Complexity(level) => level.label().to_string(),
        }
    }
}
