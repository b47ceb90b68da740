//! Form state management for the model form

use super::field::FormField;
use crate::state::Complexity;

/// Index of the buttons row in the tab order
const BUTTONS_ROW_INDEX: usize = 4;

/// Number of action buttons (Generate, Modify)
const BUTTON_COUNT: usize = 2;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The model request form: prompt, size, complexity and modification,
/// followed by the buttons row
#[derive(Debug, Clone)]
pub struct ModelForm {
    pub prompt: FormField,
    pub size: FormField,
    pub complexity: FormField,
    pub modification: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Generate, 1=Modify)
    pub selected_button: usize,
}

impl ModelForm {
    pub fn new() -> Self {
        Self::with_defaults(100.0, Complexity::Medium)
    }

    /// Create a form seeded with configured defaults
    pub fn with_defaults(size: f64, complexity: Complexity) -> Self {
        Self {
            prompt: FormField::text("prompt", "Prompt", "Describe the shape"),
            size: FormField::size("size", "Size (mm)", size),
            complexity: FormField::complexity("complexity", "Complexity", complexity),
            modification: FormField::text(
                "modification",
                "Modification",
                "e.g., increase size by 10mm",
            ),
            active_field_index: 0,
            selected_button: 0,
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW_INDEX
    }

    /// Returns true if the complexity field is currently active
    pub fn is_complexity_active(&self) -> bool {
        self.active_field_index == 2
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }
}

impl Default for ModelForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ModelForm {
    fn field_count(&self) -> usize {
        5 // prompt, size, complexity, modification, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW_INDEX);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.prompt,
            1 => &mut self.size,
            2 => &mut self.complexity,
            // For the buttons row, return modification as dummy (won't be
            // used for text input)
            _ => &mut self.modification,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.prompt),
            1 => Some(&self.size),
            2 => Some(&self.complexity),
            3 => Some(&self.modification),
            // Buttons row has no FormField
            _ => None,
        }
    }
}
