use secureface_core::model::Field;

/// Terminal-only form state. Values live in the view-state store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormState {
    pub focus: Field,
}

impl FormState {
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Two fields, so previous and next coincide.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn reset_focus(&mut self) {
        self.focus = Field::default();
    }
}
