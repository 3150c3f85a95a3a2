//! Component state for the dataset generator page.
//!
//! The request lifecycle lives in `GeneratorForm`; this struct only adds the
//! DOM handles the view and update logic need.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::form::GeneratorForm;

/// Main state container for the `GeneratorComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct GeneratorComponent {
    /// Form input plus the current phase of the generation request.
    pub form: GeneratorForm,

    /// Reference to the description `<input>`.
    pub description_ref: NodeRef,

    /// Reference to the row-count `<select>`.
    pub row_count_ref: NodeRef,
}

impl GeneratorComponent {
    pub fn new() -> Self {
        Self {
            form: GeneratorForm::new(),
            description_ref: Default::default(),
            row_count_ref: Default::default(),
        }
    }

    /// Puts the caret in the description field, if it is mounted.
    pub fn focus_description(&self) {
        if let Some(input) = self.description_ref.cast::<HtmlInputElement>() {
            let _ = input.focus();
        }
    }

    /// Makes the select show the form's row count.
    ///
    /// The `selected` attribute only sets the initial choice, so once the
    /// user has picked an option the DOM value has to be written directly.
    pub fn sync_row_count(&self) {
        if let Some(select) = self.row_count_ref.cast::<HtmlSelectElement>() {
            let value = self.form.row_count().to_string();
            if select.value() != value {
                select.set_value(&value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::generation::RowCount;

    #[test]
    fn reset_brings_the_row_count_back_to_ten() {
        let mut component = GeneratorComponent::new();
        component.form.set_row_count(RowCount::Thirty);
        component.form.reset();

        assert_eq!(component.form.row_count().to_string(), "10");
        // Unmounted refs are ignored.
        component.sync_row_count();
    }
}
