//! Add/edit product form state.
//!
//! DESIGN
//! ======
//! The form is either creating a new product or editing one existing id.
//! Choosing another product to edit replaces the draft outright; drafts are
//! never persisted, so a reload always starts in [`FormMode::Creating`].

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::state::catalog::CatalogStore;
use crate::state::product::{CatalogError, Product, ProductDraft};
use crate::util::storage::KvStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(u32),
}

/// What a successful submit did to the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(u32),
    Updated(u32),
    /// The edited product was deleted before submit; nothing changed.
    Missing(u32),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub draft: ProductDraft,
    pub mode: FormMode,
    /// Set when the last submit was rejected for its name.
    pub name_invalid: bool,
}

impl ProductForm {
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Creating => "Add Product",
            FormMode::Editing(_) => "Update Product",
        }
    }

    /// Point the form at `product`, discarding any in-progress draft.
    pub fn begin_edit(&mut self, product: &Product) {
        self.draft = ProductDraft::from_product(product);
        self.mode = FormMode::Editing(product.id);
        self.name_invalid = false;
    }

    /// Reset to an empty creating form.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Commit the draft to `catalog`. On success the form is cleared back to
    /// creating mode; on error it keeps the draft, flagging the name when that
    /// is what failed.
    ///
    /// # Errors
    ///
    /// Returns the [`CatalogError`] raised by the catalog add or update.
    pub fn submit<S: KvStore>(&mut self, catalog: &mut CatalogStore<S>) -> Result<SubmitOutcome, CatalogError> {
        let result = match self.mode {
            FormMode::Creating => catalog.add(&self.draft).map(SubmitOutcome::Added),
            FormMode::Editing(id) => catalog.update(id, &self.draft).map(|found| {
                if found { SubmitOutcome::Updated(id) } else { SubmitOutcome::Missing(id) }
            }),
        };
        match result {
            Ok(outcome) => {
                self.clear();
                Ok(outcome)
            }
            Err(e) => {
                self.name_invalid = matches!(e, CatalogError::InvalidName(_));
                Err(e)
            }
        }
    }
}
