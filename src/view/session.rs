//! Edit session state machine
//!
//! Tracks the modal's lifecycle: closed until a texture is selected, then an
//! editing draft of the name plus an existing-vs-new category choice. Submit
//! validates the trimmed effective values; a valid submit yields the store
//! write request and closes the session immediately, before the write's
//! outcome is known. Failures are reported out of band and never reopen the
//! modal.

use crate::errors::AppError;
use crate::models::{CatalogItem, TextureUpdateRequest};

/// Two-way category entry: pick an existing label or supply a new one
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryChoice {
    Existing(String),
    New(String),
}

impl CategoryChoice {
    /// The label that would be committed under the active mode
    pub fn effective(&self) -> &str {
        match self {
            Self::Existing(label) | Self::New(label) => label,
        }
    }
}

/// Local draft of one texture's pending edit
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub texture_id: String,
    pub name: String,
    pub category: CategoryChoice,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditSession {
    #[default]
    Closed,
    Editing(EditDraft),
}

impl EditSession {
    /// Select a texture for editing, seeding the draft from its current
    /// resolved name and category
    pub fn open(&mut self, item: &CatalogItem) {
        *self = Self::Editing(EditDraft {
            texture_id: item.id.clone(),
            name: item.name.clone(),
            category: CategoryChoice::Existing(item.category.clone()),
        });
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        if let Self::Editing(draft) = self {
            draft.name = name.into();
        }
    }

    pub fn choose_existing<S: Into<String>>(&mut self, label: S) {
        if let Self::Editing(draft) = self {
            draft.category = CategoryChoice::Existing(label.into());
        }
    }

    pub fn choose_new<S: Into<String>>(&mut self, label: S) {
        if let Self::Editing(draft) = self {
            draft.category = CategoryChoice::New(label.into());
        }
    }

    /// Validate the draft and produce the store write request
    ///
    /// On success the session closes; a validation failure keeps the draft
    /// intact so the operator can correct it without re-entering data.
    pub fn submit(&mut self) -> Result<TextureUpdateRequest, AppError> {
        let draft = match self {
            Self::Editing(draft) => draft,
            Self::Closed => return Err(AppError::validation("no texture selected")),
        };

        let name = draft.name.trim();
        let category = draft.category.effective().trim();
        if name.is_empty() || category.is_empty() {
            return Err(AppError::validation(
                "texture name and category must be non-empty",
            ));
        }

        let request = TextureUpdateRequest {
            texture_id: draft.texture_id.clone(),
            name: name.to_string(),
            category: category.to_string(),
        };
        *self = Self::Closed;
        Ok(request)
    }
}
