//! Per-screen state container.
//!
//! Holds the mirrored collection, the live filter, and the add/edit modal as
//! one explicit state machine. Every transition is a pure, synchronous method
//! so the collection invariants are testable without any I/O or rendering.
//! Remote effects live in `client`; only confirmed responses are applied here.

use crate::error::{ClientError, Result};
use crate::models::Entity;

/// Add/edit dialog state. Strictly modal: at most one draft exists at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal<T> {
    Closed,
    /// Composing a new record; no backend id exists yet.
    Creating { draft: T },
    /// Editing a copy of an existing record. `id` names the update target and
    /// stays fixed even if the draft's own id field is overwritten.
    Editing { id: String, draft: T },
}

pub struct Screen<T: Entity> {
    records: Vec<T>,
    filter: String,
    modal: Modal<T>,
}

impl<T: Entity> Default for Screen<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Screen<T> {
    pub fn new() -> Self {
        Screen {
            records: Vec::new(),
            filter: String::new(),
            modal: Modal::Closed,
        }
    }

    /// Full mirrored collection, in fetch/insertion order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn modal(&self) -> &Modal<T> {
        &self.modal
    }

    pub fn is_modal_open(&self) -> bool {
        !matches!(self.modal, Modal::Closed)
    }

    /// Current draft, if the modal is open.
    pub fn draft(&self) -> Option<&T> {
        match &self.modal {
            Modal::Closed => None,
            Modal::Creating { draft } | Modal::Editing { draft, .. } => Some(draft),
        }
    }

    /// Replace the collection with a fresh snapshot from the backend.
    pub fn collection_loaded(&mut self, records: Vec<T>) {
        self.records = records;
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// Visible subset: case-insensitive substring match of the filter against
    /// the designated field. Order-preserving, non-destructive; an empty
    /// filter shows everything.
    pub fn visible(&self) -> Vec<&T> {
        let needle = self.filter.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.filter_key().to_lowercase().contains(&needle))
            .collect()
    }

    /// Open the modal in create mode with an empty draft. Always resets any
    /// prior draft, regardless of previous modal state.
    pub fn open_add(&mut self) {
        self.modal = Modal::Creating { draft: T::default() };
    }

    /// Open the modal in edit mode with a copy of the record's current values.
    pub fn open_edit(&mut self, id: &str) -> Result<()> {
        let record = self
            .records
            .iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| ClientError::NotFound(format!("{} {}", T::COLLECTION, id)))?;
        self.modal = Modal::Editing {
            id: id.to_string(),
            draft: record.clone(),
        };
        Ok(())
    }

    /// Overwrite one field of the open draft from raw input text.
    pub fn edit_field(&mut self, name: &str, input: &str) -> Result<()> {
        match &mut self.modal {
            Modal::Closed => Err(ClientError::State("no open form".to_string())),
            Modal::Creating { draft } | Modal::Editing { draft, .. } => {
                draft.set_field(name, input)
            }
        }
    }

    /// Discard the draft without touching the collection.
    pub fn cancel(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Apply the canonical record from a successful create: append it and
    /// close the modal.
    pub fn created(&mut self, canonical: T) {
        self.records.push(canonical);
        self.modal = Modal::Closed;
    }

    /// Apply the canonical record from a successful update: replace the
    /// matching entry by id and close the modal. Other records are untouched.
    pub fn updated(&mut self, canonical: T) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.id() == canonical.id()) {
            *existing = canonical;
        }
        self.modal = Modal::Closed;
    }

    /// Remove the entry with the given id after a confirmed remote delete.
    pub fn deleted(&mut self, id: &str) {
        self.records.retain(|r| r.id() != id);
    }
}
