//! Screen controller: wires one screen's state to the remote collection.
//!
//! Failure policy: every remote failure (transport error, non-2xx status,
//! malformed body) is caught and logged, nothing else. Local state is only
//! mutated from a successful response, so a failed call leaves the screen
//! exactly as it was and never crashes the console. No retries, no in-flight
//! tracking, no user-facing error surface.

use crate::api::CollectionApi;
use crate::models::Entity;
use crate::screen::{Modal, Screen};
use std::sync::Arc;

pub struct ScreenController<T: Entity> {
    screen: Screen<T>,
    api: Arc<CollectionApi>,
    loaded: bool,
}

impl<T: Entity> ScreenController<T> {
    pub fn new(api: Arc<CollectionApi>) -> Self {
        ScreenController {
            screen: Screen::new(),
            api,
            loaded: false,
        }
    }

    pub fn screen(&self) -> &Screen<T> {
        &self.screen
    }

    /// Synchronous state transitions (filter, modal, field edits) go straight
    /// to the screen.
    pub fn screen_mut(&mut self) -> &mut Screen<T> {
        &mut self.screen
    }

    /// Fetch the collection the first time the screen becomes active. Later
    /// activations keep the mirrored state; use `refresh` to force a reload.
    pub async fn activate(&mut self) {
        if !self.loaded {
            self.loaded = true;
            self.refresh().await;
        }
    }

    /// Reload the full collection. On failure the current mirror is kept.
    pub async fn refresh(&mut self) {
        match self.api.list::<T>().await {
            Ok(records) => {
                log::debug!("Loaded {} {} records", records.len(), T::COLLECTION);
                self.screen.collection_loaded(records);
            }
            Err(e) => log::error!("Failed to load {}: {}", T::COLLECTION, e),
        }
    }

    /// Submit the open draft: POST in create mode, PUT in edit mode. The
    /// canonical response closes the modal and reconciles the collection.
    pub async fn submit(&mut self) {
        let modal = self.screen.modal().clone();
        match modal {
            Modal::Closed => {
                log::warn!("Submit with no open {} form", T::COLLECTION);
            }
            Modal::Creating { mut draft } => {
                draft.prepare_create();
                match self.api.create(&draft).await {
                    Ok(canonical) => {
                        log::info!("Created {} {}", T::COLLECTION, canonical.id());
                        self.screen.created(canonical);
                    }
                    Err(e) => log::error!("Failed to create {}: {}", T::COLLECTION, e),
                }
            }
            Modal::Editing { id, draft } => match self.api.update(&id, &draft).await {
                Ok(canonical) => {
                    log::info!("Updated {} {}", T::COLLECTION, id);
                    self.screen.updated(canonical);
                }
                Err(e) => log::error!("Failed to update {} {}: {}", T::COLLECTION, id, e),
            },
        }
    }

    /// Delete a record by id. The local entry is removed only after the
    /// backend confirms.
    pub async fn delete(&mut self, id: &str) {
        match self.api.delete::<T>(id).await {
            Ok(()) => {
                log::info!("Deleted {} {}", T::COLLECTION, id);
                self.screen.deleted(id);
            }
            Err(e) => log::error!("Failed to delete {} {}: {}", T::COLLECTION, id, e),
        }
    }
}
