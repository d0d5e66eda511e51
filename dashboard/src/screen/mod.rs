//! ==============================================================================
//! screen/mod.rs - museums admin screen logic
//! ==============================================================================
//!
//! purpose:
//!     everything the museums page does, minus the dom. the leptos component
//!     forwards user events here and renders `snapshot()` afterwards.
//!
//! flow:
//!     filter change -> one list fetch -> list + dropdown options replaced
//!     form submit   -> create/update  -> list patched in place, form closed
//!     row delete    -> confirm        -> remove -> row dropped
//!
//! threading:
//!     single event loop. state sits in a RefCell that is never borrowed
//!     across an await; results arriving after `destroy()` are dropped.
//!
//! ==============================================================================

mod filters;
mod form;
mod list;

use std::cell::{Cell, RefCell};

use museum_shared::{Museum, MuseumId, MuseumQuery};
use thiserror::Error;

use crate::api::{ApiError, MuseumApi};
use crate::dialogs::Dialogs;

pub use filters::FilterState;
pub use form::{Field, MuseumForm, Submission};
pub use list::ListView;

// ==============================================================================
// types
// ==============================================================================

/// failures that escape the screen
///
/// transport errors never show up here: they are reported to the user
/// through [`Dialogs::notify`] where they happen.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScreenError {
    /// the backend accepted a save but returned no record
    #[error("something went wrong")]
    NothingSaved,
}

/// everything the page renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenState {
    pub filters: FilterState,
    pub list: ListView,
    pub form: MuseumForm,
}

pub fn delete_prompt(name: &str) -> String {
    format!("You are about to delete: {}. Are you sure?", name)
}

// ==============================================================================
// screen controller
// ==============================================================================

pub struct MuseumsScreen<A, D> {
    api: A,
    dialogs: D,
    state: RefCell<ScreenState>,
    live: Cell<bool>,
}

impl<A: MuseumApi, D: Dialogs> MuseumsScreen<A, D> {
    pub fn new(api: A, dialogs: D) -> Self {
        Self {
            api,
            dialogs,
            state: RefCell::new(ScreenState::default()),
            live: Cell::new(true),
        }
    }

    pub fn snapshot(&self) -> ScreenState {
        self.state.borrow().clone()
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    /// stop applying results; requests already sent still complete
    pub fn destroy(&self) {
        if self.live.replace(false) {
            log::info!("museums screen torn down, discarding further results");
        }
    }

    // --------------------------------------------------------------------------
    // filters and list
    // --------------------------------------------------------------------------

    /// first load, unfiltered
    pub async fn init(&self) {
        self.refresh().await;
    }

    pub async fn refresh(&self) {
        let query = self.state.borrow().filters.query();
        self.fetch(query).await;
    }

    pub async fn on_city_changed(&self, city: String) {
        let query = {
            let mut state = self.state.borrow_mut();
            state.filters.set_city(city);
            state.filters.query()
        };
        self.fetch(query).await;
    }

    pub async fn on_name_changed(&self, name: String) {
        let query = {
            let mut state = self.state.borrow_mut();
            state.filters.set_name(name);
            state.filters.query()
        };
        self.fetch(query).await;
    }

    pub async fn clear_filters(&self) {
        let query = {
            let mut state = self.state.borrow_mut();
            state.filters.clear();
            state.filters.query()
        };
        self.fetch(query).await;
    }

    pub fn invalidate_city_options(&self) {
        self.state.borrow_mut().list.invalidate_city_options();
    }

    async fn fetch(&self, query: MuseumQuery) {
        let result = self.api.list(&query).await;
        if !self.is_live() {
            return;
        }
        match result {
            Ok(records) => {
                log::debug!("fetched {} museums", records.len());
                self.state.borrow_mut().list.apply_fetch(records);
            }
            Err(err) => self.report(&err),
        }
    }

    // --------------------------------------------------------------------------
    // form
    // --------------------------------------------------------------------------

    pub fn toggle_form(&self) {
        self.state.borrow_mut().form.toggle_visibility();
    }

    pub fn begin_edit(&self, museum: &Museum) {
        self.state.borrow_mut().form.begin_edit(museum);
    }

    pub fn enable_editing(&self) {
        self.state.borrow_mut().form.enable_editing();
    }

    pub fn set_field(&self, field: Field, value: String) {
        self.state.borrow_mut().form.set_field(field, value);
    }

    /// save the form; does nothing while a required field is empty
    ///
    /// the form is reset and hidden once the request settles, including
    /// after a failure.
    pub async fn submit(&self) -> Result<(), ScreenError> {
        let Some(submission) = self.state.borrow().form.submission() else {
            return Ok(());
        };

        let outcome = match submission {
            Submission::Update(id, draft) => {
                let saved = self.api.update(&draft, id).await;
                saved.map(|m| m.map(|m| (Some(id), m)))
            }
            Submission::Create(museum) => {
                let saved = self.api.create(&museum).await;
                saved.map(|m| m.map(|m| (None, m)))
            }
        };
        if !self.is_live() {
            return Ok(());
        }

        let mut result = Ok(());
        match outcome {
            Ok(Some((Some(id), saved))) => {
                self.state.borrow_mut().list.replace(id, saved);
            }
            Ok(Some((None, saved))) => {
                self.state.borrow_mut().list.append(saved);
            }
            Ok(None) => result = Err(ScreenError::NothingSaved),
            Err(err) => self.report(&err),
        }
        self.state.borrow_mut().form.settle();
        result
    }

    // --------------------------------------------------------------------------
    // deletion
    // --------------------------------------------------------------------------

    /// ask first, then delete; unsaved rows (no id) are never sent
    pub async fn request_delete(&self, id: Option<MuseumId>, name: &str) {
        if !self.dialogs.confirm(&delete_prompt(name)) {
            return;
        }
        let Some(id) = id else {
            return;
        };

        let result = self.api.remove(id).await;
        if !self.is_live() {
            return;
        }
        match result {
            Ok(()) => {
                log::info!("Museum: {} has been deleted", name);
                self.state.borrow_mut().list.remove(id);
            }
            Err(err) => self.report(&err),
        }
    }

    fn report(&self, err: &ApiError) {
        log::warn!("museum request failed: {}", err);
        self.dialogs.notify(&err.to_string());
    }
}

// ==============================================================================
// tests
// ==============================================================================
