//! Generic CRUD panel.
//!
//! Every record panel runs the same cycle: fetch the list on mount, fall
//! back to preset rows with a banner if that fails, and patch the local rows
//! from each successful mutation without re-fetching.

use crate::{EditForm, FormMode};
use botcommand_core::Resource;
use botcommand_error::{DashboardError, DashboardResult};
use botcommand_interface::ResourceStore;
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Loading state of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PanelState {
    /// Fetch in flight
    Loading,
    /// Rows came from the backend
    Ready,
    /// Fetch failed; fallback rows shown with a banner
    ReadyWithError,
}

/// Presentation of a record type on its panel.
pub trait PanelRecord: Resource + Default {
    /// Panel title.
    const TITLE: &'static str;
    /// One-line description under the title.
    const DESCRIPTION: &'static str;
    /// Plural noun used in the load failure banner.
    const PLURAL: &'static str;
    /// Singular noun used in mutation failure banners.
    const SINGULAR: &'static str;

    /// Table column headers.
    fn columns() -> &'static [&'static str];

    /// Table cells, one per column.
    fn cells(&self) -> Vec<String>;

    /// Form field labels.
    fn form_labels() -> &'static [&'static str];

    /// Form values for editing this record, one per label.
    fn form_values(&self) -> Vec<String>;

    /// Build a record from form values, or explain what is missing.
    fn from_form(values: &[String]) -> Result<Self, String>;

    /// Rows shown when the list cannot be fetched.
    fn fallback() -> Vec<Self>;

    /// Copy with the `enabled` switch flipped, for records that have one.
    fn toggled(&self) -> Option<Self> {
        None
    }

    /// Copy with the secondary switch flipped, for records that have one.
    fn secondary_toggled(&self) -> Option<Self> {
        None
    }

    /// Banner shown when the list cannot be fetched.
    fn load_failed_message() -> String {
        format!("Failed to load {}. Using fallback data.", Self::PLURAL)
    }
}

/// A change requested from a panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<R> {
    /// Store a new record
    Create(R),
    /// Replace the record with this id
    Update(String, R),
    /// Remove the record with this id
    Delete(String),
}

/// Successful result of a [`Mutation`].
#[derive(Debug, Clone, PartialEq)]
pub enum Applied<R> {
    /// Stored copy of a new record
    Created(R),
    /// Id and stored copy of a replaced record
    Updated(String, R),
    /// Id of a removed record
    Deleted(String),
}

impl<R: Resource> Mutation<R> {
    /// Verb used in failure banners.
    pub fn action(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Update(..) => "update",
            Self::Delete(_) => "delete",
        }
    }

    /// Send the change to `store`.
    pub async fn send(self, store: &dyn ResourceStore<R>) -> DashboardResult<Applied<R>> {
        match self {
            Self::Create(record) => store.create(record).await.map(Applied::Created),
            Self::Update(id, record) => {
                let updated = store.update(&id, record).await?;
                Ok(Applied::Updated(id, updated))
            }
            Self::Delete(id) => {
                let ack = store.delete(&id).await?;
                debug!("{}", ack);
                Ok(Applied::Deleted(id))
            }
        }
    }
}

/// List and CRUD actions for one record type.
pub struct Panel<R: PanelRecord> {
    store: Arc<dyn ResourceStore<R>>,
    state: PanelState,
    rows: Vec<R>,
    selected: usize,
    error: Option<String>,
    form: Option<EditForm>,
}

impl<R: PanelRecord> Panel<R> {
    /// Panel backed by `store`. Nothing is fetched until [`Panel::load`].
    pub fn new(store: Arc<dyn ResourceStore<R>>) -> Self {
        Self {
            store,
            state: PanelState::Loading,
            rows: Vec::new(),
            selected: 0,
            error: None,
            form: None,
        }
    }

    /// Loading state.
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Index of the selected row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The selected row, if any.
    pub fn selected_row(&self) -> Option<&R> {
        self.rows.get(self.selected)
    }

    /// Error banner, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Open create/edit form.
    pub fn form(&self) -> Option<&EditForm> {
        self.form.as_ref()
    }

    /// Open create/edit form, mutably.
    pub fn form_mut(&mut self) -> Option<&mut EditForm> {
        self.form.as_mut()
    }

    /// Store the panel reads and writes through.
    pub fn store(&self) -> Arc<dyn ResourceStore<R>> {
        Arc::clone(&self.store)
    }

    /// Enter `Loading` ahead of a fetch.
    pub fn begin_load(&mut self) {
        self.state = PanelState::Loading;
        self.error = None;
    }

    /// Apply a fetched list, substituting fallback rows on failure.
    pub fn finish_load(&mut self, result: DashboardResult<Vec<R>>) {
        match result {
            Ok(rows) => {
                debug!(resource = R::PATH, count = rows.len(), "Panel loaded");
                self.rows = rows;
                self.state = PanelState::Ready;
            }
            Err(e) => {
                error!("Failed to load {}: {}", R::PLURAL, e);
                self.rows = R::fallback();
                self.error = Some(R::load_failed_message());
                self.state = PanelState::ReadyWithError;
            }
        }
        self.clamp_selection();
    }

    /// Fetch the list, substituting fallback rows on failure.
    #[instrument(skip(self), fields(resource = R::PATH))]
    pub async fn load(&mut self) {
        self.begin_load();
        let result = self.store.list().await;
        self.finish_load(result);
    }

    /// Patch the rows from a finished mutation. Rows are untouched on failure.
    ///
    /// A successful mutation also closes the open form and clears the banner.
    pub fn finish_mutation(&mut self, action: &str, result: DashboardResult<Applied<R>>) -> bool {
        match result {
            Ok(Applied::Created(created)) => {
                self.rows.push(created);
                self.selected = self.rows.len() - 1;
            }
            Ok(Applied::Updated(id, updated)) => {
                if let Some(row) = self.rows.iter_mut().find(|r| r.id() == id) {
                    *row = updated;
                }
            }
            Ok(Applied::Deleted(id)) => {
                self.rows.retain(|r| r.id() != id);
                self.clamp_selection();
            }
            Err(e) => return self.fail(action, e),
        }
        self.error = None;
        self.form = None;
        true
    }

    /// Send `mutation` and patch the rows from its result.
    #[instrument(skip(self, mutation), fields(resource = R::PATH, action = mutation.action()))]
    pub async fn apply(&mut self, mutation: Mutation<R>) -> bool {
        let action = mutation.action();
        let result = mutation.send(self.store.as_ref()).await;
        self.finish_mutation(action, result)
    }

    /// Create a record and append the stored copy.
    pub async fn create(&mut self, record: R) -> bool {
        self.apply(Mutation::Create(record)).await
    }

    /// Update the record with `id` and replace its row with the stored copy.
    pub async fn update(&mut self, id: &str, record: R) -> bool {
        self.apply(Mutation::Update(id.to_string(), record)).await
    }

    /// Delete the record with `id` and drop its row.
    pub async fn delete(&mut self, id: &str) -> bool {
        self.apply(Mutation::Delete(id.to_string())).await
    }

    /// Delete of the selected row.
    pub fn delete_selected_mutation(&self) -> Option<Mutation<R>> {
        self.selected_row()
            .map(|r| Mutation::Delete(r.id().to_string()))
    }

    /// Update flipping the `enabled` switch of the selected row.
    pub fn toggle_mutation(&self) -> Option<Mutation<R>> {
        self.selected_row()
            .and_then(|r| r.toggled())
            .map(|record| Mutation::Update(record.id().to_string(), record))
    }

    /// Update flipping the secondary switch of the selected row.
    pub fn secondary_toggle_mutation(&self) -> Option<Mutation<R>> {
        self.selected_row()
            .and_then(|r| r.secondary_toggled())
            .map(|record| Mutation::Update(record.id().to_string(), record))
    }

    /// Create or update built from the open form.
    ///
    /// Validation errors are shown on the form and yield `None`.
    pub fn form_mutation(&mut self) -> Option<Mutation<R>> {
        let form = self.form.as_mut()?;
        match R::from_form(&form.values()) {
            Ok(record) => Some(match form.mode() {
                FormMode::Create => Mutation::Create(record),
                FormMode::Edit(id) => Mutation::Update(id.clone(), record),
            }),
            Err(message) => {
                form.set_error(message);
                None
            }
        }
    }

    /// Delete the selected row.
    pub async fn delete_selected(&mut self) -> bool {
        match self.delete_selected_mutation() {
            Some(mutation) => self.apply(mutation).await,
            None => false,
        }
    }

    /// Flip the `enabled` switch of the selected row.
    pub async fn toggle_selected(&mut self) -> bool {
        match self.toggle_mutation() {
            Some(mutation) => self.apply(mutation).await,
            None => false,
        }
    }

    /// Flip the secondary switch of the selected row.
    pub async fn toggle_secondary_selected(&mut self) -> bool {
        match self.secondary_toggle_mutation() {
            Some(mutation) => self.apply(mutation).await,
            None => false,
        }
    }

    /// Open an empty form for a new record.
    pub fn open_create_form(&mut self) {
        let blank = R::default();
        self.form = Some(EditForm::new(
            FormMode::Create,
            R::form_labels(),
            blank.form_values(),
        ));
    }

    /// Open a form prefilled from the selected row.
    pub fn open_edit_form(&mut self) {
        if let Some(row) = self.selected_row() {
            self.form = Some(EditForm::new(
                FormMode::Edit(row.id().to_string()),
                R::form_labels(),
                row.form_values(),
            ));
        }
    }

    /// Discard the open form.
    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Submit the open form. The form stays open when validation or the call fails.
    pub async fn submit_form(&mut self) -> bool {
        match self.form_mutation() {
            Some(mutation) => self.apply(mutation).await,
            None => false,
        }
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if self.selected < self.rows.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
    }

    fn fail(&mut self, action: &str, e: DashboardError) -> bool {
        error!("Failed to {} {}: {}", action, R::SINGULAR, e);
        self.error = Some(format!("Failed to {} {}", action, R::SINGULAR));
        false
    }
}
