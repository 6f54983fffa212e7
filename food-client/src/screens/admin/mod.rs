//! Admin back-office screens
//!
//! Users, categories and products share one edit/delete state machine,
//! [`CrudScreen`], parameterised by an [`AdminResource`]:
//!
//! ```text
//! Idle --begin_edit--> Editing --confirm_edit--> Submitting --> Idle
//! Idle --request_delete--> ConfirmingDelete --confirm_delete--> Submitting --> Idle
//! Editing --cancel_edit--> Idle
//! ConfirmingDelete --cancel_delete--> Idle
//! ```

mod categories;
mod orders;
mod products;
mod users;

pub use categories::{CategoryAdmin, CategoryDraft};
pub use orders::OrderBoardScreen;
pub use products::{ProductAdmin, ProductDraft};
pub use users::{UserAdmin, UserDraft};

use crate::api::Api;
use crate::http::HttpClient;
use crate::{ClientError, ClientResult, Notice, SharedContext};
use async_trait::async_trait;
use shared::validation::ValidationError;
use std::mem;

/// One admin-managed resource
#[async_trait]
pub trait AdminResource: Send + Sync + 'static {
    type Record: Clone + Send + Sync;
    /// Form contents for add and edit
    type Draft: Clone + Default + Send + Sync;

    /// Display name used in notices ("User", "Category", ...)
    const LABEL: &'static str;

    /// Refetch the whole collection after a successful update
    const RELOAD_AFTER_UPDATE: bool;

    fn id(record: &Self::Record) -> i64;

    fn draft_of(record: &Self::Record) -> Self::Draft;

    /// Required-field check run before add and update
    fn check(draft: &Self::Draft) -> Result<(), ValidationError>;

    async fn fetch_all<C: HttpClient>(api: &Api<C>) -> ClientResult<Vec<Self::Record>>;

    async fn create<C: HttpClient>(api: &Api<C>, draft: &Self::Draft) -> ClientResult<Self::Record>;

    async fn update<C: HttpClient>(
        api: &Api<C>,
        id: i64,
        draft: &Self::Draft,
    ) -> ClientResult<Self::Record>;

    async fn delete<C: HttpClient>(api: &Api<C>, id: i64) -> ClientResult<()>;
}

/// Modal state of a [`CrudScreen`]
#[derive(Debug, Clone, PartialEq)]
pub enum CrudState<D> {
    Idle,
    Editing { id: i64, draft: D },
    ConfirmingDelete { id: i64 },
    Submitting,
}

pub struct CrudScreen<R: AdminResource, C> {
    ctx: SharedContext<C>,
    items: Vec<R::Record>,
    state: CrudState<R::Draft>,
    notice: Option<Notice>,
}

impl<R: AdminResource, C: HttpClient> CrudScreen<R, C> {
    pub fn new(ctx: SharedContext<C>) -> Self {
        Self {
            ctx,
            items: Vec::new(),
            state: CrudState::Idle,
            notice: None,
        }
    }

    pub fn items(&self) -> &[R::Record] {
        &self.items
    }

    pub fn state(&self) -> &CrudState<R::Draft> {
        &self.state
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub(crate) fn context(&self) -> &SharedContext<C> {
        &self.ctx
    }

    fn label() -> String {
        R::LABEL.to_lowercase()
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.items.iter().position(|r| R::id(r) == id)
    }

    fn require_idle(&self) -> ClientResult<()> {
        match self.state {
            CrudState::Idle => Ok(()),
            _ => Err(ClientError::InvalidState(format!(
                "{} screen is busy",
                Self::label()
            ))),
        }
    }

    fn require_local(&self, id: i64) -> ClientResult<usize> {
        self.position(id)
            .ok_or_else(|| ClientError::NotInLocalState(format!("{} {}", Self::label(), id)))
    }

    /// Fetch the whole collection
    pub async fn load(&mut self) -> ClientResult<()> {
        match R::fetch_all(&self.ctx.api).await {
            Ok(items) => {
                tracing::debug!(resource = R::LABEL, count = items.len(), "loaded");
                self.items = items;
                Ok(())
            }
            Err(e) => {
                tracing::error!(resource = R::LABEL, error = %e, "error fetching collection");
                Err(e)
            }
        }
    }

    /// Create a record and append it at the end of the list
    pub async fn add(&mut self, draft: R::Draft) -> ClientResult<&R::Record> {
        if let Err(e) = R::check(&draft) {
            self.notice = Some(Notice::error(e.to_string()));
            return Err(e.into());
        }
        match R::create(&self.ctx.api, &draft).await {
            Ok(record) => {
                tracing::info!(resource = R::LABEL, id = R::id(&record), "added");
                self.items.push(record);
                self.notice = Some(Notice::success(format!("{} added successfully!", R::LABEL)));
                Ok(&self.items[self.items.len() - 1])
            }
            Err(e) => {
                tracing::error!(resource = R::LABEL, error = %e, "error adding record");
                self.notice = Some(Notice::error(format!(
                    "Failed to add {}. Please try again.",
                    Self::label()
                )));
                Err(e)
            }
        }
    }

    /// Open the edit form pre-filled from the local copy
    pub fn begin_edit(&mut self, id: i64) -> ClientResult<&mut R::Draft> {
        self.require_idle()?;
        let index = self.require_local(id)?;
        let draft = R::draft_of(&self.items[index]);
        self.state = CrudState::Editing { id, draft };
        match &mut self.state {
            CrudState::Editing { draft, .. } => Ok(draft),
            _ => Err(ClientError::Internal("edit state lost".into())),
        }
    }

    /// The form being edited, if any
    pub fn draft_mut(&mut self) -> Option<&mut R::Draft> {
        match &mut self.state {
            CrudState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn cancel_edit(&mut self) {
        if matches!(self.state, CrudState::Editing { .. }) {
            self.state = CrudState::Idle;
        }
    }

    /// Save the edit form
    ///
    /// A failed required-field check keeps the form open. Any other
    /// failure closes it with an error notice.
    pub async fn confirm_edit(&mut self) -> ClientResult<()> {
        let (id, draft) = match &self.state {
            CrudState::Editing { id, draft } => (*id, draft.clone()),
            _ => return Err(ClientError::InvalidState("no edit in progress".into())),
        };
        if let Err(e) = R::check(&draft) {
            self.notice = Some(Notice::error(e.to_string()));
            return Err(e.into());
        }

        self.state = CrudState::Submitting;
        let result = R::update(&self.ctx.api, id, &draft).await;
        self.state = CrudState::Idle;

        match result {
            Ok(record) => {
                tracing::info!(resource = R::LABEL, id, "updated");
                let updated_id = R::id(&record);
                match self.position(updated_id) {
                    Some(index) => self.items[index] = record,
                    None => self.items.push(record),
                }
                if R::RELOAD_AFTER_UPDATE && let Err(e) = self.load().await {
                    tracing::warn!(resource = R::LABEL, error = %e, "reload after update failed");
                }
                self.notice = Some(Notice::success(format!(
                    "{} updated successfully!",
                    R::LABEL
                )));
                Ok(())
            }
            Err(e) => {
                tracing::error!(resource = R::LABEL, id, error = %e, "error updating record");
                self.notice = Some(Notice::error(format!(
                    "Failed to update {}. Please try again.",
                    Self::label()
                )));
                Err(e)
            }
        }
    }

    /// Ask for confirmation before deleting
    pub fn request_delete(&mut self, id: i64) -> ClientResult<()> {
        self.require_idle()?;
        self.require_local(id)?;
        self.state = CrudState::ConfirmingDelete { id };
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        if matches!(self.state, CrudState::ConfirmingDelete { .. }) {
            self.state = CrudState::Idle;
        }
    }

    /// Delete the record awaiting confirmation; the row goes only on success
    pub async fn confirm_delete(&mut self) -> ClientResult<()> {
        let id = match mem::replace(&mut self.state, CrudState::Submitting) {
            CrudState::ConfirmingDelete { id } => id,
            other => {
                self.state = other;
                return Err(ClientError::InvalidState("no delete pending".into()));
            }
        };

        let result = R::delete(&self.ctx.api, id).await;
        self.state = CrudState::Idle;

        match result {
            Ok(()) => {
                tracing::info!(resource = R::LABEL, id, "deleted");
                self.items.retain(|r| R::id(r) != id);
                Ok(())
            }
            Err(e) => {
                tracing::error!(resource = R::LABEL, id, error = %e, "error deleting record");
                self.notice = Some(Notice::error(format!(
                    "Failed to delete {}. Please try again.",
                    Self::label()
                )));
                Err(e)
            }
        }
    }
}
