use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use uuid::Uuid;

use crate::{
    client::{
        api::{ClientError, FeedbackApi},
        session::Session,
    },
    models::{FeedbackDraft, FeedbackInput, FeedbackRecord, Rating},
    validation::{FieldErrors, validate},
};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete?";
pub const CREATED_NOTICE: &str = "Feedback submitted!";
pub const UPDATED_NOTICE: &str = "Feedback updated!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientMode {
    Viewing,
    Composing,
    Editing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(FeedbackRecord),
    Updated(FeedbackRecord),
    Invalid(FieldErrors),
    Failed(ClientError),
}

impl SubmitOutcome {
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Created(_) => Some(CREATED_NOTICE),
            SubmitOutcome::Updated(_) => Some(UPDATED_NOTICE),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_) | SubmitOutcome::Updated(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
    Failed(ClientError),
}

// Observable "saving" flag. `submit` borrows the client mutably, so only one
// submission can be pending per client.
#[derive(Debug, Clone, Default)]
pub struct InFlight(Arc<AtomicBool>);

impl InFlight {
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn acquire(&self) -> InFlightGuard {
        self.0.store(true, Ordering::Release);
        InFlightGuard(self.0.clone())
    }
}

// Clears the flag when the request settles or the submit future is dropped.
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct FeedbackClient<A> {
    api: A,
    owner_id: Option<String>,
    feedbacks: Vec<FeedbackRecord>,
    draft: FeedbackDraft,
    editing_id: Option<Uuid>,
    errors: FieldErrors,
    in_flight: InFlight,
}

impl<A: FeedbackApi> FeedbackClient<A> {
    pub fn new(api: A, session: &Session) -> Self {
        Self {
            api,
            owner_id: session.owner_id().map(str::to_owned),
            feedbacks: Vec::new(),
            draft: FeedbackDraft::default(),
            editing_id: None,
            errors: FieldErrors::default(),
            in_flight: InFlight::default(),
        }
    }

    // Follows login/logout. Switching owners drops the cached list and any
    // half-written form.
    pub fn set_session(&mut self, session: &Session) {
        let owner_id = session.owner_id().map(str::to_owned);
        if owner_id == self.owner_id {
            return;
        }

        tracing::debug!("Feedback owner changed to {:?}", owner_id);
        self.owner_id = owner_id;
        self.feedbacks.clear();
        self.errors = FieldErrors::default();
        self.clear_form();
    }

    pub fn logout(&mut self) {
        self.set_session(&Session::anonymous());
    }

    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    pub fn feedbacks(&self) -> &[FeedbackRecord] {
        &self.feedbacks
    }

    pub fn draft(&self) -> &FeedbackDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn editing_id(&self) -> Option<Uuid> {
        self.editing_id
    }

    pub fn in_flight_handle(&self) -> InFlight {
        self.in_flight.clone()
    }

    pub fn is_saving(&self) -> bool {
        self.in_flight.is_set()
    }

    pub fn mode(&self) -> ClientMode {
        if self.editing_id.is_some() {
            ClientMode::Editing
        } else if !self.draft.is_blank() {
            ClientMode::Composing
        } else {
            ClientMode::Viewing
        }
    }

    pub fn heading(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Edit Feedback"
        } else {
            "Feedback Form"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_saving() {
            "Saving…"
        } else if self.editing_id.is_some() {
            "Update Feedback"
        } else {
            "Submit Feedback"
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
    }

    pub fn set_rating(&mut self, rating: Option<Rating>) {
        self.draft.rating = rating;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.draft.message = message.into();
    }

    // Without an owner nothing is fetched.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let Some(owner_id) = self.owner_id.as_deref() else {
            tracing::debug!("No logged-in user, skipping feedback fetch");
            return Ok(());
        };

        self.feedbacks = self.api.list(owner_id).await?;
        Ok(())
    }

    // Failures are only logged; the previous list is kept.
    pub async fn load(&mut self) {
        if let Err(e) = self.refresh().await {
            tracing::error!("Error fetching feedback: {}", e);
        }
    }

    pub fn begin_edit(&mut self, record: &FeedbackRecord) {
        self.editing_id = Some(record.id);
        self.draft = FeedbackDraft::from_record(record);
    }

    pub fn cancel_edit(&mut self) {
        self.clear_form();
    }

    fn clear_form(&mut self) {
        self.draft = FeedbackDraft::default();
        self.editing_id = None;
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let _guard = self.in_flight.acquire();

        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            return SubmitOutcome::Invalid(self.errors.clone());
        }

        let Some(owner_id) = self.owner_id.clone() else {
            tracing::error!("Submit error: {}", ClientError::MissingOwner);
            return SubmitOutcome::Failed(ClientError::MissingOwner);
        };
        let Some(fields) = self.draft.to_fields() else {
            return SubmitOutcome::Invalid(self.errors.clone());
        };
        let input = FeedbackInput { owner_id, fields };

        let result = match self.editing_id {
            Some(id) => self.api.update(id, &input).await.map(SubmitOutcome::Updated),
            None => self.api.create(&input).await.map(SubmitOutcome::Created),
        };

        match result {
            Ok(outcome) => {
                self.clear_form();
                self.load().await;
                outcome
            }
            Err(e) => {
                tracing::error!("Submit error: {}", e);
                SubmitOutcome::Failed(e)
            }
        }
    }

    pub async fn delete<F>(&mut self, id: Uuid, confirm: F) -> DeleteOutcome
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(DELETE_PROMPT) {
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                self.load().await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                tracing::error!("Delete error: {}", e);
                DeleteOutcome::Failed(e)
            }
        }
    }
}
