#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use fitness_feedback::{
    client::{ClientError, FeedbackApi, InFlight},
    db::MemoryFeedbackStore,
    errors::AppError,
    models::{FeedbackFields, FeedbackInput, FeedbackRecord, Rating},
    service::FeedbackService,
    state::AppState,
};
use uuid::Uuid;

pub fn memory_service() -> (FeedbackService, MemoryFeedbackStore) {
    let store = MemoryFeedbackStore::new();
    (FeedbackService::new(Arc::new(store.clone())), store)
}

pub fn memory_state() -> AppState {
    AppState {
        feedback: memory_service().0,
    }
}

pub fn fields(name: &str, email: &str, rating: Rating, message: &str) -> FeedbackFields {
    FeedbackFields {
        name: name.into(),
        email: email.into(),
        rating,
        message: message.into(),
    }
}

pub fn input(owner_id: &str, fields: FeedbackFields) -> FeedbackInput {
    FeedbackInput {
        owner_id: owner_id.into(),
        fields,
    }
}

pub fn sample_input(owner_id: &str) -> FeedbackInput {
    input(
        owner_id,
        fields("A", "a@x.com", Rating::ThreeStars, "good"),
    )
}

fn to_client_error(e: AppError) -> ClientError {
    if e.is_not_found() {
        ClientError::NotFound
    } else {
        let (status, message) = e.to_response();
        ClientError::Server {
            status: status.as_u16(),
            message,
        }
    }
}

// Calls the service in-process and counts every request.
#[derive(Clone)]
pub struct ServiceApi {
    pub service: FeedbackService,
    pub calls: Arc<AtomicUsize>,
}

impl ServiceApi {
    pub fn new(service: FeedbackService) -> Self {
        Self {
            service,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl FeedbackApi for ServiceApi {
    async fn list(&self, owner_id: &str) -> Result<Vec<FeedbackRecord>, ClientError> {
        self.hit();
        self.service
            .list_by_owner(owner_id)
            .await
            .map_err(to_client_error)
    }

    async fn create(&self, input: &FeedbackInput) -> Result<FeedbackRecord, ClientError> {
        self.hit();
        self.service
            .create(input.clone())
            .await
            .map_err(to_client_error)
    }

    async fn update(
        &self,
        id: Uuid,
        input: &FeedbackInput,
    ) -> Result<FeedbackRecord, ClientError> {
        self.hit();
        self.service
            .update(id, input.clone())
            .await
            .map_err(to_client_error)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        self.hit();
        self.service.delete(id).await.map_err(to_client_error)
    }
}

// Every request fails as if the server were unreachable.
#[derive(Clone, Default)]
pub struct UnreachableApi {
    pub calls: Arc<AtomicUsize>,
}

impl UnreachableApi {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ClientError::Transport("connection refused".into()))
    }
}

#[async_trait]
impl FeedbackApi for UnreachableApi {
    async fn list(&self, _owner_id: &str) -> Result<Vec<FeedbackRecord>, ClientError> {
        self.fail()
    }

    async fn create(&self, _input: &FeedbackInput) -> Result<FeedbackRecord, ClientError> {
        self.fail()
    }

    async fn update(
        &self,
        _id: Uuid,
        _input: &FeedbackInput,
    ) -> Result<FeedbackRecord, ClientError> {
        self.fail()
    }

    async fn delete(&self, _id: Uuid) -> Result<(), ClientError> {
        self.fail()
    }
}

// Wraps `ServiceApi` and records whether the client's saving flag is raised
// while each create/update is being served.
#[derive(Clone)]
pub struct FlagWatchingApi {
    pub inner: ServiceApi,
    pub handle: Arc<Mutex<Option<InFlight>>>,
    pub seen: Arc<Mutex<Vec<bool>>>,
}

impl FlagWatchingApi {
    pub fn new(service: FeedbackService) -> Self {
        Self {
            inner: ServiceApi::new(service),
            handle: Arc::new(Mutex::new(None)),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn watch(&self, handle: InFlight) {
        *self.handle.lock().unwrap() = Some(handle);
    }

    pub fn seen(&self) -> Vec<bool> {
        self.seen.lock().unwrap().clone()
    }

    fn record(&self) {
        let set = self
            .handle
            .lock()
            .unwrap()
            .as_ref()
            .map(InFlight::is_set)
            .unwrap_or(false);
        self.seen.lock().unwrap().push(set);
    }
}

#[async_trait]
impl FeedbackApi for FlagWatchingApi {
    async fn list(&self, owner_id: &str) -> Result<Vec<FeedbackRecord>, ClientError> {
        self.inner.list(owner_id).await
    }

    async fn create(&self, input: &FeedbackInput) -> Result<FeedbackRecord, ClientError> {
        self.record();
        self.inner.create(input).await
    }

    async fn update(
        &self,
        id: Uuid,
        input: &FeedbackInput,
    ) -> Result<FeedbackRecord, ClientError> {
        self.record();
        self.inner.update(id, input).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        self.inner.delete(id).await
    }
}
