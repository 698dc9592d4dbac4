use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with hooks, payloads, and queries)
// =============================================================================

/// Errors produced by the store actor and its channel plumbing.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("item not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Invalid(String),
    #[error("store closed")]
    Closed,
    #[error("store dropped the request")]
    Dropped,
}

/// Trait that any domain entity must implement to be managed by [`StoreActor`].
///
/// Besides per-item CRUD, an entity defines a collection-level query: given a
/// snapshot of every stored item, produce a `QueryResult`. The store never
/// interprets the query itself.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;
    type Query: Send + Sync + Debug;
    type QueryResult: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from the ID and payload, validating it.
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, StoreError>;

    // --- Lifecycle Hooks ---

    fn on_update(&mut self, patch: Self::Patch) -> Result<(), StoreError>;
    fn on_delete(&self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Run a collection-level query over a snapshot of all stored items.
    ///
    /// Items arrive in insertion order; implementations that promise
    /// deterministic results rely on that order being stable.
    fn query(items: &[Self], query: Self::Query) -> Result<Self::QueryResult, StoreError>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

#[derive(Debug)]
pub enum StoreRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Query {
        query: T::Query,
        respond_to: Response<T::QueryResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// A store actor owning an insertion-ordered collection of entities.
///
/// The backing store is a `Vec`, not a map: collection queries depend on a
/// reproducible base order, and insertion order is the contract.
pub struct StoreActor<T: Entity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    items: Vec<T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> StoreActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            items: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = StoreClient { sender };
        (actor, client)
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { payload, respond_to } => {
                    let id = (self.next_id_fn)();
                    match T::from_create(id.clone(), payload) {
                        Ok(item) => {
                            self.items.push(item);
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|pos| self.items[pos].clone());
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Update { id, patch, respond_to } => {
                    match self.position(&id) {
                        Some(pos) => {
                            let item = &mut self.items[pos];
                            if let Err(e) = item.on_update(patch) {
                                let _ = respond_to.send(Err(e));
                                continue;
                            }
                            let _ = respond_to.send(Ok(item.clone()));
                        }
                        None => {
                            let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        }
                    }
                }
                StoreRequest::Delete { id, respond_to } => {
                    match self.position(&id) {
                        Some(pos) => {
                            if let Err(e) = self.items[pos].on_delete() {
                                let _ = respond_to.send(Err(e));
                                continue;
                            }
                            // Remove preserves the relative order of the rest.
                            self.items.remove(pos);
                            let _ = respond_to.send(Ok(()));
                        }
                        None => {
                            let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        }
                    }
                }
                StoreRequest::Query { query, respond_to } => {
                    let _ = respond_to.send(T::query(&self.items, query));
                }
            }
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct StoreClient<T: Entity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Entity> StoreClient<T> {
    /// Build a client over an existing channel; used by the mock framework.
    #[cfg(test)]
    pub fn from_sender(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T::Id, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Create { payload, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { id, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Update { id, patch, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Delete { id, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn query(&self, query: T::Query) -> Result<T::QueryResult, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Query { query, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
