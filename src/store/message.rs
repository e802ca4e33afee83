//! # Store Messages
//!
//! Requests sent from a [`StoreClient`](crate::store::StoreClient) to its
//! [`StoreActor`](crate::store::StoreActor), one variant per CRUD operation.

use crate::store::entity::StoreEntity;
use crate::store::error::StoreError;
use tokio::sync::oneshot;

/// One-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// A request to the store actor.
///
/// Payload types come from the [`StoreEntity`] associated types, so a request
/// for one record type can't be sent to the store of another.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
