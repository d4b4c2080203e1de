use thiserror::Error;

use crate::models::{DeliveryId, MotherId};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("delivery {delivery} references unknown mother {mother}")]
    UnknownMother {
        delivery: DeliveryId,
        mother: MotherId,
    },

    #[error("duplicate mother id: {0}")]
    DuplicateMother(MotherId),
}
