use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("unknown Robson group: {0} (expected 1-10)")]
    UnknownGroup(u8),
}
