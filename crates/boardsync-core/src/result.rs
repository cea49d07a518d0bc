use crate::error::SyncError;

pub type SyncResult<T> = Result<T, SyncError>;
