use thiserror::Error;

use crate::model::config::TargetError;
use crate::model::ids::ParseIdError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Target(#[from] TargetError),
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
}
