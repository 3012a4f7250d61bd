use thiserror::Error;

use crate::catalog::CatalogError;
use crate::eval::MetricsError;
use crate::model::ParseIdError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Metrics(#[from] MetricsError),
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
}
