use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use diesel::r2d2::PoolError;
use serde::Serialize;

pub(crate) const NOT_FOUND_DETAIL: &str = "Item not found";
pub(crate) const INTERNAL_DETAIL: &str = "Internal Server Error";

/// Anything the backing store can fail with.
#[derive(Debug, thiserror::Error)]
pub(crate) enum StoreError {
    #[error("could not check out a database connection: {0}")]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Query(#[from] diesel::result::Error),
}

/// Errors a handler hands back to actix. Only the status and a fixed detail
/// reach the client.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ApiError {
    #[error("item {0} not found")]
    NotFound(i64),
    #[error("{context}: {source}")]
    Persistence {
        context: String,
        #[source]
        source: StoreError,
    },
    #[error("blocking task canceled: {0}")]
    Blocking(BlockingError),
}

impl ApiError {
    /// Logs `source` with `context` and wraps it as a generic failure.
    pub(crate) fn persistence(context: impl Into<String>) -> impl FnOnce(StoreError) -> ApiError {
        let context = context.into();
        move |source| {
            log::error!("{}: {}", context, source);
            ApiError::Persistence { context, source }
        }
    }
}

impl From<BlockingError> for ApiError {
    fn from(err: BlockingError) -> Self {
        log::error!("blocking database task did not complete: {}", err);
        ApiError::Blocking(err)
    }
}

#[derive(Serialize)]
pub(crate) struct ErrorBody<'a> {
    pub detail: &'a str,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Persistence { .. } | ApiError::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            ApiError::NotFound(_) => NOT_FOUND_DETAIL,
            ApiError::Persistence { .. } | ApiError::Blocking(_) => INTERNAL_DETAIL,
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { detail })
    }
}

/// Fatal errors while booting; `main` returns these and the process exits.
#[derive(Debug, thiserror::Error)]
pub(crate) enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] envy::Error),
    #[error("failed to create connection pool: {0}")]
    Pool(#[from] PoolError),
    #[error("failed to initialize schema: {0}")]
    Schema(#[from] diesel::result::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
