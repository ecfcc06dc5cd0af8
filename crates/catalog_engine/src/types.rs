use catalog_core::{
    DeleteReceipt, DismissToken, EditingContext, Product, ProductDraft, ProductId, ProductPage,
};
use thiserror::Error;

/// Failure of a single backend call. Each variant carries a human-readable
/// detail taken from the response body when present.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// No response was received.
    #[error("network error: {message}")]
    Network { message: String },
    /// Non-2xx without a usable detail, or a 2xx body that could not be decoded.
    #[error("server error ({status}): {detail}")]
    Server { status: u16, detail: String },
    /// 4xx with a server-supplied detail.
    #[error("{detail}")]
    Validation { status: u16, detail: String },
    #[error("product {id} not found: {detail}")]
    NotFound { id: ProductId, detail: String },
    #[error("invalid base url {url}: {message}")]
    InvalidBaseUrl { url: String, message: String },
    #[error("could not encode request: {message}")]
    Encode { message: String },
    /// The HTTP client could not be constructed; nothing was sent.
    #[error("could not build http client: {message}")]
    Build { message: String },
}

impl ClientError {
    /// The message meant for the user.
    pub fn detail(&self) -> &str {
        match self {
            ClientError::Network { message } => message,
            ClientError::Server { detail, .. }
            | ClientError::Validation { detail, .. }
            | ClientError::NotFound { detail, .. } => detail,
            ClientError::InvalidBaseUrl { message, .. }
            | ClientError::Encode { message }
            | ClientError::Build { message } => message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } | ClientError::Validation { status, .. } => {
                Some(*status)
            }
            ClientError::NotFound { .. } => Some(404),
            ClientError::Network { .. }
            | ClientError::InvalidBaseUrl { .. }
            | ClientError::Encode { .. }
            | ClientError::Build { .. } => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Completion reports from the engine. Every command yields exactly one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ProductsListed(Result<ProductPage, ClientError>),
    ProductFetched {
        id: ProductId,
        result: Result<Product, ClientError>,
    },
    ProductSaved {
        context: EditingContext,
        draft: ProductDraft,
        result: Result<Product, ClientError>,
    },
    ProductDeleted {
        id: ProductId,
        result: Result<DeleteReceipt, ClientError>,
    },
    DismissElapsed {
        token: DismissToken,
    },
}
