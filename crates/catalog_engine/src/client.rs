use catalog_core::{
    DeleteReceipt, ListQuery, Product, ProductDraft, ProductId, ProductPage, ProductPatch,
};
use catalog_logging::{catalog_debug, catalog_warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{ClientError, ClientSettings};

/// The products collection of the backend, one method per REST call.
/// A failed call is reported once; retrying is left to the caller.
#[async_trait::async_trait]
pub trait ProductApi: Send + Sync {
    async fn list(&self, query: ListQuery) -> Result<ProductPage, ClientError>;
    async fn get(&self, id: ProductId) -> Result<Product, ClientError>;
    async fn create(&self, draft: &ProductDraft) -> Result<Product, ClientError>;
    async fn update(&self, id: ProductId, patch: &ProductPatch) -> Result<Product, ClientError>;
    async fn delete(&self, id: ProductId) -> Result<DeleteReceipt, ClientError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    List,
    Get(ProductId),
    Create,
    Update(ProductId),
    Delete(ProductId),
}

impl Operation {
    fn generic_message(self) -> String {
        match self {
            Operation::List => "failed to load products".to_string(),
            Operation::Get(id) => format!("failed to load product {id}"),
            Operation::Create => "failed to create product".to_string(),
            Operation::Update(id) => format!("failed to update product {id}"),
            Operation::Delete(id) => format!("failed to delete product {id}"),
        }
    }

    fn failure(self, status: u16, detail: Option<String>) -> ClientError {
        match (self, detail) {
            (Operation::Get(id), detail) if status == 404 => ClientError::NotFound {
                id,
                detail: detail.unwrap_or_else(|| format!("product {id} not found")),
            },
            (Operation::Create | Operation::Update(_) | Operation::Delete(_), Some(detail))
                if (400..500).contains(&status) =>
            {
                ClientError::Validation { status, detail }
            }
            (op, detail) => ClientError::Server {
                status,
                detail: detail.unwrap_or_else(|| op.generic_message()),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReqwestProductClient {
    http: reqwest::Client,
    collection: Url,
}

impl ReqwestProductClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientError> {
        let collection = collection_url(&settings.base_url, &settings.api_prefix)?;
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|err| ClientError::Build {
                message: err.to_string(),
            })?;
        Ok(Self { http, collection })
    }

    fn item_url(&self, id: ProductId) -> Result<Url, ClientError> {
        self.collection
            .join(&id.to_string())
            .map_err(|err| ClientError::InvalidBaseUrl {
                url: self.collection.to_string(),
                message: err.to_string(),
            })
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        op: Operation,
    ) -> Result<T, ClientError> {
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let err = op.failure(status.as_u16(), extract_detail(&body));
            catalog_warn!("{:?} failed with status {}: {}", op, status, err);
            return Err(err);
        }

        catalog_debug!("{:?} succeeded with status {}", op, status);
        serde_json::from_slice(&body).map_err(|err| ClientError::Server {
            status: status.as_u16(),
            detail: format!("invalid response body: {err}"),
        })
    }
}

#[async_trait::async_trait]
impl ProductApi for ReqwestProductClient {
    async fn list(&self, query: ListQuery) -> Result<ProductPage, ClientError> {
        let mut url = self.collection.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("skip", &query.skip.to_string())
                .append_pair("limit", &query.limit.to_string());
            if let Some(is_offer) = query.is_offer {
                pairs.append_pair("is_offer", if is_offer { "true" } else { "false" });
            }
        }
        catalog_debug!("GET {}", url);
        self.send(self.http.get(url), Operation::List).await
    }

    async fn get(&self, id: ProductId) -> Result<Product, ClientError> {
        let url = self.item_url(id)?;
        catalog_debug!("GET {}", url);
        self.send(self.http.get(url), Operation::Get(id)).await
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, ClientError> {
        let url = self.collection.clone();
        catalog_debug!("POST {}", url);
        let request = with_json_body(self.http.post(url), draft)?;
        self.send(request, Operation::Create).await
    }

    async fn update(&self, id: ProductId, patch: &ProductPatch) -> Result<Product, ClientError> {
        let url = self.item_url(id)?;
        catalog_debug!("PUT {}", url);
        let request = with_json_body(self.http.put(url), patch)?;
        self.send(request, Operation::Update(id)).await
    }

    async fn delete(&self, id: ProductId) -> Result<DeleteReceipt, ClientError> {
        let url = self.item_url(id)?;
        catalog_debug!("DELETE {}", url);
        self.send(self.http.delete(url), Operation::Delete(id)).await
    }
}

fn collection_url(base_url: &str, api_prefix: &str) -> Result<Url, ClientError> {
    let invalid = |message: String| ClientError::InvalidBaseUrl {
        url: base_url.to_string(),
        message,
    };
    let base = Url::parse(base_url.trim()).map_err(|err| invalid(err.to_string()))?;
    if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
        return Err(invalid("expected an http(s) url".to_string()));
    }
    let prefix = api_prefix.trim_matches('/');
    let joined = if prefix.is_empty() {
        format!("{}/products/", base.as_str().trim_end_matches('/'))
    } else {
        format!(
            "{}/{}/products/",
            base.as_str().trim_end_matches('/'),
            prefix
        )
    };
    Url::parse(&joined).map_err(|err| invalid(err.to_string()))
}

fn with_json_body<B: Serialize>(
    request: reqwest::RequestBuilder,
    body: &B,
) -> Result<reqwest::RequestBuilder, ClientError> {
    let bytes = serde_json::to_vec(body).map_err(|err| ClientError::Encode {
        message: err.to_string(),
    })?;
    Ok(request.header(CONTENT_TYPE, "application/json").body(bytes))
}

/// Pulls a user-facing message out of an error body. Accepts `{"detail": "..."}`
/// and the list form `{"detail": [{"loc": [...], "msg": "..."}]}`.
pub(crate) fn extract_detail(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<String> = items.iter().filter_map(describe_detail_item).collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

fn describe_detail_item(item: &serde_json::Value) -> Option<String> {
    let msg = item.get("msg")?.as_str()?;
    let field = item
        .get("loc")
        .and_then(serde_json::Value::as_array)
        .and_then(|loc| loc.iter().rev().find_map(serde_json::Value::as_str));
    Some(match field {
        Some(field) if field != "body" => format!("{field}: {msg}"),
        _ => msg.to_string(),
    })
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    let message = if err.is_timeout() {
        format!("request timed out: {err}")
    } else {
        err.to_string()
    };
    ClientError::Network { message }
}
