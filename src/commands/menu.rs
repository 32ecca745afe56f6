//! Menu Commands
//!
//! Typed bindings for the `/menu` resource. Every call goes to the
//! transport; nothing is cached here.

use std::collections::BTreeMap;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use super::transport::{HttpTransport, TransportError};
use crate::models::MenuItem;

const MENU_PATH: &str = "/menu";

/// Characters that may not appear raw in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failures a menu call can surface to the store and the draft engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error("Network error: {0}. Please try again.")]
    Network(String),
    #[error("Menu item {id} was not found")]
    NotFound { id: String },
    #[error("{message}")]
    Validation {
        message: String,
        fields: BTreeMap<String, String>,
    },
    #[error("Server responded with status {status}")]
    UnexpectedStatus { status: u16 },
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Discriminant of `GatewayError`, used when mapping to view status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    NotFound,
    Validation,
    UnexpectedStatus,
    Decode,
}

impl GatewayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::Network(_) => ErrorKind::Network,
            GatewayError::NotFound { .. } => ErrorKind::NotFound,
            GatewayError::Validation { .. } => ErrorKind::Validation,
            GatewayError::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
            GatewayError::Decode(_) => ErrorKind::Decode,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Whether the same request may succeed if simply retried
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::Network(_) => true,
            GatewayError::UnexpectedStatus { status } => *status >= 500,
            _ => false,
        }
    }

    /// Translate a transport failure. `id` is set for single-item calls,
    /// the only ones where a 404 means "item absent".
    fn from_transport(err: TransportError, id: Option<&str>) -> Self {
        match (err, id) {
            (TransportError::Network(msg), _) => GatewayError::Network(msg),
            (TransportError::Decode(msg), _) => GatewayError::Decode(msg),
            (TransportError::Status { status: 404, .. }, Some(id)) => {
                GatewayError::NotFound { id: id.to_string() }
            }
            (TransportError::Status { status, body }, _) if (400..500).contains(&status) && status != 404 => {
                validation_error(status, &body)
            }
            (TransportError::Status { status, .. }, _) => GatewayError::UnexpectedStatus { status },
        }
    }
}

/// Pull `message` and per-field `errors` out of a 4xx body.
///
/// Accepts `{"errors": {"name": "..."}}` as well as
/// `{"errors": {"name": ["...", "..."]}}` (first message wins).
fn validation_error(status: u16, body: &Value) -> GatewayError {
    let message = ["message", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request rejected (status {})", status));

    let fields = body
        .get("errors")
        .and_then(Value::as_object)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|(field, value)| {
                    let text = match value {
                        Value::String(s) => Some(s.clone()),
                        Value::Array(list) => list.first().and_then(Value::as_str).map(str::to_string),
                        _ => None,
                    };
                    text.map(|t| (field.clone(), t))
                })
                .collect()
        })
        .unwrap_or_default();

    GatewayError::Validation { message, fields }
}

/// Remote store of menu items
#[async_trait(?Send)]
pub trait MenuGateway {
    async fn fetch_all(&self) -> GatewayResult<Vec<MenuItem>>;
    async fn fetch_one(&self, id: &str) -> GatewayResult<MenuItem>;
    async fn create(&self, item: &MenuItem) -> GatewayResult<MenuItem>;
    async fn update(&self, id: &str, item: &MenuItem) -> GatewayResult<MenuItem>;
    async fn remove(&self, id: &str) -> GatewayResult<()>;
}

/// `MenuGateway` over any `HttpTransport`
#[derive(Clone, Debug)]
pub struct RemoteMenuGateway<T> {
    transport: T,
}

impl<T: HttpTransport> RemoteMenuGateway<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn item_path(id: &str) -> String {
        format!("{}/{}", MENU_PATH, utf8_percent_encode(id, PATH_SEGMENT))
    }
}

fn decode<V: DeserializeOwned>(value: Value) -> GatewayResult<V> {
    serde_json::from_value(value).map_err(|e| GatewayError::Decode(e.to_string()))
}

fn encode(item: &MenuItem) -> GatewayResult<Value> {
    serde_json::to_value(item).map_err(|e| GatewayError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl<T: HttpTransport> MenuGateway for RemoteMenuGateway<T> {
    async fn fetch_all(&self) -> GatewayResult<Vec<MenuItem>> {
        let value = self
            .transport
            .get(MENU_PATH)
            .await
            .map_err(|e| GatewayError::from_transport(e, None))?;
        decode(value)
    }

    async fn fetch_one(&self, id: &str) -> GatewayResult<MenuItem> {
        let value = self
            .transport
            .get(&Self::item_path(id))
            .await
            .map_err(|e| GatewayError::from_transport(e, Some(id)))?;
        decode(value)
    }

    async fn create(&self, item: &MenuItem) -> GatewayResult<MenuItem> {
        let body = encode(&MenuItem { id: None, ..item.clone() })?;
        let value = self
            .transport
            .post(MENU_PATH, &body)
            .await
            .map_err(|e| GatewayError::from_transport(e, None))?;
        decode(value)
    }

    async fn update(&self, id: &str, item: &MenuItem) -> GatewayResult<MenuItem> {
        let body = encode(item)?;
        let value = self
            .transport
            .put(&Self::item_path(id), &body)
            .await
            .map_err(|e| GatewayError::from_transport(e, Some(id)))?;
        decode(value)
    }

    async fn remove(&self, id: &str) -> GatewayResult<()> {
        self.transport
            .delete(&Self::item_path(id))
            .await
            .map_err(|e| GatewayError::from_transport(e, Some(id)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    /// Transport answering every call with one canned result
    struct CannedTransport {
        answer: Result<Value, TransportError>,
        calls: RefCell<Vec<(String, String, Option<Value>)>>,
    }

    impl CannedTransport {
        fn new(answer: Result<Value, TransportError>) -> Self {
            Self { answer, calls: RefCell::new(Vec::new()) }
        }

        fn record(&self, method: &str, path: &str, body: Option<&Value>) -> Result<Value, TransportError> {
            self.calls
                .borrow_mut()
                .push((method.to_string(), path.to_string(), body.cloned()));
            self.answer.clone()
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for CannedTransport {
        async fn get(&self, path: &str) -> Result<Value, TransportError> {
            self.record("GET", path, None)
        }
        async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
            self.record("POST", path, Some(body))
        }
        async fn put(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
            self.record("PUT", path, Some(body))
        }
        async fn delete(&self, path: &str) -> Result<Value, TransportError> {
            self.record("DELETE", path, None)
        }
    }

    fn status(status: u16, body: Value) -> Result<Value, TransportError> {
        Err(TransportError::Status { status, body })
    }

    #[tokio::test]
    async fn test_fetch_all_decodes_items() {
        let gateway = RemoteMenuGateway::new(CannedTransport::new(Ok(json!([
            { "id": "1", "name": "Latte", "price": "4" },
            { "id": 2, "name": "Mocha", "price": 5, "sizes": ["S", "L"] }
        ]))));

        let items = gateway.fetch_all().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id(), Some("2"));
        assert_eq!(items[1].sizes, vec!["S", "L"]);
        assert_eq!(gateway.transport.calls.borrow()[0].1, "/menu");
    }

    #[tokio::test]
    async fn test_fetch_one_404_is_not_found() {
        let gateway = RemoteMenuGateway::new(CannedTransport::new(status(404, Value::Null)));
        let err = gateway.fetch_one("42").await.unwrap_err();
        assert_eq!(err, GatewayError::NotFound { id: "42".to_string() });
        assert_eq!(gateway.transport.calls.borrow()[0].1, "/menu/42");
    }

    #[tokio::test]
    async fn test_fetch_all_404_is_not_item_absence() {
        let gateway = RemoteMenuGateway::new(CannedTransport::new(status(404, Value::Null)));
        let err = gateway.fetch_all().await.unwrap_err();
        assert_eq!(err, GatewayError::UnexpectedStatus { status: 404 });
    }

    #[tokio::test]
    async fn test_network_failure_kept_distinct() {
        let gateway = RemoteMenuGateway::new(CannedTransport::new(Err(TransportError::Network(
            "connection refused".to_string(),
        ))));
        let err = gateway.fetch_one("1").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_server_field_errors_collected() {
        let gateway = RemoteMenuGateway::new(CannedTransport::new(status(
            422,
            json!({ "message": "Invalid item", "errors": { "name": ["taken", "short"], "price": "negative" } }),
        )));

        match gateway.create(&MenuItem::default()).await.unwrap_err() {
            GatewayError::Validation { message, fields } => {
                assert_eq!(message, "Invalid item");
                assert_eq!(fields.get("name").map(String::as_str), Some("taken"));
                assert_eq!(fields.get("price").map(String::as_str), Some("negative"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_strips_id_and_keeps_price_shape() {
        let gateway = RemoteMenuGateway::new(CannedTransport::new(Ok(json!({ "id": "9", "name": "Tea" }))));
        let item: MenuItem = serde_json::from_value(json!({ "id": "old", "name": "Tea", "price": 3 })).unwrap();

        let created = gateway.create(&item).await.unwrap();
        assert_eq!(created.id(), Some("9"));

        let calls = gateway.transport.calls.borrow();
        let body = calls[0].2.as_ref().unwrap();
        assert_eq!(calls[0].0, "POST");
        assert!(body.get("id").is_none());
        assert_eq!(body["price"], json!(3));
    }

    #[tokio::test]
    async fn test_item_path_is_percent_encoded() {
        let gateway = RemoteMenuGateway::new(CannedTransport::new(Ok(Value::Null)));
        gateway.remove("a b/c").await.unwrap();
        assert_eq!(gateway.transport.calls.borrow()[0].1, "/menu/a%20b%2Fc");
    }

    #[tokio::test]
    async fn test_server_error_is_retryable_status() {
        let gateway = RemoteMenuGateway::new(CannedTransport::new(status(503, Value::Null)));
        let err = gateway.update("1", &MenuItem::default()).await.unwrap_err();
        assert_eq!(err, GatewayError::UnexpectedStatus { status: 503 });
        assert!(err.is_retryable());
    }
}
