//! Backend Command Wrappers
//!
//! Frontend bindings to the `/menu` REST resource, split into the raw
//! HTTP transport and the typed menu gateway.

mod transport;
mod menu;

pub use transport::{HttpTransport, ReqwestTransport, TransportError};
pub use menu::{GatewayError, GatewayResult, MenuGateway, RemoteMenuGateway};
