//! Request parameter objects and response/callback payload types.

pub mod buy_order;
pub mod callback;
pub mod envelope;
pub mod invoice;

pub use buy_order::{BuyOrderCreate, BuyOrderListQuery};
pub use callback::CallbackPayload;
pub use envelope::{ApiEnvelope, ApiFailure, EnvelopeError};
pub use invoice::{InvoiceCreate, InvoiceInputCreate, InvoiceListQuery, InvoiceUpdate};

/// Body or query parameters of a single call, in insertion order.
pub type Params = serde_json::Map<String, serde_json::Value>;
