//! SurrealDB Adapter
//!
//! Maps the generic [`Adapter`](crate::Adapter) operations onto SurrealDB's
//! HTTP interface (`POST /sql`, `GET /health`).
//!
//! # Components
//!
//! - [`Transport`]: One HTTP request per call, Basic auth, optional deadline
//! - [`Batch`] / [`Statement`]: Typed SurrealQL templates with named result slots
//! - [`BatchResponse`]: Slot-addressed view over ordered statement results
//! - [`SurrealAdapter`]: Façade composing the above
//!
//! # Round trips
//!
//! | Operation | Requests |
//! |---|---|
//! | `ping` | `GET /health` |
//! | `list`, `exists(db)` | `INFO FOR KV;` |
//! | `exists(db, table)` | `INFO FOR KV;` then `USE NS db DB db; INFO FOR DB;` |
//! | `create(name)` | `INFO FOR KV;` then, if absent, `DEFINE NAMESPACE name; USE NS name; DEFINE DATABASE name;` |
//! | `delete(name)` | `INFO FOR KV;` then, if present, `REMOVE NAMESPACE name;` |

mod adapter;
pub mod response;
pub mod statement;
pub mod transport;

pub use adapter::{SurrealAdapter, SurrealAdapterBuilder};
pub use response::{BatchResponse, StatementResult};
pub use statement::{Batch, Slot, Statement};
pub use transport::{Credentials, HttpMethod, Route, Transport, TransportBuilder};
