//! roster-gateway: the invocation boundary in front of the record store.
//!
//! The presenter side of the application never holds a reference to the
//! [`RecordStore`](roster_store::RecordStore). Everything it does goes
//! through one entry point: a method name plus a list of positional
//! arguments, both plain structured values. This crate turns that untrusted
//! pair into a validated store operation:
//!
//! 1. The name is parsed into the closed [`Method`] enum. Anything outside
//!    the allow-list fails with `MethodNotFound` before the store is
//!    touched.
//! 2. Arguments are decoded positionally from [`serde_json::Value`]s.
//! 3. The store operation runs, and its outcome - the return value or an
//!    expected error - is re-wrapped into a [`Failure`] carrying a
//!    machine-checkable kind and a human-readable description. No raw fault
//!    ever crosses the boundary.
//!
//! [`Gateway::spawn`] moves the store into a single tokio task that
//! processes requests one at a time, so a check-then-mutate operation can
//! never interleave with another call. [`GatewayHandle`] is the cheap,
//! clonable presenter-side endpoint.
//!
//! A disjoint, fire-and-forget [`notice`] surface carries user-facing
//! popup messages; the gateway never depends on its outcome.

mod dispatch;
mod failure;
mod method;
pub mod notice;
mod service;

pub use dispatch::dispatch;
pub use failure::{Failure, FailureKind};
pub use method::Method;
pub use notice::{notice_channel, Notice, NoticeKind, NoticeSender};
pub use service::{Gateway, GatewayClosed, GatewayHandle, Reply};
