//! Structured invocation logging.
//!
//! Provides [`JsonlInvocationLogger`], a JSONL file writer implementing the
//! [`InvocationLogger`](inspector_application::InvocationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlInvocationLogger;
