//! Use cases (application services)

pub mod invoke_tool;
pub mod tools_session;
