//! Progress reporting for tool invocations

pub mod reporter;
