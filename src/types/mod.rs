//! Core type definitions: request bodies and response accessors.

pub mod request;
pub mod response;

pub use request::{FunctionCallOutput, RequestInput, ResponsesRequest};
pub use response::FunctionCall;
