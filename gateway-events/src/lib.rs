//! Event contracts for the Lambda authorizer demo.
//!
//! The authorizer function and the business logic function never call each
//! other. API Gateway invokes the authorizer first and, when the request is
//! allowed, attaches the authorizer's context to the request it forwards to
//! the business function. This crate is the written-down form of that shared
//! contract: the inbound event shape each function receives and the response
//! shape each returns.
//!
//! Every field the platform may omit is optional or defaulted, so any JSON
//! object deserializes into a request type. A missing header or an absent
//! authorizer context is a valid input, never a deserialization failure.

pub mod request;
pub mod response;

pub use crate::request::{AuthorizerContext, AuthorizerRequest, BusinessRequest};
pub use crate::response::{AuthorizerResponse, BusinessResponse};
