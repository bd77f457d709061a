//! JSON-RPC API Layer
//!
//! Versioned JSON-RPC 2.0 methods (`<area>.<action>.v1`) over the
//! record services and the kitchen boards.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use server::{RpcServer, RpcServerConfig, RpcServerError};
