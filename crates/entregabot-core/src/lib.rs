//! # EntregaBot Core
//!
//! Shared foundation for the EntregaBot delivery-support chatbot:
//! configuration, error type, wire types, and the `Generator` trait that
//! every text-generation backend implements.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use error::{EntregaError, Result};
pub use traits::Generator;
