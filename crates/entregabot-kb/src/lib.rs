//! # EntregaBot Knowledge Base
//!
//! Flat lookup tables loaded once from JSON at startup and read-only
//! afterwards: the FAQ corpus, the policy table, and the mock order/user
//! books. No persistence, no mutation.

pub mod corpus;
pub mod orders;
pub mod policies;
pub mod users;

pub use corpus::load_corpus;
pub use orders::{Order, OrderBook};
pub use policies::{Policy, PolicyTable};
pub use users::{User, UserBook};
