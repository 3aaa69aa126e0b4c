//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST API routers
//! - `postgres` - PostgreSQL port implementations
//! - `memory` - In-memory port implementations for tests and development

pub mod http;
pub mod memory;
pub mod postgres;
