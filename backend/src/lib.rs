//! Ecosystem shell library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use doc::ApiDoc;
pub use middleware::Trace;
