//! Registration-data lookup: provider orchestration, fallback data and
//! response normalization.

pub mod fallback;
pub mod normalizer;
pub mod resolver;
pub mod service;

// Re-export main functionality
pub use fallback::synthesize;
pub use normalizer::normalize;
pub use resolver::WhoisResolver;
pub use service::WhoisService;
