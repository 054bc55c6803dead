pub mod sentiment;
pub mod serve;
pub mod trends;

// Re-export command functions for convenience
pub use sentiment::{hashtag, sentiment};
pub use serve::serve;
pub use trends::{breakdown, products, trends};
