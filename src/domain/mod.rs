//! Domain layer for Naming Sentinel
//!
//! Architecture: Domain Model - Pure types for naming-convention findings
//! - Contains the finding entities, report aggregate, and error taxonomy
//! - Independent of infrastructure concerns like file systems, configuration
//!   formats, or terminal output

pub mod findings;

// Re-export main domain types for convenience
pub use findings::*;
