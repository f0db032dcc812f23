//! mindnav-bedrock
//!
//! Bedrock operations for the AI report pipeline: prompt assembly, the
//! Converse API call, token accounting, and parsing of the model's Dutch
//! analysis text into renderable report sections.

pub mod analysis;
pub mod error;
pub mod prompt;
pub mod sections;
pub mod tokens;
