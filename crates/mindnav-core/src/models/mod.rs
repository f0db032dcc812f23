pub mod response;
pub mod score;
pub mod section;
pub mod transaction;
pub mod usage;
