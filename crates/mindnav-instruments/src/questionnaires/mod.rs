pub mod teen_12_14;
pub mod teen_15_18;
