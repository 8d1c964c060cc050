pub mod indicators;
pub mod money;
pub mod validation;
