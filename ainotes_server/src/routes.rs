pub mod generate;
pub mod notes;
pub mod pdf;
