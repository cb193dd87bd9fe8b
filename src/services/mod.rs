pub mod sheets;
pub mod submission;
