mod contact;

pub use contact::{submit_inquiry, SubmitInquiry};
