pub mod advisory;
pub mod count;
pub mod demand;
pub mod input;
