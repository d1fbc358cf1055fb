pub mod errors;
pub mod movie;
