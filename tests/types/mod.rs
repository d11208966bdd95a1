mod error;
mod errors;
