pub mod errors;
pub mod models;
pub mod relay;
pub mod utils;
