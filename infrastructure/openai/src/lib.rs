pub mod client;
pub mod generative_backend;
