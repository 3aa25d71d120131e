pub mod dirs;
pub mod tokio;
