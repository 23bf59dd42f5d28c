pub mod context;
pub mod entry;
pub mod prompts;

pub use entry::{Args, run};
