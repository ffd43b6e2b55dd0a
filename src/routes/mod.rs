mod home;

pub use home::{home, PIPELINE_MESSAGE};
