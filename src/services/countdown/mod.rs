mod service;

pub use service::{CountdownService, Evaluation};
