// Service module exports

pub mod celebration;
pub mod countdown;
pub mod format;
pub mod settings;
pub mod ticker;
pub mod timezone;
