mod app;
mod confetti;
pub mod theme;
pub mod view;

pub use app::CountdownApp;
