mod app;
mod components;

pub use app::ChatApp;
