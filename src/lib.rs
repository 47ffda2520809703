pub mod app;
pub mod config;
pub mod controller;
pub mod data;
pub mod model;
pub mod nav;
pub mod progress;
pub mod storage;
pub mod theme;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use controller::QuizController;
