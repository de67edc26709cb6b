#![allow(non_snake_case)]

mod app;
mod context;
mod routes;
mod views;
mod vm;

pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
