#![allow(warnings)]
//! Zaiko Frontend Entry Point

mod models;
mod commands;
mod context;
mod store;
mod components;
mod app;

use std::sync::Arc;

use app::App;
use leptos::prelude::*;
use rolling_logger::{LogRecord, LoggerConfig, Sink};
use tracing::Level;

/// Mirror every record to the browser console
fn console_sink() -> Sink {
    Arc::new(|record: &LogRecord| {
        let line = record.to_string().into();
        match record.level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    })
}

fn main() {
    console_error_panic_hook::set_once();

    let logs = match rolling_logger::init(LoggerConfig::default(), Some(console_sink())) {
        Ok(handle) => Some(handle),
        Err(e) => {
            web_sys::console::warn_1(&format!("[APP] logger unavailable: {e}").into());
            None
        }
    };

    mount_to_body(move || view! { <App logs=logs.clone() /> });
}
