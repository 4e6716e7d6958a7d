mod lifecycle;
mod render;

use std::sync::mpsc::Receiver;

use chrono::{DateTime, Utc};

use crate::config::CountdownConfig;
use crate::services::celebration::ConfettiField;
use crate::services::countdown::CountdownService;
use crate::services::ticker::TickerHandle;
use crate::ui_egui::theme::CountdownTheme;
use crate::ui_egui::view::ViewModel;

pub struct CountdownApp {
    config: CountdownConfig,
    countdown: CountdownService,
    confetti: ConfettiField,
    /// Resolved once at startup
    viewer_timezone: String,
    /// The target never moves, so its rendering is computed once
    formatted_target: String,
    current_time: DateTime<Utc>,
    view: ViewModel,
    active_theme: CountdownTheme,
    /// Declared before `runtime` so the task is aborted before the runtime shuts down
    ticker: TickerHandle,
    tick_rx: Receiver<()>,
    /// Hosts the ticker task; must outlive `ticker`
    #[allow(dead_code)]
    runtime: tokio::runtime::Runtime,
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}
