use std::sync::mpsc;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use super::CountdownApp;
use crate::config::{CountdownConfig, TICK_INTERVAL};
use crate::models::settings::Settings;
use crate::services::celebration::ConfettiField;
use crate::services::countdown::CountdownService;
use crate::services::format::{format_reference, format_target};
use crate::services::ticker::spawn_ticker;
use crate::services::timezone::resolve_viewer_timezone;
use crate::ui_egui::confetti::paint_confetti;
use crate::ui_egui::theme::CountdownTheme;
use crate::ui_egui::view::{build_view, ViewInput, ViewModel};

impl CountdownApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: CountdownConfig,
        settings: Settings,
    ) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("countdown-ticker")
            .enable_time()
            .build()
            .context("failed to start ticker runtime")?;

        let viewer_timezone = resolve_viewer_timezone();
        let formatted_target = format_target(config.target, &viewer_timezone);
        log::info!(
            "Counting down to {} ({})",
            config.target.to_rfc3339(),
            formatted_target
        );

        let mut confetti = ConfettiField::new();
        confetti.set_enabled(settings.celebration_enabled);

        let active_theme = CountdownTheme::for_settings(&settings);
        active_theme.apply_to_context(&cc.egui_ctx);

        // The ticker only signals; all state changes happen on the UI thread.
        let (tick_tx, tick_rx) = mpsc::channel();
        let repaint_ctx = cc.egui_ctx.clone();
        let ticker = spawn_ticker(runtime.handle(), TICK_INTERVAL, move || {
            if tick_tx.send(()).is_ok() {
                repaint_ctx.request_repaint();
            }
        });

        let now = Utc::now();
        let mut app = Self {
            config,
            countdown: CountdownService::new(config.target),
            confetti,
            viewer_timezone,
            formatted_target,
            current_time: now,
            view: ViewModel::default(),
            active_theme,
            ticker,
            tick_rx,
            runtime,
        };
        app.tick(now);
        Ok(app)
    }

    /// Recompute the countdown and rebuild the view for `now`.
    pub(super) fn tick(&mut self, now: DateTime<Utc>) {
        self.current_time = now;
        let evaluation = self.countdown.evaluate_at(now, &mut self.confetti);
        if evaluation.just_expired {
            log::info!("Decisions are out; celebration triggered");
        }

        let formatted_reference =
            format_reference(self.current_time, self.config.reference_timezone);
        self.view = build_view(&ViewInput {
            state: evaluation.state,
            phase: evaluation.phase,
            viewer_timezone: &self.viewer_timezone,
            formatted_target: &self.formatted_target,
            formatted_reference: &formatted_reference,
        });
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let pending_ticks = self.tick_rx.try_iter().count();
        if pending_ticks > 0 {
            if pending_ticks > 1 {
                log::debug!("Coalescing {} pending ticks", pending_ticks);
            }
            self.tick(Utc::now());
        }

        let screen = ctx.screen_rect();
        self.confetti
            .step(Instant::now(), (screen.width(), screen.height()));

        self.render_countdown(ctx);
        paint_confetti(ctx, self.confetti.particles());

        if self.confetti.is_active() {
            ctx.request_repaint();
        }
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.ticker.cancel();
        log::info!(
            "Shutting down countdown (ticker active: {})",
            self.ticker.is_active()
        );
    }
}
