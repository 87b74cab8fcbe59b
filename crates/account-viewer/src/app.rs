//! Main application state and update loop

use eframe::egui;
use web_time::Duration;

use account_viewer_adapters::ViewerConfig;

use crate::account_panel;
use crate::header::{self, HeaderAction};
use crate::state::{CopyTooltipState, SignInState};
use crate::store_bridge::StoreBridge;
use crate::ui;

/// How often to check watcher inboxes while watchers run.
const WATCH_REPAINT_INTERVAL: Duration = Duration::from_millis(250);

/// The main application state
pub struct App {
    /// Store and watchers
    store: StoreBridge,
    /// Sign-in form
    sign_in: SignInState,
    /// "Copied" feedback for the header
    copy_tooltip: CopyTooltipState,
}

impl App {
    /// Create a new App instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = ViewerConfig::from_env();
        tracing::info!(
            horizon = %config.horizon_url,
            http = config.http_enabled,
            poll_ms = config.poll_interval_ms,
            "viewer configured"
        );
        Self {
            store: StoreBridge::with_config(&config),
            sign_in: SignInState::default(),
            copy_tooltip: CopyTooltipState::new(config.copy_tooltip_ms),
        }
    }

    fn handle_header_action(&mut self, action: HeaderAction) {
        match action {
            HeaderAction::None => {}
            HeaderAction::OpenBranding(url) => ui::open_url_new_tab(&url),
            HeaderAction::CopyPublicKey(text) => {
                ui::copy_to_clipboard(&text);
                self.copy_tooltip.trigger();
            }
            HeaderAction::SignOut => {
                self.store.sign_out();
                self.sign_in.clear();
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::light());

        let applied = self.store.pump();
        if applied > 0 {
            tracing::debug!(applied, "applied watcher results");
        }

        let model = self.store.header_model();
        let action = header::render(ctx, &model, self.copy_tooltip.is_visible());
        self.handle_header_action(action);

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "Account Viewer {} ({}, built {})",
                        env!("CARGO_PKG_VERSION"),
                        env!("GIT_HASH"),
                        env!("BUILD_TIME"),
                    ))
                    .small()
                    .weak(),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(20.0);
                let state = self.store.state();
                if state.account.is_authenticated {
                    account_panel::render_account(ui, state);
                } else if let Some(key) =
                    account_panel::render_sign_in(ui, &mut self.sign_in, state)
                {
                    self.store.sign_in(key);
                }
                ui.add_space(20.0);
            });
        });

        if self.store.is_watching() {
            ctx.request_repaint_after(WATCH_REPAINT_INTERVAL);
        }
        if let Some(remaining) = self.copy_tooltip.remaining() {
            ctx.request_repaint_after(remaining);
        }
    }
}
