//! Central panel: sign-in form when signed out, balances and payments when signed in

use eframe::egui;

use account_viewer_core::{ActionStatus, AppState, PaymentRecord, PublicKey};

use crate::state::SignInState;
use crate::ui::{self, palette};

/// Render the sign-in form. Returns the key to sign in with once submitted and valid.
pub fn render_sign_in(
    ui: &mut egui::Ui,
    sign_in: &mut SignInState,
    state: &AppState,
) -> Option<PublicKey> {
    let mut submitted = None;
    let pending = state.account.status == ActionStatus::Pending;

    ui::styled_heading(ui, "Sign in with a public key");
    ui.label("View balances and recent payments of any Stellar account.");
    ui.add_space(15.0);

    let response = ui.add(
        egui::TextEdit::singleline(&mut sign_in.public_key_input)
            .hint_text("G...")
            .desired_width(560.0)
            .font(egui::TextStyle::Monospace),
    );
    if response.changed() {
        sign_in.error = None;
    }
    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.add_space(10.0);
    let clicked = ui::primary_button_enabled(ui, "Sign in", !pending).clicked();
    if (clicked || enter) && !pending {
        if let Ok(key) = sign_in.validate() {
            submitted = Some(key);
        }
    }

    if pending {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading account...");
        });
    }
    if let Some(error) = sign_in.error.as_deref().or(state.account.error.as_deref()) {
        ui.add_space(8.0);
        ui::error_message(ui, error);
    }

    submitted
}

/// Render balances and recent payments of the signed-in account
pub fn render_account(ui: &mut egui::Ui, state: &AppState) {
    let Some(data) = &state.account.data else {
        return;
    };

    if let Some(error) = &state.account.error {
        ui::error_message(ui, error);
    }

    ui::section_header(ui, "Balances");
    ui::card(ui, |ui| {
        if data.balances.is_empty() {
            ui.label(egui::RichText::new("No balances").weak());
        }
        egui::Grid::new("balances_grid")
            .num_columns(2)
            .spacing([40.0, 6.0])
            .show(ui, |ui| {
                for balance in &data.balances {
                    ui.label(egui::RichText::new(balance.asset_label()).strong());
                    ui.label(egui::RichText::new(ui::format_amount(&balance.balance)).monospace());
                    ui.end_row();
                }
            });
    });

    ui::section_header(ui, "Recent payments");
    if let Some(error) = &state.tx_history.error {
        ui::error_message(ui, error);
    }
    if state.tx_history.records.is_empty() {
        ui.label(egui::RichText::new("No payments yet").weak());
        return;
    }
    let own_key = data.id.as_deref();
    egui::Grid::new("payments_grid")
        .num_columns(4)
        .striped(true)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            for record in &state.tx_history.records {
                payment_row(ui, record, own_key);
                ui.end_row();
            }
        });
}

fn payment_row(ui: &mut egui::Ui, record: &PaymentRecord, own_key: Option<&str>) {
    ui.label(egui::RichText::new(&record.created_at).small().color(palette::GREY_DARK));
    ui.label(record.kind.replace('_', " "));

    let amount = record
        .amount
        .as_deref()
        .map(ui::format_amount)
        .unwrap_or_default();
    let asset = record.asset_code.as_deref().unwrap_or("XLM");
    let outgoing = own_key.is_some() && record.from.as_deref() == own_key;
    let sign = if outgoing { "-" } else { "+" };
    if amount.is_empty() {
        ui.label("");
    } else {
        ui.label(egui::RichText::new(format!("{sign}{amount} {asset}")).monospace());
    }

    let counterparty = if outgoing { &record.to } else { &record.from };
    ui.label(
        egui::RichText::new(account_viewer_core::format_public_key(counterparty.as_deref()))
            .monospace(),
    );
}
