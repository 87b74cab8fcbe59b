//! Page header: branding, account summary and sign-out

use eframe::egui;

use account_viewer_core::{AccountSection, Branding, HeaderModel};

use crate::ui::{self, palette, HEADER_HEIGHT, HEADER_VERTICAL_PADDING, HEADER_WRAP_WIDTH};

/// Header action returned after rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderAction {
    None,
    OpenBranding(String),
    CopyPublicKey(String),
    SignOut,
}

/// Render the header panel
pub fn render(ctx: &egui::Context, model: &HeaderModel, copied: bool) -> HeaderAction {
    let mut action = HeaderAction::None;
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        action = render_contents(ui, model, copied);
    });
    action
}

/// Render the header into an existing `Ui`
pub fn render_contents(ui: &mut egui::Ui, model: &HeaderModel, copied: bool) -> HeaderAction {
    let mut action = HeaderAction::None;
    // Narrow windows put the account row on its own line under the logo
    let wide = ui.available_width() >= HEADER_WRAP_WIDTH;

    ui.add_space(HEADER_VERTICAL_PADDING);
    ui.horizontal(|ui| {
        ui.set_min_height(HEADER_HEIGHT);
        branding(ui, &model.branding, &mut action);

        if let (true, Some(account)) = (wide, &model.account) {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                sign_out(ui, account, &mut action);
                ui.add_space(12.0);
                ui.separator();
                ui.add_space(12.0);
                // Right-to-left: the key is added before the avatar so the avatar sits left of it
                public_key(ui, account, copied, &mut action);
                ui::avatar(ui, account.avatar.as_ref());
            });
        }
    });

    if let (false, Some(account)) = (wide, &model.account) {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.set_min_height(HEADER_HEIGHT);
            ui::avatar(ui, account.avatar.as_ref());
            public_key(ui, account, copied, &mut action);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                sign_out(ui, account, &mut action);
            });
        });
    }
    ui.add_space(HEADER_VERTICAL_PADDING);

    action
}

fn branding(ui: &mut egui::Ui, branding: &Branding, action: &mut HeaderAction) {
    let logo = ui
        .link(
            egui::RichText::new("✦ Stellar")
                .size(20.0)
                .strong()
                .color(ui.visuals().strong_text_color()),
        )
        .on_hover_text(branding.url);
    if logo.clicked() {
        *action = HeaderAction::OpenBranding(branding.url.to_owned());
    }
    ui.add_space(12.0);
    ui::badge(ui, branding.label);
}

fn public_key(ui: &mut egui::Ui, account: &AccountSection, copied: bool, action: &mut HeaderAction) {
    let clicked = ui::copy_with_tooltip(ui, account.copy_text.as_deref(), copied, |ui| {
        ui.horizontal(|ui| {
            let key = egui::RichText::new(&account.display_key)
                .size(16.0)
                .strong()
                .monospace();
            let icon = egui::RichText::new("📋").color(palette::PURPLE);
            // Keep the icon right of the key even when the row is laid out right-to-left
            if ui.layout().prefer_right_to_left() {
                ui.label(icon);
                ui.label(key);
            } else {
                ui.label(key);
                ui.label(icon);
            }
        });
    });
    if clicked {
        if let Some(text) = &account.copy_text {
            *action = HeaderAction::CopyPublicKey(text.clone());
        }
    }
}

fn sign_out(ui: &mut egui::Ui, account: &AccountSection, action: &mut HeaderAction) {
    if ui::text_button(ui, account.sign_out_label).clicked() {
        *action = HeaderAction::SignOut;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use account_viewer_core::{AccountData, AccountSnapshot};

    const KEY: &str = "GAAZI4TCR3TY5OJHCTJC2A4QSY6CJWJH5IAJTGKIN2ER7LBNVKOCCWN7";

    /// Painted text and its screen rect.
    type Painted = Vec<(String, egui::Rect)>;

    fn collect_text(shape: &egui::epaint::Shape, out: &mut Painted) {
        match shape {
            egui::epaint::Shape::Text(text) => out.push((
                text.galley.text().to_owned(),
                egui::Rect::from_min_size(text.pos, text.galley.size()),
            )),
            egui::epaint::Shape::Vec(shapes) => {
                for s in shapes {
                    collect_text(s, out);
                }
            }
            _ => {}
        }
    }

    /// Run one headless frame at the given width with `events` as input.
    fn run_frame(
        ctx: &egui::Context,
        model: &HeaderModel,
        width: f32,
        events: Vec<egui::Event>,
    ) -> (HeaderAction, Painted) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(width, 600.0),
            )),
            events,
            ..Default::default()
        };
        let mut action = HeaderAction::None;
        let output = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let frame_action = render_contents(ui, model, false);
                if frame_action != HeaderAction::None {
                    action = frame_action;
                }
            });
        });

        let mut painted = Vec::new();
        for clipped in &output.shapes {
            collect_text(&clipped.shape, &mut painted);
        }
        (action, painted)
    }

    fn rendered_text(snapshot: &AccountSnapshot, width: f32) -> Painted {
        let ctx = egui::Context::default();
        let model = HeaderModel::from_snapshot(snapshot);
        let (action, painted) = run_frame(&ctx, &model, width, Vec::new());
        assert_eq!(action, HeaderAction::None);
        painted
    }

    fn find<'a>(painted: &'a Painted, text: &str) -> Option<&'a egui::Rect> {
        painted.iter().find(|(t, _)| t == text).map(|(_, rect)| rect)
    }

    fn authenticated() -> AccountSnapshot {
        AccountSnapshot {
            is_authenticated: true,
            data: Some(AccountData {
                id: Some(KEY.to_owned()),
                ..AccountData::default()
            }),
        }
    }

    #[test]
    fn unauthenticated_header_shows_only_branding() {
        let painted = rendered_text(&AccountSnapshot::default(), 1024.0);
        assert!(painted.iter().any(|(t, _)| t.contains("Stellar")));
        assert!(find(&painted, "ACCOUNT VIEWER").is_some());
        assert!(find(&painted, "Sign out").is_none());
    }

    #[test]
    fn authenticated_header_shows_key_and_sign_out() {
        for width in [1024.0, 480.0] {
            let painted = rendered_text(&authenticated(), width);
            assert!(find(&painted, "GAAZ…CWN7").is_some(), "width {width}: {painted:?}");
            assert!(find(&painted, "Sign out").is_some(), "width {width}");
            assert!(find(&painted, "ACCOUNT VIEWER").is_some(), "width {width}");
        }
    }

    #[test]
    fn copy_icon_follows_key() {
        for width in [1024.0, 480.0] {
            let painted = rendered_text(&authenticated(), width);
            let key = find(&painted, "GAAZ…CWN7").expect("key painted");
            let icon = find(&painted, "📋").expect("icon painted");
            assert!(icon.left() >= key.right(), "width {width}: {key:?} {icon:?}");
        }
    }

    /// Press and release the primary button over `label`; returns the release frame's action.
    fn click(model: &HeaderModel, label: &str) -> HeaderAction {
        let ctx = egui::Context::default();
        let (_, painted) = run_frame(&ctx, model, 1024.0, Vec::new());
        let pos = find(&painted, label).expect("label painted").center();

        let press = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        };
        let (pressed_action, _) =
            run_frame(&ctx, model, 1024.0, vec![egui::Event::PointerMoved(pos), press(true)]);
        assert_eq!(pressed_action, HeaderAction::None);
        run_frame(&ctx, model, 1024.0, vec![press(false)]).0
    }

    #[test]
    fn clicking_sign_out_returns_sign_out() {
        let model = HeaderModel::from_snapshot(&authenticated());
        assert_eq!(click(&model, "Sign out"), HeaderAction::SignOut);
    }

    #[test]
    fn clicking_logo_opens_branding_url() {
        let model = HeaderModel::from_snapshot(&AccountSnapshot::default());
        assert_eq!(
            click(&model, "✦ Stellar"),
            HeaderAction::OpenBranding(account_viewer_core::header::BRANDING_URL.to_owned())
        );
    }
}
