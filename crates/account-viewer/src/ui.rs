//! UI helper components

use eframe::egui;

use account_viewer_core::{Identicon, IDENTICON_SIZE};

/// Stellar palette
pub mod palette {
    use eframe::egui::Color32;

    pub const PURPLE: Color32 = Color32::from_rgb(62, 27, 219);
    pub const WHITE: Color32 = Color32::WHITE;
    pub const GREY: Color32 = Color32::from_rgb(207, 207, 207);
    pub const GREY_DARK: Color32 = Color32::from_rgb(102, 102, 102);
    pub const RED: Color32 = Color32::from_rgb(220, 80, 80);
}

/// Header height and vertical padding, in points.
pub const HEADER_HEIGHT: f32 = 40.0;
pub const HEADER_VERTICAL_PADDING: f32 = 12.0;
/// Below this width the account row wraps under the logo.
pub const HEADER_WRAP_WIDTH: f32 = 720.0;

pub const AVATAR_SIZE: f32 = 28.0;

/// Open URL in a new browser tab
#[cfg(target_arch = "wasm32")]
pub fn open_url_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_url_new_tab(url: &str) {
    if let Err(e) = open::that(url) {
        tracing::warn!(url, error = %e, "failed to open url");
    }
}

/// Copy to clipboard (platform-specific)
#[cfg(not(target_arch = "wasm32"))]
pub fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text) {
                tracing::warn!(error = %e, "clipboard write failed");
            }
        }
        Err(e) => tracing::warn!(error = %e, "clipboard unavailable"),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let navigator = window.navigator();
        let clipboard = navigator.clipboard();
        let _ = clipboard.write_text(text);
    }
}

/// Paint an identicon avatar. Without one, an empty grey disc keeps the layout stable.
pub fn avatar(ui: &mut egui::Ui, identicon: Option<&Identicon>) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let radius = AVATAR_SIZE / 2.0;

    let Some(identicon) = identicon else {
        painter.circle_filled(rect.center(), radius, palette::GREY);
        return response;
    };

    painter.circle_filled(rect.center(), radius, palette::WHITE);
    painter.circle_stroke(rect.center(), radius, egui::Stroke::new(1.0, palette::GREY));

    let color: egui::Color32 = egui::ecolor::Hsva::new(identicon.hue / 360.0, 0.7, 0.8, 1.0).into();
    // Inset the grid into the circle
    let grid = rect.shrink(AVATAR_SIZE * 0.2);
    let cell = grid.width() / IDENTICON_SIZE as f32;
    for (row, col) in identicon.filled_cells() {
        let min = grid.min + egui::vec2(col as f32 * cell, row as f32 * cell);
        painter.rect_filled(
            egui::Rect::from_min_size(min, egui::vec2(cell, cell)),
            0.0,
            color,
        );
    }
    response
}

/// Frameless text button styled like a link
pub fn text_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(
            egui::RichText::new(text)
                .size(14.0)
                .strong()
                .color(palette::PURPLE),
        )
        .frame(false),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Wrap `add_contents` so clicking it copies `copy_text`. Shows "Copied" while `copied` is true.
pub fn copy_with_tooltip(
    ui: &mut egui::Ui,
    copy_text: Option<&str>,
    copied: bool,
    add_contents: impl FnOnce(&mut egui::Ui),
) -> bool {
    let response = ui
        .scope(add_contents)
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(if copied { "Copied" } else { "Copy public key" });

    if copied {
        ui.label(
            egui::RichText::new("Copied")
                .small()
                .color(palette::GREY_DARK),
        );
    }

    response.clicked() && copy_text.is_some()
}

/// "Account Viewer" badge next to the logo
pub fn badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::none()
        .fill(palette::PURPLE)
        .rounding(2.0)
        .inner_margin(egui::Margin::symmetric(6.0, 3.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(text.to_uppercase())
                    .size(13.0)
                    .strong()
                    .color(palette::WHITE),
            );
        });
}

/// Styled heading with accent color
pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(egui::RichText::new(text).color(palette::PURPLE));
}

/// Section header with separator
pub fn section_header(ui: &mut egui::Ui, text: &str) {
    ui.add_space(10.0);
    ui.label(egui::RichText::new(text).strong().size(14.0));
    ui.separator();
}

/// Primary action button
pub fn primary_button_enabled(ui: &mut egui::Ui, text: &str, enabled: bool) -> egui::Response {
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0).color(palette::WHITE))
        .min_size(egui::vec2(130.0, 34.0))
        .fill(palette::PURPLE);
    ui.add_enabled(enabled, btn)
}

/// Error message display
pub fn error_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("❌").size(16.0));
        ui.label(egui::RichText::new(message).color(palette::RED));
    });
}

/// Render content in a subtle card/frame
pub fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(6.0)
        .inner_margin(12.0)
        .show(ui, add_contents);
}

/// Format a Horizon decimal amount: thousand separators, trailing zeros trimmed.
pub fn format_amount(amount: &str) -> String {
    let trimmed = amount.trim();
    let (int_part, dec_part) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let int_formatted = add_thousand_separators(digits);
    let dec_trimmed = dec_part.trim_end_matches('0');
    if dec_trimmed.is_empty() {
        format!("{}{}", sign, int_formatted)
    } else {
        format!("{}{}.{}", sign, int_formatted, dec_trimmed)
    }
}

/// Add thousand separators to a numeric string
fn add_thousand_separators(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
