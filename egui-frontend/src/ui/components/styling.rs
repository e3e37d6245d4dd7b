//! # Styling Module
//!
//! Global egui style and the color constants used across the form.
//!
//! ## Key Functions:
//! - `setup_milk_tracker_style()` - Configure global egui styling
//! - `draw_table_header_background()` - Fill a table header cell
//! - `card_frame()` - Frame used for the price, table and summary cards

use eframe::egui;

/// Setup a clean, light UI style for the entire application
pub fn setup_milk_tracker_style(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::light());

    ctx.style_mut(|style| {
        style.visuals.panel_fill = colors::PAGE_BACKGROUND;

        // Text edits use extreme_bg_color for their background in egui 0.28
        style.visuals.extreme_bg_color = colors::INPUT_BACKGROUND;

        // Larger text for readability
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(26.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.text_edit_width = 120.0;
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(4.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(4.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(4.0);
    });
}

/// White card with a thin border and rounded corners
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(colors::CARD_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(16.0))
        .shadow(egui::epaint::Shadow {
            offset: egui::vec2(0.0, 2.0),
            blur: 6.0,
            spread: 0.0,
            color: colors::CARD_SHADOW,
        })
}

/// Fill a header cell with the header gray
pub fn draw_table_header_background(ui: &mut egui::Ui, rect: egui::Rect) {
    ui.painter().rect_filled(rect, egui::Rounding::ZERO, colors::TABLE_HEADER);
}

/// Color constants for the form
pub mod colors {
    use eframe::egui::Color32;

    pub const PAGE_BACKGROUND: Color32 = Color32::WHITE;
    pub const INPUT_BACKGROUND: Color32 = Color32::from_rgb(250, 250, 250);

    // Cards
    pub const CARD_BACKGROUND: Color32 = Color32::WHITE;
    pub const CARD_BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    pub const CARD_SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 20);

    // Table
    pub const TABLE_HEADER: Color32 = Color32::from_rgb(229, 231, 235);     // Gray 200
    pub const TEXT: Color32 = Color32::BLACK;

    // Summary box
    pub const SUMMARY_BACKGROUND: Color32 = Color32::from_rgb(243, 244, 246); // Gray 100
}
