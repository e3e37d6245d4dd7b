use eframe::egui;
use shared::{MilkSource, MonthlyTotals};

use crate::ui::components::styling::colors;

/// Amounts are shown as plain floats with a rupee sign, no rounding
pub fn format_amount(value: f64) -> String {
    format!("₹{}", value)
}

/// Render the per-source totals and the grand total
pub fn render_summary_panel(ui: &mut egui::Ui, totals: &MonthlyTotals) {
    egui::Frame::none()
        .fill(colors::SUMMARY_BACKGROUND)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            for source in MilkSource::ALL {
                ui.label(
                    egui::RichText::new(format!("{} Total: {}", source.label(), format_amount(totals.total(source))))
                        .strong(),
                );
            }

            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(format!("Grand Total: {}", format_amount(totals.grand_total)))
                    .size(19.0)
                    .strong(),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_uses_shortest_float() {
        assert_eq!(format_amount(35.0), "₹35");
        assert_eq!(format_amount(0.0), "₹0");
        assert_eq!(format_amount(12.5), "₹12.5");
        assert_eq!(format_amount(0.1 + 0.2), "₹0.30000000000000004");
    }
}
