use eframe::egui;

use crate::ui::app_state::MilkTrackerApp;

/// Title shown in the window bar and above the form
pub const APP_TITLE: &str = "Monthly Milk Tracker";

impl MilkTrackerApp {
    /// Render the page title and, while the startup load runs, a spinner
    pub fn render_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.heading(egui::RichText::new(APP_TITLE).strong());

            if self.ui.loading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.weak("Loading saved data…");
                });
            }
            ui.add_space(8.0);
        });
    }
}
