use eframe::egui;

use crate::ui::app_state::MilkTrackerApp;
use crate::ui::components::{render_entries_table, render_summary_panel};

/// Widest the form grows before it is centered in the window
const CONTENT_MAX_WIDTH: f32 = 760.0;

impl eframe::App for MilkTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Patch in saved data once the startup load resolves
        self.poll_initial_load();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(CONTENT_MAX_WIDTH);
                        self.render_main_content(ui);
                    });
                });
        });
    }
}

impl MilkTrackerApp {
    /// Render the whole form and save if anything was edited this frame
    fn render_main_content(&mut self, ui: &mut egui::Ui) {
        self.render_header(ui);

        // Inputs stay read-only until the saved month has been applied
        let editable = !self.ui.loading;
        let changed = ui
            .add_enabled_ui(editable, |ui| {
                let mut changed = self.render_price_panel(ui);
                ui.add_space(16.0);
                changed |= render_entries_table(ui, &mut self.store);
                changed
            })
            .inner;

        ui.add_space(12.0);

        render_summary_panel(ui, &self.store.totals());

        ui.add_space(16.0);

        if changed {
            self.persist_changes();
        }
    }
}
