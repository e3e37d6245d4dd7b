use eframe::egui;
use shared::MilkSource;

use crate::ui::app_state::MilkTrackerApp;
use crate::ui::components::styling::card_frame;

impl MilkTrackerApp {
    /// Render the two per-liter price inputs. Returns true if either changed.
    pub fn render_price_panel(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;
        let store = &mut self.store;

        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Milk Prices (per Liter)").size(18.0).strong());
            ui.add_space(6.0);

            ui.columns(MilkSource::ALL.len(), |columns| {
                for (column, source) in columns.iter_mut().zip(MilkSource::ALL) {
                    let mut text = store.prices().price(source).to_string();
                    let response = column.add(
                        egui::TextEdit::singleline(&mut text)
                            .id(egui::Id::new(("price", source)))
                            .hint_text(format!("{} Price", source.label()))
                            .desired_width(f32::INFINITY),
                    );
                    if response.changed() {
                        store.set_price(source, text);
                        changed = true;
                    }
                }
            });
        });

        changed
    }
}
