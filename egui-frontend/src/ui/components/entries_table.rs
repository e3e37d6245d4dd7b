//! # Entries Table
//!
//! The 31-row table: day number, one quantity input per source, and the
//! read-only row total. Built on `egui_extras::TableBuilder`; the outer scroll
//! area does the scrolling so the table's own vertical scroll is off.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::{MilkSource, DAYS_IN_MONTH};

use crate::backend::domain::RecordStore;
use crate::ui::components::styling::{card_frame, colors, draw_table_header_background};
use crate::ui::components::summary_panel::format_amount;

const HEADER_HEIGHT: f32 = 32.0;
const ROW_HEIGHT: f32 = 30.0;

/// Column headings, left to right
pub const COLUMN_TITLES: [&str; 4] = ["Day", "Cow Qty (L)", "Buff Qty (L)", "Total (₹)"];

/// Render the entry table. Returns true if any quantity changed this frame.
pub fn render_entries_table(ui: &mut egui::Ui, store: &mut RecordStore) -> bool {
    let mut changed = false;

    card_frame().show(ui, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(60.0))                  // DAY column
            .column(Column::remainder().at_least(110.0))  // COW column
            .column(Column::remainder().at_least(110.0))  // BUFFALO column
            .column(Column::exact(120.0))                 // TOTAL column
            .header(HEADER_HEIGHT, |mut header| {
                for title in COLUMN_TITLES {
                    header.col(|ui| {
                        let rect = ui.max_rect();
                        draw_table_header_background(ui, rect);
                        ui.with_layout(egui::Layout::centered_and_justified(egui::Direction::LeftToRight), |ui| {
                            ui.colored_label(colors::TEXT, egui::RichText::new(title).strong());
                        });
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, DAYS_IN_MONTH, |mut row| {
                    let index = row.index();

                    row.col(|ui| {
                        ui.with_layout(egui::Layout::centered_and_justified(egui::Direction::LeftToRight), |ui| {
                            ui.label(store.entries()[index].day.to_string());
                        });
                    });

                    for source in MilkSource::ALL {
                        row.col(|ui| {
                            let mut text = store.entries()[index].quantity(source).to_string();
                            let response = ui.add(
                                egui::TextEdit::singleline(&mut text)
                                    .id(egui::Id::new(("quantity", index, source)))
                                    .desired_width(f32::INFINITY),
                            );
                            if response.changed() && store.set_quantity(index, source, text) {
                                changed = true;
                            }
                        });
                    }

                    row.col(|ui| {
                        ui.with_layout(egui::Layout::centered_and_justified(egui::Direction::LeftToRight), |ui| {
                            ui.label(egui::RichText::new(format_amount(store.day_total(index))).strong());
                        });
                    });
                });
            });
    });

    changed
}
