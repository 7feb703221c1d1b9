//! Move history list with review controls

use egui::{Frame, RichText, ScrollArea, Sense};

use super::theme::*;
use crate::game::{Event, HistoryView};

/// Draw the move list; clicking a row or a control yields an event
pub fn show(ui: &mut egui::Ui, view: &HistoryView, height: f32) -> Option<Event> {
    let mut event = None;

    ui.label(RichText::new("Move History").size(16.0).strong().color(TEXT_PRIMARY));
    ui.add_space(6.0);

    ScrollArea::vertical()
        .max_height(height)
        .auto_shrink([false, false])
        .stick_to_bottom(!view.show_controls)
        .show(ui, |ui| {
            if view.rows.is_empty() {
                ui.label(RichText::new("No moves yet").size(12.0).color(TEXT_MUTED));
            }

            for (index, row) in view.rows.iter().enumerate() {
                let fill = if row.selected { ROW_SELECTED } else { CARD_BG };
                let response = Frame::new()
                    .fill(fill)
                    .inner_margin(4.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(row.label()).size(13.0).monospace().color(TEXT_PRIMARY));
                    })
                    .response
                    .interact(Sense::click());

                if response.clicked() {
                    event = Some(Event::Review(index));
                }
                ui.separator();
            }
        });

    if view.show_controls {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.add_enabled(view.prev_enabled, egui::Button::new("← Prev")).clicked() {
                event = Some(Event::Prev);
            }
            if ui.add_enabled(view.next_enabled, egui::Button::new("Next →")).clicked() {
                event = Some(Event::Next);
            }
            if ui.button("Live").clicked() {
                event = Some(Event::ExitReview);
            }
        });
    }

    event
}
