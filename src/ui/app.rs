//! Main application for the chess GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::history_panel;
use super::theme::*;
use crate::config::GameConfig;
use crate::game::{format_clock, Event, GameController};
use crate::rules::{color_name, Color};

/// Main chess application
///
/// Render functions only collect [`Event`]s; they are dispatched to the
/// controller in order once the frame is laid out.
pub struct ChessApp {
    controller: GameController,
    board_view: BoardView,
    events: Vec<Event>,
}

impl Default for ChessApp {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}

impl ChessApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            controller: GameController::new(config),
            board_view: BoardView::default(),
            events: Vec::new(),
        }
    }

    /// Render the top bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.events.push(Event::Reset);
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new("Chess Game").strong());
                });
            });
        });
    }

    /// Render the side panel with clocks, status and history
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(260.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PAGE_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                self.render_clock_card(ui);
                ui.add_space(10.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_history_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(CARD_ROUNDING))
            .inner_margin(12.0)
    }

    /// Both clocks side by side, the running one highlighted
    fn render_clock_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                self.render_clock(ui, Color::White, "♔ White");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_clock(ui, Color::Black, "♚ Black");
                });
            });
        });
    }

    fn render_clock(&self, ui: &mut egui::Ui, side: Color, label: &str) {
        let remaining = self.controller.clock().remaining(side);
        let running = self.controller.timer_active() && self.controller.side_to_move() == side;
        let low = self.controller.config().low_time_seconds;

        let color = if remaining == 0 {
            TIMER_CRITICAL
        } else if remaining < low {
            TIMER_WARNING
        } else if running {
            TIMER_NORMAL
        } else {
            TIMER_IDLE
        };

        ui.vertical(|ui| {
            ui.label(RichText::new(label).size(12.0).color(TEXT_SECONDARY));
            let text = RichText::new(format_clock(remaining)).size(24.0).monospace().color(color);
            ui.label(if running { text.strong() } else { text });
        });
    }

    /// Whose turn it is, or how the game ended
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            if let Some(outcome) = self.controller.outcome() {
                ui.label(RichText::new("GAME OVER").size(10.0).color(TEXT_MUTED));
                ui.label(RichText::new(outcome.describe()).size(15.0).strong().color(GAME_OVER));
            } else if let Some(index) = self.controller.review().index() {
                ui.label(RichText::new("REVIEW").size(10.0).color(TEXT_MUTED));
                ui.label(
                    RichText::new(format!("After move {} of {}", index + 1, self.controller.history().len()))
                        .size(15.0)
                        .color(TEXT_PRIMARY),
                );
            } else {
                let side = color_name(self.controller.side_to_move());
                ui.label(RichText::new("TO MOVE").size(10.0).color(TEXT_MUTED));
                ui.label(RichText::new(side).size(15.0).strong().color(TEXT_PRIMARY));
            }

            if let Some(claim) = self.controller.draw_claim() {
                ui.add_space(4.0);
                ui.label(RichText::new(claim.describe()).size(11.0).color(TIMER_WARNING));
            }
        });
    }

    fn render_history_card(&mut self, ui: &mut egui::Ui) {
        let view = self.controller.history_view();
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            if let Some(event) = history_panel::show(ui, &view, 290.0) {
                self.events.push(event);
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        let restart = egui::Button::new(RichText::new("Restart").color(TEXT_PRIMARY))
            .fill(BUTTON_PRIMARY)
            .corner_radius(CornerRadius::same(6));

        ui.horizontal(|ui| {
            if ui.add(restart).clicked() {
                self.events.push(Event::Reset);
            }
            ui.label(
                RichText::new(format!("Move #{}", self.controller.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render the board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PAGE_BG).inner_margin(16.0))
            .show(ctx, |ui| {
                let highlight = self.controller.last_move().map(|mv| (mv.from, mv.to));
                let interactive = self.controller.outcome().is_none();

                let dropped = self.board_view.show(
                    ui,
                    self.controller.displayed_position(),
                    highlight,
                    interactive,
                    self.controller.is_reviewing(),
                );

                if let Some(event) = dropped {
                    self.events.push(event);
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.events.push(Event::Reset);
            }

            if self.controller.is_reviewing() {
                if i.key_pressed(egui::Key::ArrowLeft) {
                    self.events.push(Event::Prev);
                }
                if i.key_pressed(egui::Key::ArrowRight) {
                    self.events.push(Event::Next);
                }
                if i.key_pressed(egui::Key::Escape) {
                    self.events.push(Event::ExitReview);
                }
            }
        });
    }
}

impl eframe::App for ChessApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        for event in self.events.drain(..) {
            self.controller.dispatch(event);
        }

        // Nothing else wakes the UI up while the clock runs
        if let Some(delay) = self.controller.advance_clock(Instant::now()) {
            ctx.request_repaint_after(delay);
        }
    }
}
