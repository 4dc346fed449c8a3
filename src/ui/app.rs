use std::time::Duration;

use eframe::egui;
use tokio::runtime::Handle;

use crate::controller::{ControllerSettings, ConversationController};
use crate::storage::SeedData;

use super::components::{
    chat_area, group_picker, input_bar, pinned_banner,
    top_bar::{self, TopBarActions},
};

/// Repaint định kỳ để tin nhắn bot và cờ "đang gõ" hiện ra khi không có input.
const REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct ChatApp {
    controller: ConversationController,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        seed: &SeedData,
        settings: ControllerSettings,
        runtime: Handle,
    ) -> Self {
        Self {
            controller: ConversationController::new(seed, settings, runtime),
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.pump();

        let snapshot = self.controller.snapshot();
        ctx.set_visuals(if snapshot.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        let mut top_actions = TopBarActions::default();
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            top_actions = top_bar::render(ui, &snapshot);
        });

        let mut picked_group = None;
        let mut pinned = None;
        let mut input = input_bar::InputActions::default();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("📨 Message Tracker");
                ui.label(
                    egui::RichText::new(format!("Total messages: {}", snapshot.messages.len()))
                        .small()
                        .weak(),
                );
            });
            ui.add_space(8.0);

            pinned_banner::render(ui, snapshot.pinned);
            ui.add_space(8.0);

            picked_group = group_picker::render(ui, &snapshot);
            ui.separator();
            pinned = chat_area::render(ui, snapshot.messages, snapshot.self_name);

            ui.separator();
            if snapshot.typing {
                ui.label(egui::RichText::new("Someone is typing...").small().weak());
            }
            input = input_bar::render(ui, snapshot.draft);
        });

        if top_actions.toggle_theme {
            self.controller.toggle_theme();
        }
        if top_actions.toggle_notifications {
            self.controller.toggle_notifications();
        }
        if let Some(group) = picked_group {
            if let Err(err) = self.controller.select_group(group) {
                log::warn!("Failed to switch group: {err}");
            }
        }
        if let Some(id) = pinned {
            self.controller.pin_message(id);
        }
        if let Some(text) = input.draft {
            self.controller.update_draft(&text);
        }
        if input.send {
            self.controller.send_draft();
        }
        if input.attach {
            self.controller.attach_media();
        }

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
