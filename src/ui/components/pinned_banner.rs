use eframe::egui;

use crate::common::Message;

pub fn render(ui: &mut egui::Ui, pinned: Option<&Message>) {
    let Some(message) = pinned else {
        return;
    };

    egui::Frame::group(ui.style())
        .fill(egui::Color32::from_rgb(254, 240, 138))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new("📌 Pinned:")
                    .strong()
                    .color(egui::Color32::BLACK),
            );
            ui.label(egui::RichText::new(&message.content).color(egui::Color32::BLACK));
        });
}
