use eframe::egui;

use crate::common::{Message, MessageId};

/// Vẽ danh sách tin nhắn. Double-click một tin nhắn để ghim.
pub fn render(ui: &mut egui::Ui, messages: &[Message], self_name: &str) -> Option<MessageId> {
    let mut pin = None;

    egui::ScrollArea::vertical()
        .max_height(288.0)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                let own = message.sender == self_name;
                let layout = if own {
                    egui::Layout::right_to_left(egui::Align::TOP)
                } else {
                    egui::Layout::left_to_right(egui::Align::TOP)
                };

                ui.with_layout(layout, |ui| {
                    let fill = if own {
                        egui::Color32::from_rgb(59, 130, 246)
                    } else {
                        ui.visuals().faint_bg_color
                    };
                    let text_color = own.then_some(egui::Color32::WHITE);

                    let response = egui::Frame::group(ui.style())
                        .fill(fill)
                        .show(ui, |ui| {
                            ui.vertical(|ui| {
                                let mut header =
                                    egui::RichText::new(format!("{} {}", message.avatar, message.sender))
                                        .strong();
                                let mut body = egui::RichText::new(&message.content);
                                if let Some(color) = text_color {
                                    header = header.color(color);
                                    body = body.color(color);
                                }
                                ui.label(header);
                                ui.label(body);
                            });
                        })
                        .response
                        .interact(egui::Sense::click());

                    if response.double_clicked() {
                        pin = Some(message.id);
                    }
                });
            }
        });

    pin
}
