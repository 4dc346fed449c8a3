use eframe::egui;

use crate::controller::ConversationSnapshot;

#[derive(Default)]
pub struct TopBarActions {
    pub toggle_theme: bool,
    pub toggle_notifications: bool,
}

pub fn render(ui: &mut egui::Ui, snapshot: &ConversationSnapshot<'_>) -> TopBarActions {
    let mut actions = TopBarActions::default();

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        // Chưa có màn hình cài đặt
        ui.add(egui::Button::new("⚙"));

        let bell = if snapshot.notifications_enabled {
            egui::RichText::new("🔔")
        } else {
            egui::RichText::new("🔕").weak()
        };
        if ui.button(bell).clicked() {
            actions.toggle_notifications = true;
        }

        let theme_icon = if snapshot.dark_mode { "☀" } else { "🌙" };
        if ui.button(theme_icon).clicked() {
            actions.toggle_theme = true;
        }
    });

    actions
}
