use eframe::egui;

use crate::common::GroupId;
use crate::controller::ConversationSnapshot;

/// Trả về nhóm vừa được chọn nếu người dùng đổi nhóm trong frame này.
pub fn render(ui: &mut egui::Ui, snapshot: &ConversationSnapshot<'_>) -> Option<GroupId> {
    let current_name = snapshot
        .groups
        .iter()
        .find(|group| group.id == snapshot.active_group)
        .map_or("", |group| group.name.as_str());

    let mut selected = snapshot.active_group;
    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt("group_picker")
            .selected_text(egui::RichText::new(current_name).heading())
            .show_ui(ui, |ui| {
                for group in snapshot.groups {
                    ui.selectable_value(&mut selected, group.id, group.name.as_str());
                }
            });
        ui.label("👥");
    });

    (selected != snapshot.active_group).then_some(selected)
}
