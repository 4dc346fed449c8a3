use eframe::egui;

#[derive(Default)]
pub struct InputActions {
    /// Nội dung ô nhập mới nếu người dùng vừa gõ.
    pub draft: Option<String>,
    pub send: bool,
    pub attach: bool,
}

pub fn render(ui: &mut egui::Ui, draft: &str) -> InputActions {
    let mut actions = InputActions::default();
    let mut input_text = draft.to_string();

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut input_text).hint_text("Type a message..."),
        );
        if response.changed() {
            actions.draft = Some(input_text.clone());
        }

        if ui.button("➤").clicked() {
            actions.send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            actions.send = true;
        }

        if ui.button("📎").clicked() {
            actions.attach = true;
        }
    });

    actions
}
