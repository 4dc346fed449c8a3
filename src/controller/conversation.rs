//! Controller của khung chat: trạng thái của khung chat đang hiển thị.
//!
//! Mọi thao tác đều đồng bộ và chỉ sửa trạng thái trong bộ nhớ. Timer nền
//! (bot message, reset cờ "đang gõ") được áp dụng qua `pump`.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::common::{Group, GroupId, Message, MessageId, TimerEvent};
use crate::error::ChatError;
use crate::storage::{MessageStore, SeedData};

use super::scheduler::Scheduler;

pub const MEDIA_PLACEHOLDER: &str = "[Photo] 🖼️ You shared a media file.";
pub const BOT_SENDER: &str = "Bot";
pub const BOT_AVATAR: &str = "🤖";
pub const BOT_CONTENT: &str = "This is a simulated real-time message.";

#[derive(Debug, Clone)]
pub struct ControllerSettings {
    pub initial_group: GroupId,
    pub dark_mode: bool,
    pub bot_interval: Duration,
    pub typing_reset: Duration,
    pub self_name: String,
    pub self_avatar: String,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            initial_group: GroupId(1),
            dark_mode: false,
            bot_interval: Duration::from_millis(10_000),
            typing_reset: Duration::from_millis(1_500),
            self_name: "You".to_string(),
            self_avatar: "🙋‍♂️".to_string(),
        }
    }
}

/// Ảnh chụp trạng thái (chỉ đọc) mà UI vẽ ra mỗi frame.
#[derive(Debug, Clone, Copy)]
pub struct ConversationSnapshot<'a> {
    pub groups: &'a [Group],
    pub active_group: GroupId,
    pub messages: &'a [Message],
    pub pinned: Option<&'a Message>,
    pub typing: bool,
    pub draft: &'a str,
    pub dark_mode: bool,
    pub notifications_enabled: bool,
    pub self_name: &'a str,
}

pub struct ConversationController {
    settings: ControllerSettings,
    store: MessageStore,
    active_group: GroupId,
    pinned: Option<MessageId>,
    typing: bool,
    draft: String,
    dark_mode: bool,
    notifications_enabled: bool,
    scheduler: Scheduler,
    event_receiver: mpsc::Receiver<TimerEvent>,
}

impl ConversationController {
    pub fn new(seed: &SeedData, settings: ControllerSettings, runtime: Handle) -> Self {
        let store = MessageStore::from_seed(seed);

        let active_group = if store.contains(settings.initial_group) {
            settings.initial_group
        } else {
            let fallback = store
                .groups()
                .first()
                .map_or(settings.initial_group, |group| group.id);
            log::warn!(
                "Initial group {} is not registered; using {fallback}",
                settings.initial_group
            );
            fallback
        };

        let (mut scheduler, event_receiver) = Scheduler::new(runtime);
        scheduler.start_inbound(settings.bot_interval);

        log::info!(
            "Conversation controller started with {} groups, active group {active_group}",
            store.groups().len()
        );

        Self {
            dark_mode: settings.dark_mode,
            settings,
            store,
            active_group,
            pinned: None,
            typing: false,
            draft: String::new(),
            notifications_enabled: true,
            scheduler,
            event_receiver,
        }
    }

    pub fn snapshot(&self) -> ConversationSnapshot<'_> {
        let messages = self.messages();
        ConversationSnapshot {
            groups: self.store.groups(),
            active_group: self.active_group,
            messages,
            pinned: self
                .pinned
                .and_then(|id| messages.iter().find(|message| message.id == id)),
            typing: self.typing,
            draft: &self.draft,
            dark_mode: self.dark_mode,
            notifications_enabled: self.notifications_enabled,
            self_name: &self.settings.self_name,
        }
    }

    pub fn active_group(&self) -> GroupId {
        self.active_group
    }

    /// Tin nhắn của nhóm đang hiển thị, theo thứ tự thêm vào.
    pub fn messages(&self) -> &[Message] {
        self.store.log(self.active_group).unwrap_or_default()
    }

    pub fn log_for(&self, group: GroupId) -> Option<&[Message]> {
        self.store.log(group)
    }

    pub fn pinned(&self) -> Option<&Message> {
        self.snapshot().pinned
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn select_group(&mut self, group: GroupId) -> Result<(), ChatError> {
        if !self.store.contains(group) {
            log::warn!("Rejected selection of unknown group {group}");
            return Err(ChatError::InvalidGroup(group));
        }

        self.active_group = group;
        self.pinned = None;
        self.typing = false;
        self.scheduler.cancel_typing_reset();
        log::info!(
            "Switched to group {group} ({} messages)",
            self.messages().len()
        );
        Ok(())
    }

    /// Nội dung rỗng (chỉ có khoảng trắng) bị bỏ qua. Nội dung được lưu nguyên văn, không trim.
    pub fn append_message(
        &mut self,
        sender: &str,
        content: &str,
        avatar: &str,
    ) -> Option<&Message> {
        if content.trim().is_empty() {
            log::debug!("Ignoring blank message from {sender}");
            return None;
        }

        let message = self.store.append(
            self.active_group,
            sender.to_string(),
            content.to_string(),
            avatar.to_string(),
        )?;
        log::debug!("Appended message {:?} from {sender}", message.id);
        Some(message)
    }

    /// Gửi bản nháp hiện tại dưới tên người dùng; thành công thì xóa nháp.
    pub fn send_draft(&mut self) -> Option<&Message> {
        if self.draft.trim().is_empty() {
            return None;
        }

        let content = std::mem::take(&mut self.draft);
        let sender = self.settings.self_name.clone();
        let avatar = self.settings.self_avatar.clone();
        self.append_message(&sender, &content, &avatar)
    }

    pub fn attach_media(&mut self) -> Option<&Message> {
        let sender = self.settings.self_name.clone();
        let avatar = self.settings.self_avatar.clone();
        self.append_message(&sender, MEDIA_PLACEHOLDER, &avatar)
    }

    pub fn update_draft(&mut self, text: &str) {
        text.clone_into(&mut self.draft);
        self.typing = true;
        self.scheduler.schedule_typing_reset(self.settings.typing_reset);
    }

    /// Ghim tin nhắn nếu nó thuộc nhóm đang hiển thị. Chỉ có tối đa một tin được ghim.
    pub fn pin_message(&mut self, id: MessageId) -> Option<&Message> {
        if !self.messages().iter().any(|message| message.id == id) {
            log::warn!("Cannot pin {id:?}: not in group {}", self.active_group);
            return None;
        }

        self.pinned = Some(id);
        self.pinned()
    }

    pub fn toggle_theme(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    pub fn toggle_notifications(&mut self) -> bool {
        self.notifications_enabled = !self.notifications_enabled;
        log::info!(
            "Notifications {}",
            if self.notifications_enabled { "enabled" } else { "disabled" }
        );
        self.notifications_enabled
    }

    /// Áp dụng các sự kiện timer đang chờ. Trả về số sự kiện đã xử lý.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.event_receiver.try_recv() {
            self.apply_timer_event(event);
            handled += 1;
        }
        handled
    }

    fn apply_timer_event(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::InboundTick => {
                let notify = self.notifications_enabled;
                if let Some(message) = self.append_message(BOT_SENDER, BOT_CONTENT, BOT_AVATAR) {
                    if notify {
                        log::info!("New message from {}: {}", message.sender, message.content);
                    }
                }
            }
            TimerEvent::TypingElapsed(generation) => {
                if generation == self.scheduler.typing_generation() {
                    self.typing = false;
                }
            }
        }
    }

    pub fn shutdown(&mut self) {
        self.scheduler.shutdown();
        log::info!("Conversation controller stopped");
    }
}
