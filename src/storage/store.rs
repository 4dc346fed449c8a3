use std::collections::HashMap;

use chrono::Utc;

use crate::common::{Group, GroupId, Message, MessageId};

use super::seed::SeedData;

/// Log tin nhắn append-only cho từng nhóm, kèm bộ cấp phát id đơn điệu.
///
/// Id được cấp từ một bộ đếm chung nên duy nhất trên mọi nhóm, kể cả khi
/// nhiều tin nhắn được tạo trong cùng một mili-giây.
pub struct MessageStore {
    groups: Vec<Group>,
    logs: HashMap<GroupId, Vec<Message>>,
    next_id: u64,
}

impl MessageStore {
    pub fn from_seed(seed: &SeedData) -> Self {
        let mut store = Self {
            groups: Vec::new(),
            logs: HashMap::new(),
            next_id: 1,
        };

        for group in seed.groups() {
            store.groups.push(group.clone());
            store.logs.insert(group.id, Vec::new());
            for message in seed.messages(group.id).unwrap_or_default() {
                store.append(
                    group.id,
                    message.sender.clone(),
                    message.content.clone(),
                    message.avatar.clone(),
                );
            }
        }

        store
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn contains(&self, id: GroupId) -> bool {
        self.logs.contains_key(&id)
    }

    pub fn log(&self, id: GroupId) -> Option<&[Message]> {
        self.logs.get(&id).map(Vec::as_slice)
    }

    /// Thêm tin nhắn vào log của nhóm. Nhóm không tồn tại thì trả về `None`.
    pub fn append(
        &mut self,
        group: GroupId,
        sender: String,
        content: String,
        avatar: String,
    ) -> Option<&Message> {
        let log = self.logs.get_mut(&group)?;
        let message = Message {
            id: MessageId(self.next_id),
            sender,
            content,
            avatar,
            timestamp: Utc::now().timestamp_millis(),
        };
        self.next_id += 1;
        log.push(message);
        log.last()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn seed_ids_are_unique_across_groups() {
        let store = MessageStore::from_seed(&SeedData::builtin());
        let ids: HashSet<_> = store
            .groups()
            .iter()
            .flat_map(|g| store.log(g.id).unwrap_or_default())
            .map(|m| m.id)
            .collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn append_to_unknown_group_is_rejected() {
        let mut store = MessageStore::from_seed(&SeedData::builtin());
        let appended = store
            .append(GroupId(42), "X".into(), "y".into(), "z".into())
            .is_some();
        assert!(!appended);
        assert!(!store.contains(GroupId(42)));
    }

    #[test]
    fn rapid_appends_get_increasing_ids() {
        let mut store = MessageStore::from_seed(&SeedData::builtin());
        let first = store
            .append(GroupId(2), "You".into(), "a".into(), "🙋".into())
            .map(|m| m.id);
        let second = store
            .append(GroupId(2), "You".into(), "b".into(), "🙋".into())
            .map(|m| m.id);
        assert!(first < second);
        assert_eq!(store.log(GroupId(2)).map(<[_]>::len), Some(3));
    }
}
