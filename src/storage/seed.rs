use crate::common::{Group, GroupId};

/// Tin nhắn mẫu có sẵn trước khi người dùng tương tác.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedMessage {
    pub sender: String,
    pub content: String,
    pub avatar: String,
}

impl SeedMessage {
    pub fn new(sender: &str, content: &str, avatar: &str) -> Self {
        Self {
            sender: sender.to_string(),
            content: content.to_string(),
            avatar: avatar.to_string(),
        }
    }
}

/// Bộ dữ liệu cố định: danh sách nhóm và tin nhắn mẫu của từng nhóm.
/// Được truyền vào controller khi khởi tạo, không phải singleton toàn cục.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    entries: Vec<(Group, Vec<SeedMessage>)>,
}

impl SeedData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Thêm một nhóm. Nhóm trùng id sẽ thay thế nhóm cũ.
    pub fn with_group(mut self, id: u32, name: &str, messages: Vec<SeedMessage>) -> Self {
        let group = Group {
            id: GroupId(id),
            name: name.to_string(),
        };
        self.entries.retain(|(existing, _)| existing.id != group.id);
        self.entries.push((group, messages));
        self
    }

    pub fn builtin() -> Self {
        Self::new()
            .with_group(
                1,
                "Study Group",
                vec![
                    SeedMessage::new("Alice", "Hey team!", "🧑‍🎓"),
                    SeedMessage::new("Bob", "Ready for tomorrow?", "👨‍💻"),
                ],
            )
            .with_group(
                2,
                "Hackathon Team",
                vec![SeedMessage::new("Dev", "Update the repo please!", "👨‍🔧")],
            )
            .with_group(
                3,
                "Friends",
                vec![SeedMessage::new("Sam", "Let’s hang out this weekend.", "🎉")],
            )
    }

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.entries.iter().map(|(group, _)| group)
    }

    pub fn messages(&self, id: GroupId) -> Option<&[SeedMessage]> {
        self.entries
            .iter()
            .find(|(group, _)| group.id == id)
            .map(|(_, messages)| messages.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_three_groups_in_order() {
        let seed = SeedData::builtin();
        let names: Vec<_> = seed.groups().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Study Group", "Hackathon Team", "Friends"]);
        assert_eq!(seed.messages(GroupId(1)).map(<[_]>::len), Some(2));
        assert_eq!(seed.messages(GroupId(4)), None);
    }

    #[test]
    fn duplicate_group_id_replaces_entry() {
        let seed = SeedData::new()
            .with_group(7, "Old", vec![])
            .with_group(7, "New", vec![SeedMessage::new("A", "b", "c")]);
        let groups: Vec<_> = seed.groups().collect();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "New");
        assert_eq!(seed.messages(GroupId(7)).map(<[_]>::len), Some(1));
    }
}
