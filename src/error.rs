use crate::common::GroupId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("group not found: {0}")]
    InvalidGroup(GroupId),
}
