pub mod conversation;
pub mod scheduler;

pub use conversation::{ControllerSettings, ConversationController, ConversationSnapshot};
