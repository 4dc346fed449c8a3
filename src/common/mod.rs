pub mod events;
pub mod types;

pub use events::TimerEvent;
pub use types::{Group, GroupId, Message, MessageId};
