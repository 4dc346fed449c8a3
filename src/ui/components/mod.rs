pub mod chat_area;
pub mod group_picker;
pub mod input_bar;
pub mod pinned_banner;
pub mod top_bar;
