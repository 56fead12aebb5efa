//! UIコンポーネント

pub mod add_item_modal;
pub mod header;
pub mod item_card;
pub mod item_grid;
pub mod search_bar;
