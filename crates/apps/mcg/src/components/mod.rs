//! Reusable UI components for mcg.mail

mod message_list_item;
mod shortcuts_help;
mod sidebar;
mod top_bar;

pub use message_list_item::MessageListItem;
pub use shortcuts_help::ShortcutsHelp;
pub use sidebar::SidebarItem;
pub use top_bar::TopBar;
