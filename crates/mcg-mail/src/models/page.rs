//! Page model - the closed set of screens in the main layout

use serde::{Deserialize, Serialize};

/// Screen shown in the main content area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Inbox,
    Sent,
    Spam,
    Settings,
    /// Detail view of the selected message
    MessageDetail,
}

impl Page {
    /// Pages reachable from the sidebar, in display order
    pub const NAVIGATION: [Page; 4] = [Page::Inbox, Page::Sent, Page::Spam, Page::Settings];

    /// Display title
    pub fn title(self) -> &'static str {
        match self {
            Page::Inbox => "Inbox",
            Page::Sent => "Sent",
            Page::Spam => "Spam",
            Page::Settings => "Settings",
            Page::MessageDetail => "Message",
        }
    }

    /// Whether the page is a placeholder for a future release
    pub fn is_v2(self) -> bool {
        matches!(self, Page::Spam | Page::Settings)
    }

    /// Whether showing this page needs a selected message
    pub fn requires_selection(self) -> bool {
        matches!(self, Page::MessageDetail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_excludes_detail() {
        assert!(!Page::NAVIGATION.contains(&Page::MessageDetail));
        assert_eq!(Page::NAVIGATION[0], Page::Inbox);
    }

    #[test]
    fn test_v2_badges() {
        assert!(Page::Spam.is_v2());
        assert!(Page::Settings.is_v2());
        assert!(!Page::Inbox.is_v2());
        assert!(!Page::Sent.is_v2());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Page::MessageDetail).unwrap();
        assert_eq!(json, "\"message-detail\"");
    }
}
