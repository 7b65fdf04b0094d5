//! Keyboard shortcut definitions and help text
//!
//! Single-key shortcuts are scoped to the browsing views and pages so they
//! never fire while typing in the compose form.

use gpui::KeyBinding;

use super::actions::*;

/// A category of keyboard shortcuts for display in help modal
pub struct ShortcutCategory {
    pub name: &'static str,
    pub shortcuts: Vec<Shortcut>,
}

/// A single keyboard shortcut for display
pub struct Shortcut {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Key context of the Sent, Spam and Settings pages
pub const PAGE_CONTEXT: &str = "PageView";

/// Views whose focus enables single-key shortcuts
const BROWSE_CONTEXTS: [&str; 3] = ["InboxView", "MessageView", PAGE_CONTEXT];

/// Returns all keybindings to register with GPUI
pub fn bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        // ===== Global (McgApp context) =====
        KeyBinding::new("escape", Dismiss, Some("McgApp")),
        KeyBinding::new("cmd-shift-l", ToggleTheme, Some("McgApp")),
        KeyBinding::new("ctrl-shift-l", ToggleTheme, Some("McgApp")),
        // ===== Inbox list =====
        KeyBinding::new("j", MoveDown, Some("InboxView")),
        KeyBinding::new("down", MoveDown, Some("InboxView")),
        KeyBinding::new("k", MoveUp, Some("InboxView")),
        KeyBinding::new("up", MoveUp, Some("InboxView")),
        KeyBinding::new("enter", OpenSelected, Some("InboxView")),
        // ===== Message detail =====
        KeyBinding::new("r", Reply, Some("MessageView")),
        KeyBinding::new("p", Claim, Some("MessageView")),
    ];

    for context in BROWSE_CONTEXTS {
        bindings.extend([
            KeyBinding::new("c", Compose, Some(context)),
            KeyBinding::new("?", ShowShortcuts, Some(context)),
            KeyBinding::new("g i", GoToInbox, Some(context)),
            KeyBinding::new("g t", GoToSent, Some(context)),
            KeyBinding::new("g s", GoToSpam, Some(context)),
            KeyBinding::new("g ,", GoToSettings, Some(context)),
        ]);
    }

    bindings
}

/// Returns categorized shortcuts for the help modal
pub fn shortcuts_help() -> Vec<ShortcutCategory> {
    vec![
        ShortcutCategory {
            name: "Navigation",
            shortcuts: vec![
                Shortcut {
                    keys: "J / ↓",
                    description: "Next message",
                },
                Shortcut {
                    keys: "K / ↑",
                    description: "Previous message",
                },
                Shortcut {
                    keys: "Enter",
                    description: "Open selected",
                },
                Shortcut {
                    keys: "Escape",
                    description: "Go back / Close",
                },
            ],
        },
        ShortcutCategory {
            name: "Actions",
            shortcuts: vec![
                Shortcut {
                    keys: "C",
                    description: "Compose",
                },
                Shortcut {
                    keys: "R",
                    description: "Reply",
                },
                Shortcut {
                    keys: "P",
                    description: "Claim payment",
                },
            ],
        },
        ShortcutCategory {
            name: "Go To",
            shortcuts: vec![
                Shortcut {
                    keys: "G I",
                    description: "Go to Inbox",
                },
                Shortcut {
                    keys: "G T",
                    description: "Go to Sent",
                },
                Shortcut {
                    keys: "G S",
                    description: "Go to Spam",
                },
                Shortcut {
                    keys: "G ,",
                    description: "Go to Settings",
                },
            ],
        },
        ShortcutCategory {
            name: "Appearance",
            shortcuts: vec![Shortcut {
                keys: "⌘⇧L",
                description: "Cycle theme",
            }],
        },
        ShortcutCategory {
            name: "Help",
            shortcuts: vec![Shortcut {
                keys: "?",
                description: "Show this help",
            }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_shortcuts_cover_every_page() {
        // Inbox and message views carry their own contexts; every other page
        // is wrapped in the page context
        assert!(BROWSE_CONTEXTS.contains(&"InboxView"));
        assert!(BROWSE_CONTEXTS.contains(&"MessageView"));
        assert!(BROWSE_CONTEXTS.contains(&PAGE_CONTEXT));
        assert!(!BROWSE_CONTEXTS.contains(&"ComposeView"));
    }

    #[test]
    fn test_bindings_registered_per_context() {
        // global + inbox + message, then compose/help/go-to per context
        let scoped = 3 + 5 + 2;
        assert_eq!(bindings().len(), scoped + BROWSE_CONTEXTS.len() * 6);
    }

    #[test]
    fn test_help_lists_go_to_shortcuts() {
        let help = shortcuts_help();
        let go_to = help.iter().find(|c| c.name == "Go To").unwrap();
        let keys: Vec<_> = go_to.shortcuts.iter().map(|s| s.keys).collect();
        assert_eq!(keys, vec!["G I", "G T", "G S", "G ,"]);
    }
}
