//! GPUI action definitions for keyboard shortcuts
//!
//! Actions are organized by context where they apply.

use gpui::actions;

// Inbox list navigation
actions!(
    mcg,
    [
        MoveUp,       // K or Up arrow - select previous message
        MoveDown,     // J or Down arrow - select next message
        OpenSelected, // Enter - open selected message
    ]
);

// Message actions
actions!(
    mcg,
    [
        Compose, // C - new message
        Reply,   // R - reply to the open message
        Claim,   // P - claim the attached payment
    ]
);

// Go-to page actions (G sequences)
actions!(
    mcg,
    [
        GoToInbox,    // G I
        GoToSent,     // G T
        GoToSpam,     // G S
        GoToSettings, // G ,
    ]
);

// Utility actions
actions!(
    mcg,
    [
        Dismiss,       // Escape - close overlay or go back to the inbox
        ShowShortcuts, // ? - show keyboard shortcuts help
        ToggleTheme,   // Cmd/Ctrl-Shift-L - cycle light/dark/system
    ]
);
