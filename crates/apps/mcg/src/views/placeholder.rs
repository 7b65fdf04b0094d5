//! Placeholder pages for features that are not built yet

use gpui::prelude::*;
use gpui::*;
use gpui_component::ActiveTheme;

#[derive(IntoElement)]
pub struct PlaceholderView {
    title: &'static str,
    subtitle: &'static str,
}

impl PlaceholderView {
    pub fn sent() -> Self {
        Self {
            title: "Sent Messages",
            subtitle: "Your sent messages will appear here",
        }
    }

    pub fn spam() -> Self {
        Self {
            title: "Spam (V2)",
            subtitle: "Filtered spam messages will appear here",
        }
    }
}

impl RenderOnce for PlaceholderView {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        div()
            .size_full()
            .bg(theme.background)
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_xl()
                            .text_color(theme.foreground)
                            .child(self.title),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(theme.muted_foreground)
                            .child(self.subtitle),
                    ),
            )
    }
}
