//! Message list item component - displays a single message row in the inbox

use chrono::{DateTime, Utc};
use gpui::prelude::*;
use gpui::*;
use gpui_component::{ActiveTheme, Icon, Sizable};
use mcg_mail::MessageSummary;
use mcg_mail::format::format_distance_to_now;

use crate::assets::icons::Wallet;

#[derive(IntoElement)]
pub struct MessageListItem {
    message: MessageSummary,
    is_selected: bool,
    now: DateTime<Utc>,
}

impl MessageListItem {
    pub fn new(message: MessageSummary, is_selected: bool, now: DateTime<Utc>) -> Self {
        Self {
            message,
            is_selected,
            now,
        }
    }
}

impl RenderOnce for MessageListItem {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        let bg_color = if self.is_selected {
            theme.list_active
        } else {
            theme.list
        };

        let border_color = if self.is_selected {
            theme.list_active_border
        } else {
            theme.border
        };

        // Unread rows are bold with a dot
        let is_unread = !self.message.is_read;
        let weight = if is_unread {
            FontWeight::BOLD
        } else {
            FontWeight::NORMAL
        };

        let age = format_distance_to_now(self.message.timestamp, self.now);
        let has_payment = self.message.has_payment;
        let MessageSummary {
            from,
            subject,
            preview,
            ..
        } = self.message;

        div()
            .w_full()
            .px_4()
            .py_3()
            .bg(bg_color)
            .border_b_1()
            .border_color(border_color)
            .cursor_pointer()
            .hover(|style| style.bg(theme.list_hover))
            .flex()
            .gap_3()
            .child(
                div()
                    .w(px(8.))
                    .pt_1()
                    .flex_shrink_0()
                    .when(is_unread, |el| {
                        el.child(div().size_2().rounded_full().bg(theme.primary))
                    }),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .flex_1()
                    .overflow_hidden()
                    .child(
                        div()
                            .flex()
                            .justify_between()
                            .items_center()
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(weight)
                                    .text_color(theme.foreground)
                                    .child(from),
                            )
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .gap_2()
                                    .flex_shrink_0()
                                    .when(has_payment, |el| {
                                        el.child(
                                            Icon::new(Wallet)
                                                .xsmall()
                                                .text_color(theme.primary),
                                        )
                                    })
                                    .child(
                                        div()
                                            .text_xs()
                                            .text_color(theme.muted_foreground)
                                            .child(age),
                                    ),
                            ),
                    )
                    .child(
                        div()
                            .text_sm()
                            .font_weight(weight)
                            .text_color(theme.foreground)
                            .text_ellipsis()
                            .child(subject),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(theme.muted_foreground)
                            .text_ellipsis()
                            .child(preview),
                    ),
            )
    }
}
