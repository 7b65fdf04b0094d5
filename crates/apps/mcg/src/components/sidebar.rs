//! Sidebar navigation component for the main pages

use gpui::prelude::*;
use gpui::*;
use gpui_component::{ActiveTheme, Icon, IconName, Sizable};
use mcg_mail::Page;

use crate::assets::icons::{Send, Shield};

/// A single item in the sidebar navigation
#[derive(IntoElement)]
pub struct SidebarItem {
    page: Page,
    is_selected: bool,
    unread_count: usize,
}

impl SidebarItem {
    pub fn new(page: Page, is_selected: bool) -> Self {
        Self {
            page,
            is_selected,
            unread_count: 0,
        }
    }

    /// Show an unread badge (only rendered when non-zero)
    pub fn unread_count(mut self, count: usize) -> Self {
        self.unread_count = count;
        self
    }

    fn icon(&self) -> Icon {
        match self.page {
            Page::Sent => Icon::new(Send),
            Page::Spam => Icon::new(Shield),
            Page::Settings => Icon::new(IconName::Settings),
            Page::Inbox | Page::MessageDetail => Icon::new(IconName::Inbox),
        }
    }
}

impl RenderOnce for SidebarItem {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        let bg_color = if self.is_selected {
            theme.list_active
        } else {
            theme.transparent
        };

        let text_color = if self.is_selected {
            theme.foreground
        } else {
            theme.muted_foreground
        };

        let border_color = if self.is_selected {
            theme.list_active_border
        } else {
            theme.transparent
        };

        let icon = self.icon().small().text_color(text_color);
        let title = self.page.title();
        let is_v2 = self.page.is_v2();
        let unread_count = self.unread_count;

        div()
            .w_full()
            .px_3()
            .py_2()
            .rounded_md()
            .bg(bg_color)
            .border_l_2()
            .border_color(border_color)
            .cursor_pointer()
            .hover(|style| style.bg(theme.list_hover))
            .flex()
            .justify_between()
            .items_center()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(icon)
                    .child(
                        div()
                            .text_sm()
                            .text_color(text_color)
                            .font_weight(if self.is_selected {
                                FontWeight::MEDIUM
                            } else {
                                FontWeight::NORMAL
                            })
                            .child(title),
                    ),
            )
            .when(is_v2, |el| {
                el.child(
                    div()
                        .px_1()
                        .rounded(px(4.))
                        .bg(theme.secondary)
                        .text_xs()
                        .text_color(theme.secondary_foreground)
                        .child("V2"),
                )
            })
            .when(unread_count > 0, |el| {
                el.child(
                    div()
                        .px_2()
                        .py_px()
                        .rounded_md()
                        .bg(theme.primary)
                        .text_xs()
                        .text_color(theme.primary_foreground)
                        .font_weight(FontWeight::MEDIUM)
                        .child(format!("{}", unread_count)),
                )
            })
    }
}
