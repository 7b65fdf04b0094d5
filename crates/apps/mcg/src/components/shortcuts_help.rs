//! Keyboard shortcuts help overlay

use gpui::prelude::*;
use gpui::*;
use gpui_component::ActiveTheme;
use gpui_component::theme::Theme;

use crate::input::{ShortcutCategory, shortcuts_help};

/// Categories shown in the left column; the rest go right
const LEFT_COLUMN: usize = 2;

#[derive(IntoElement)]
pub struct ShortcutsHelp {
    categories: Vec<ShortcutCategory>,
}

impl ShortcutsHelp {
    pub fn new() -> Self {
        Self {
            categories: shortcuts_help(),
        }
    }
}

impl RenderOnce for ShortcutsHelp {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let (left, right) = self
            .categories
            .split_at(LEFT_COLUMN.min(self.categories.len()));

        div()
            .absolute()
            .inset_0()
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .absolute()
                    .inset_0()
                    .bg(hsla(0., 0., 0., 0.5))
                    .occlude(),
            )
            .child(
                div()
                    .relative()
                    .occlude()
                    .bg(theme.background)
                    .border_1()
                    .border_color(theme.border)
                    .rounded_lg()
                    .shadow_lg()
                    .p_4()
                    .child(
                        div()
                            .pb_3()
                            .mb_3()
                            .border_b_1()
                            .border_color(theme.border)
                            .flex()
                            .items_center()
                            .justify_between()
                            .gap_8()
                            .child(
                                div()
                                    .text_lg()
                                    .font_weight(FontWeight::BOLD)
                                    .text_color(theme.foreground)
                                    .child("Keyboard Shortcuts"),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(theme.muted_foreground)
                                    .child("Press Escape to close"),
                            ),
                    )
                    .child(
                        div()
                            .flex()
                            .gap_8()
                            .child(column(left, theme))
                            .child(column(right, theme)),
                    ),
            )
    }
}

fn column(categories: &[ShortcutCategory], theme: &Theme) -> Div {
    div()
        .flex()
        .flex_col()
        .gap_4()
        .children(categories.iter().map(|category| render_category(category, theme)))
}

fn render_category(category: &ShortcutCategory, theme: &Theme) -> impl IntoElement {
    div()
        .min_w(px(200.))
        .flex()
        .flex_col()
        .gap_1()
        .child(
            div()
                .text_sm()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(theme.foreground)
                .pb_1()
                .mb_1()
                .border_b_1()
                .border_color(theme.border)
                .child(category.name),
        )
        .children(category.shortcuts.iter().map(|shortcut| {
            div()
                .flex()
                .items_center()
                .gap_3()
                .child(
                    div()
                        .min_w(px(70.))
                        .px_2()
                        .py_px()
                        .bg(theme.secondary)
                        .rounded(px(4.))
                        .text_xs()
                        .font_weight(FontWeight::MEDIUM)
                        .text_color(theme.secondary_foreground)
                        .child(shortcut.keys),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(theme.muted_foreground)
                        .child(shortcut.description),
                )
        }))
}
