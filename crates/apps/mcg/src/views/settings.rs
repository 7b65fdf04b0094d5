//! Settings view - identity and spam-filter settings (display only)

use gpui::prelude::*;
use gpui::*;
use gpui_component::theme::Theme;
use gpui_component::{ActiveTheme, Icon, IconName, Sizable};
use mcg_mail::SettingsModel;
use mcg_mail::settings::{ABOUT_LINKS, ABOUT_TEXT};

use crate::assets::icons::Shield;

#[derive(IntoElement)]
pub struct SettingsView {
    settings: SettingsModel,
}

impl SettingsView {
    pub fn new(settings: SettingsModel) -> Self {
        Self { settings }
    }
}

impl RenderOnce for SettingsView {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let settings = self.settings;

        div()
            .id("settings-scroll")
            .size_full()
            .overflow_y_scroll()
            .bg(theme.background)
            .child(
                div()
                    .max_w(px(672.))
                    .mx_auto()
                    .px_8()
                    .py_10()
                    .flex()
                    .flex_col()
                    .gap_8()
                    .child(
                        div()
                            .child(
                                div()
                                    .text_3xl()
                                    .text_color(theme.foreground)
                                    .child("Settings"),
                            )
                            .child(
                                div()
                                    .mt_2()
                                    .text_sm()
                                    .text_color(theme.muted_foreground)
                                    .child("Manage your identity and protocol-level rules"),
                            ),
                    )
                    .child(profile_card(&settings, theme))
                    .child(spam_card(&settings, theme))
                    .child(about_card(theme)),
            )
    }
}

fn card(theme: &Theme) -> Div {
    div()
        .p_8()
        .rounded_xl()
        .border_1()
        .border_color(theme.border)
        .bg(theme.secondary)
        .flex()
        .flex_col()
        .gap_6()
}

fn card_header(icon: Icon, title: &'static str, subtitle: &'static str, theme: &Theme) -> Div {
    div()
        .flex()
        .items_center()
        .gap_3()
        .child(
            div()
                .size_9()
                .rounded_full()
                .bg(theme.primary)
                .flex()
                .items_center()
                .justify_center()
                .child(icon.small().text_color(theme.primary_foreground)),
        )
        .child(
            div()
                .flex()
                .flex_col()
                .child(div().text_color(theme.foreground).child(title))
                .child(
                    div()
                        .text_xs()
                        .text_color(theme.muted_foreground)
                        .child(subtitle),
                ),
        )
}

fn field(
    label: &'static str,
    hint: Option<&'static str>,
    content: impl IntoElement,
    theme: &Theme,
) -> Div {
    div()
        .flex()
        .flex_col()
        .gap_2()
        .child(
            div()
                .text_xs()
                .text_color(theme.muted_foreground)
                .child(label),
        )
        .child(content)
        .when_some(hint, |el, hint| {
            el.child(
                div()
                    .text_xs()
                    .text_color(theme.muted_foreground)
                    .child(hint),
            )
        })
}

fn boxed(theme: &Theme) -> Div {
    div()
        .px_4()
        .py_2()
        .rounded_lg()
        .border_1()
        .border_color(theme.border)
        .bg(theme.background)
        .text_sm()
        .text_color(theme.foreground)
}

/// Row of options with the active one highlighted
fn options(values: &[String], active: usize, theme: &Theme) -> Div {
    div().flex().gap_2().children(values.iter().enumerate().map(|(ix, value)| {
        let is_active = ix == active;
        boxed(theme)
            .when(is_active, |el| el.border_color(theme.primary))
            .when(!is_active, |el| el.text_color(theme.muted_foreground))
            .child(value.clone())
    }))
}

fn profile_card(settings: &SettingsModel, theme: &Theme) -> Div {
    card(theme)
        .child(card_header(
            Icon::new(IconName::User),
            "Profile",
            "Your on-chain identity settings",
            theme,
        ))
        .child(field(
            "Default Sending Identity",
            Some("Select which .sol domain to use when sending messages"),
            options(&settings.sending_identities, settings.default_identity, theme),
            theme,
        ))
}

fn spam_card(settings: &SettingsModel, theme: &Theme) -> Div {
    let enabled = settings.anti_spam_enabled;

    let toggle = div()
        .p_5()
        .rounded_lg()
        .border_1()
        .border_color(theme.border)
        .bg(theme.background)
        .flex()
        .items_center()
        .justify_between()
        .child(
            div()
                .flex()
                .flex_col()
                .child(
                    div()
                        .text_sm()
                        .text_color(theme.foreground)
                        .child("Enable Anti-Spam Stake"),
                )
                .child(
                    div()
                        .mt_1()
                        .text_xs()
                        .text_color(theme.muted_foreground)
                        .child("Require strangers to stake crypto to message you"),
                ),
        )
        // Switch drawn as a track and knob; there is no handler behind it
        .child(
            div()
                .w(px(44.))
                .h(px(24.))
                .px_1()
                .rounded_full()
                .bg(if enabled { theme.primary } else { theme.border })
                .flex()
                .items_center()
                .when(enabled, |el| el.justify_end())
                .child(div().size_4().rounded_full().bg(theme.background)),
        );

    let stake = div()
        .flex()
        .gap_2()
        .child(boxed(theme).flex_1().child(settings.stake_amount_display()))
        .child(options(&settings.stake_currencies, 0, theme));

    let allowlist = div()
        .flex()
        .flex_col()
        .gap_2()
        .children(settings.allowlist.iter().map(|name| {
            boxed(theme)
                .flex()
                .justify_between()
                .child(name.clone())
                .child(
                    div()
                        .text_xs()
                        .text_color(theme.muted_foreground)
                        .child("Remove"),
                )
        }))
        .child(action_row("Add to Allowlist", theme));

    let blocklist = div()
        .flex()
        .flex_col()
        .gap_2()
        .map(|el| {
            if settings.blocklist.is_empty() {
                el.child(
                    boxed(theme)
                        .p_5()
                        .flex()
                        .justify_center()
                        .text_color(theme.muted_foreground)
                        .child("No blocked users"),
                )
            } else {
                el.children(
                    settings
                        .blocklist
                        .iter()
                        .map(|name| boxed(theme).child(name.clone())),
                )
            }
        })
        .child(action_row("Add to Blocklist", theme));

    card(theme)
        .child(card_header(
            Icon::new(Shield),
            "Spam Filter",
            "Protect your inbox with crypto-economic spam prevention",
            theme,
        ))
        .child(toggle)
        .child(field(
            "Required Stake Amount",
            Some(
                "Strangers must stake this amount to email you. \
                 They forfeit it if you mark them as spam.",
            ),
            stake,
            theme,
        ))
        .child(field(
            "Allowlist",
            Some("Users on your allowlist can always email you for free"),
            allowlist,
            theme,
        ))
        .child(field("Blocklist", None, blocklist, theme))
}

fn action_row(label: &'static str, theme: &Theme) -> Div {
    boxed(theme)
        .flex()
        .justify_center()
        .text_color(theme.muted_foreground)
        .child(label)
}

fn about_card(theme: &Theme) -> Div {
    card(theme)
        .gap_2()
        .child(
            div()
                .text_sm()
                .text_color(theme.foreground)
                .child("About mcg.mail"),
        )
        .child(
            div()
                .text_xs()
                .text_color(theme.muted_foreground)
                .child(ABOUT_TEXT),
        )
        .child(
            div()
                .mt_3()
                .flex()
                .gap_4()
                .text_xs()
                .text_color(theme.muted_foreground)
                .children(ABOUT_LINKS.iter().map(|link| div().child(*link))),
        )
}
