// SPDX-License-Identifier: MPL-2.0
//! Application header with tab navigation and session controls.
//!
//! The header shows the brand mark, one button per tab and, on the right,
//! either a "Login with Discord" button or the signed-in user's identity
//! with wallet balances and a logout button.

use crate::domain::SessionUser;
use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length, Theme,
};

/// Top-level navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Marketplace,
    Community,
    Upload,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Marketplace, Tab::Community, Tab::Upload];

    /// Whether this tab is only reachable with an active session.
    pub fn requires_session(self) -> bool {
        matches!(self, Tab::Upload)
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Marketplace => "Marketplace",
            Tab::Community => "Community",
            Tab::Upload => "Upload",
        }
    }
}

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub active_tab: Tab,
    pub session: Option<&'a SessionUser>,
    pub login_in_progress: bool,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    LoginPressed,
    LogoutPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The active tab changed.
    TabChanged(Tab),
    /// A guarded tab was selected without a session; the parent should
    /// open the login dialog instead of switching.
    LoginRequired,
    /// The user asked to sign in.
    LoginRequested,
    /// The user asked to sign out.
    LogoutRequested,
}

/// Process a header message against the current session state.
///
/// The tab switch itself is owned by the parent; the header only decides
/// whether the switch is allowed.
pub fn update(message: Message, has_session: bool) -> Event {
    match message {
        Message::TabSelected(tab) => {
            if tab.requires_session() && !has_session {
                Event::LoginRequired
            } else {
                Event::TabChanged(tab)
            }
        }
        Message::LoginPressed => Event::LoginRequested,
        Message::LogoutPressed => Event::LogoutRequested,
    }
}

/// Render the header bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::diamond(), sizing::ICON_MD).color(palette::PRIMARY_500))
        .push(Text::new("prooforia").size(20));

    let mut tabs = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    for tab in Tab::ALL {
        let label = Text::new(tab.label());
        let tab_button = if tab == ctx.active_tab {
            button(label).style(styles::button::selected)
        } else {
            button(label)
                .on_press(Message::TabSelected(tab))
                .style(styles::button::link)
        };
        tabs = tabs.push(tab_button);
    }

    let session_controls = build_session_controls(&ctx);

    let row = Row::new()
        .spacing(spacing::LG)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(tabs)
        .push(iced::widget::space::horizontal())
        .push(session_controls);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

/// Build the right-hand session area: login button or identity + logout.
fn build_session_controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.session {
        Some(user) => {
            let identity = Text::new(format!("@{}", user.username)).size(14);

            let balance = Text::new(format!(
                "{} TT · {} credits",
                user.test_token_balance, user.delegated_credits
            ))
            .size(12)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().secondary.base.text),
            });

            let logout = button(Text::new("Logout").size(13))
                .on_press(Message::LogoutPressed)
                .style(styles::button::secondary);

            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(identity)
                .push(balance)
                .push(logout)
                .into()
        }
        None => {
            let label = if ctx.login_in_progress {
                "Connecting…"
            } else {
                "Login with Discord"
            };
            let login = if ctx.login_in_progress {
                button(Text::new(label)).style(styles::button::disabled())
            } else {
                button(Text::new(label))
                    .on_press(Message::LoginPressed)
                    .style(styles::button::primary)
            };
            Row::new().push(login).into()
        }
    }
}
