// SPDX-License-Identifier: MPL-2.0
//! Authentication dialog.
//!
//! A modal over the active screen with two stages: the Discord login
//! prompt and the embedded wallet recovery form. Clicking the backdrop
//! dismisses the dialog unless a request is in flight.

use crate::api::RecoveryRequest;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::recovery;
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, center, mouse_area, opaque, stack, text, Column, Container, Text};
use iced::{Element, Length};

/// Which pane the dialog is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Login,
    Recovery,
}

/// Dialog state.
#[derive(Debug, Default)]
pub struct State {
    pub stage: Stage,
    pub recovery: recovery::State,
    pub login_in_progress: bool,
}

impl State {
    /// True while any request owned by the dialog is in flight.
    pub fn busy(&self) -> bool {
        self.login_in_progress || self.recovery.is_in_flight()
    }
}

/// Messages emitted by the dialog.
#[derive(Debug, Clone)]
pub enum Message {
    DiscordLoginPressed,
    ShowRecovery,
    Recovery(recovery::Message),
    BackdropPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Start the backend-brokered Discord login.
    DiscordLoginRequested,
    /// The recovery form validated; POST this request.
    RecoverySubmitted(RecoveryRequest),
    /// Close the dialog.
    Closed,
}

/// Process a dialog message.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::DiscordLoginPressed => {
            if state.login_in_progress {
                Event::None
            } else {
                Event::DiscordLoginRequested
            }
        }
        Message::ShowRecovery => {
            state.stage = Stage::Recovery;
            Event::None
        }
        Message::Recovery(recovery_message) => {
            match recovery::update(recovery_message, &mut state.recovery) {
                recovery::Event::None => Event::None,
                recovery::Event::Submit(request) => Event::RecoverySubmitted(request),
                recovery::Event::Cancelled => {
                    state.stage = Stage::Login;
                    Event::None
                }
            }
        }
        Message::BackdropPressed => {
            if state.busy() {
                Event::None
            } else {
                Event::Closed
            }
        }
    }
}

/// Render the dialog card.
pub fn view(state: &State) -> Element<'_, Message> {
    let content: Element<'_, Message> = match state.stage {
        Stage::Login => login_pane(state),
        Stage::Recovery => recovery::view(&state.recovery).map(Message::Recovery),
    };

    Container::new(content)
        .max_width(sizing::FORM_WIDTH + 2.0 * spacing::LG)
        .style(styles::container::card)
        .into()
}

fn login_pane(state: &State) -> Element<'_, Message> {
    let heading = Text::new("Sign in to prooforia").size(typography::TITLE_MD);

    let explainer = Text::new("Your Discord account identifies you across the marketplace.")
        .size(typography::BODY_SM)
        .style(|theme: &iced::Theme| text::Style {
            color: Some(theme.extended_palette().secondary.base.text),
        });

    let login_label = if state.login_in_progress {
        "Connecting to Discord…"
    } else {
        "Login with Discord"
    };
    let login_button = if state.login_in_progress {
        button(Text::new(login_label)).style(styles::button::disabled())
    } else {
        button(Text::new(login_label))
            .on_press(Message::DiscordLoginPressed)
            .style(styles::button::primary)
    };

    let recovery_link = button(Text::new("Lost your password? Recover your wallet").size(typography::BODY_SM))
        .on_press(Message::ShowRecovery)
        .style(styles::button::link);

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(explainer)
        .push(login_button)
        .push(recovery_link)
        .into()
}

/// Stack a dialog over a base screen with a click-to-dismiss backdrop.
pub fn modal<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    dialog: Element<'a, Message>,
    on_backdrop: Message,
) -> Element<'a, Message> {
    let backdrop = mouse_area(
        Container::new(iced::widget::Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::modal_backdrop),
    )
    .on_press(on_backdrop);

    stack![base, opaque(backdrop), opaque(center(dialog))].into()
}
