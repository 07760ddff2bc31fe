// SPDX-License-Identifier: MPL-2.0
//! Wallet recovery form.
//!
//! Lets a user who lost their password re-key their account by proving
//! possession of the wallet private key. Validation runs on submit and then
//! live on every edit until the form is clean; a form with any invalid
//! field is never sent to the backend.

pub mod validation;

use crate::api::RecoveryRequest;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, text, text_input, Column, Container, Text};
use iced::{Element, Length};
use validation::FormErrors;

/// Recovery form state.
#[derive(Debug, Default)]
pub struct State {
    email: String,
    private_key: String,
    password: String,
    confirmation: String,
    errors: FormErrors,
    /// Set once the user has attempted a submit; enables live revalidation.
    attempted: bool,
    /// A request is currently in flight; inputs and submit are disabled.
    in_flight: bool,
}

impl State {
    /// Marks the in-flight request as started.
    pub fn begin_submit(&mut self) {
        self.in_flight = true;
    }

    /// Marks the in-flight request as finished (success or failure).
    pub fn finish_submit(&mut self) {
        self.in_flight = false;
    }

    /// Clears the form, e.g. after a successful recovery.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    fn revalidate(&mut self) {
        self.errors = validation::validate_form(
            &self.email,
            &self.private_key,
            &self.password,
            &self.confirmation,
        );
    }
}

/// Messages emitted by the recovery form.
#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PrivateKeyChanged(String),
    PasswordChanged(String),
    ConfirmationChanged(String),
    SubmitPressed,
    CancelPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Every field validated; the parent should POST this request.
    Submit(RecoveryRequest),
    /// The user backed out of the form.
    Cancelled,
}

/// Process a recovery form message.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::EmailChanged(value) => {
            state.email = value;
            if state.attempted {
                state.revalidate();
            }
            Event::None
        }
        Message::PrivateKeyChanged(value) => {
            state.private_key = value;
            if state.attempted {
                state.revalidate();
            }
            Event::None
        }
        Message::PasswordChanged(value) => {
            state.password = value;
            if state.attempted {
                state.revalidate();
            }
            Event::None
        }
        Message::ConfirmationChanged(value) => {
            state.confirmation = value;
            if state.attempted {
                state.revalidate();
            }
            Event::None
        }
        Message::SubmitPressed => {
            if state.in_flight {
                return Event::None;
            }
            state.attempted = true;
            state.revalidate();
            if state.errors.is_clean() {
                Event::Submit(RecoveryRequest {
                    email: state.email.trim().to_string(),
                    private_key: state.private_key.trim().to_string(),
                    new_password: state.password.clone(),
                })
            } else {
                Event::None
            }
        }
        Message::CancelPressed => Event::Cancelled,
    }
}

/// Render the recovery form.
pub fn view(state: &State) -> Element<'_, Message> {
    let heading = Text::new("Recover wallet access").size(typography::TITLE_MD);

    let explainer = Text::new(
        "Prove possession of your wallet private key to set a new password.",
    )
    .size(typography::BODY_SM)
    .style(|theme: &iced::Theme| text::Style {
        color: Some(theme.extended_palette().secondary.base.text),
    });

    let email_field = build_field(
        "Account email",
        "you@example.com",
        &state.email,
        state.errors.email,
        state.in_flight,
        Message::EmailChanged,
        false,
    );

    let key_field = build_field(
        "Wallet private key",
        "0x…",
        &state.private_key,
        state.errors.private_key,
        state.in_flight,
        Message::PrivateKeyChanged,
        true,
    );

    let password_field = build_field(
        "New password",
        "",
        &state.password,
        state.errors.password,
        state.in_flight,
        Message::PasswordChanged,
        true,
    );

    let confirmation_field = build_field(
        "Confirm new password",
        "",
        &state.confirmation,
        state.errors.confirmation,
        state.in_flight,
        Message::ConfirmationChanged,
        true,
    );

    let submit_label = if state.in_flight {
        "Recovering…"
    } else {
        "Recover wallet"
    };
    let submit = if state.in_flight {
        button(Text::new(submit_label)).style(styles::button::disabled())
    } else {
        button(Text::new(submit_label))
            .on_press(Message::SubmitPressed)
            .style(styles::button::primary)
    };

    let cancel = button(Text::new("Back to login").size(typography::BODY_SM))
        .on_press(Message::CancelPressed)
        .style(styles::button::link);

    let form = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(heading)
        .push(explainer)
        .push(email_field)
        .push(key_field)
        .push(password_field)
        .push(confirmation_field)
        .push(
            Container::new(submit)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(
            Container::new(cancel)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );

    Container::new(form)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

/// Build a labeled input with an optional inline error.
fn build_field<'a>(
    label: &'static str,
    placeholder: &'static str,
    value: &str,
    error: Option<&'static str>,
    disabled: bool,
    on_input: fn(String) -> Message,
    secure: bool,
) -> Element<'a, Message> {
    let mut col = Column::new().spacing(spacing::XXS);

    col = col.push(text(label).size(typography::BODY_SM));

    let mut input = text_input(placeholder, value)
        .padding(spacing::XS)
        .size(typography::BODY)
        .secure(secure);
    if !disabled {
        input = input.on_input(on_input);
    }
    col = col.push(input);

    if let Some(message) = error {
        col = col.push(
            text(message)
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    col.into()
}
