// SPDX-License-Identifier: MPL-2.0
//! Upload screen: the mint form for creating a new NFT.
//!
//! Only reachable with an active session; the tab guard in the header
//! enforces that. Price is optional: a minted item without a price simply
//! starts out unlisted.

use crate::api::MintRequest;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, text, text_input, Column, Container, Text};
use iced::{Element, Length};

const MAX_TITLE_LEN: usize = 120;

/// Upload form state.
#[derive(Debug, Default)]
pub struct State {
    title: String,
    category: String,
    price: String,
    title_error: Option<&'static str>,
    category_error: Option<&'static str>,
    price_error: Option<&'static str>,
    attempted: bool,
    in_flight: bool,
}

impl State {
    pub fn begin_submit(&mut self) {
        self.in_flight = true;
    }

    pub fn finish_submit(&mut self) {
        self.in_flight = false;
    }

    /// Clears the form after a successful mint.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn revalidate(&mut self) {
        self.title_error = validate_title(&self.title);
        self.category_error = validate_category(&self.category);
        self.price_error = parse_price(&self.price).err();
    }

    fn is_clean(&self) -> bool {
        self.title_error.is_none() && self.category_error.is_none() && self.price_error.is_none()
    }
}

fn validate_title(title: &str) -> Option<&'static str> {
    let title = title.trim();
    if title.is_empty() {
        Some("Give the item a title")
    } else if title.len() > MAX_TITLE_LEN {
        Some("Title is too long")
    } else {
        None
    }
}

fn validate_category(category: &str) -> Option<&'static str> {
    if category.trim().is_empty() {
        Some("Pick a category, e.g. art or music")
    } else {
        None
    }
}

/// Parses the price field. Empty means "mint unlisted".
fn parse_price(price: &str) -> Result<Option<f64>, &'static str> {
    let price = price.trim();
    if price.is_empty() {
        return Ok(None);
    }
    match price.parse::<f64>() {
        Ok(value) if value >= 0.0 && value.is_finite() => Ok(Some(value)),
        Ok(_) => Err("Price cannot be negative"),
        Err(_) => Err("Price must be a number"),
    }
}

/// Messages emitted by the upload screen.
#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    CategoryChanged(String),
    PriceChanged(String),
    SubmitPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The form validated; the parent should POST this mint request.
    Submit(MintRequest),
}

/// Process an upload form message.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::TitleChanged(value) => {
            state.title = value;
            if state.attempted {
                state.revalidate();
            }
            Event::None
        }
        Message::CategoryChanged(value) => {
            state.category = value;
            if state.attempted {
                state.revalidate();
            }
            Event::None
        }
        Message::PriceChanged(value) => {
            state.price = value;
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
            if state.is_clean() {
                // parse_price cannot fail here, revalidate just checked it
                let price = parse_price(&state.price).unwrap_or(None);
                Event::Submit(MintRequest {
                    title: state.title.trim().to_string(),
                    category: state.category.trim().to_lowercase(),
                    price,
                })
            } else {
                Event::None
            }
        }
    }
}

/// Render the upload screen.
pub fn view(state: &State) -> Element<'_, Message> {
    let heading = Text::new("Mint a new item").size(typography::TITLE_MD);

    let explainer = Text::new("Leave the price empty to mint without listing it for sale.")
        .size(typography::BODY_SM)
        .style(|theme: &iced::Theme| text::Style {
            color: Some(theme.extended_palette().secondary.base.text),
        });

    let title_field = build_field(
        "Title",
        "Nebula #7",
        &state.title,
        state.title_error,
        state.in_flight,
        Message::TitleChanged,
    );

    let category_field = build_field(
        "Category",
        "art",
        &state.category,
        state.category_error,
        state.in_flight,
        Message::CategoryChanged,
    );

    let price_field = build_field(
        "Price in TT (optional)",
        "12.50",
        &state.price,
        state.price_error,
        state.in_flight,
        Message::PriceChanged,
    );

    let submit_label = if state.in_flight { "Minting…" } else { "Mint" };
    let submit = if state.in_flight {
        button(Text::new(submit_label)).style(styles::button::disabled())
    } else {
        button(Text::new(submit_label))
            .on_press(Message::SubmitPressed)
            .style(styles::button::primary)
    };

    let form = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(heading)
        .push(explainer)
        .push(title_field)
        .push(category_field)
        .push(price_field)
        .push(
            Container::new(submit)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );

    Container::new(
        Container::new(form)
            .padding(spacing::LG)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .padding(spacing::XL)
    .into()
}

fn build_field<'a>(
    label: &'static str,
    placeholder: &'static str,
    value: &str,
    error: Option<&'static str>,
    disabled: bool,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    let mut col = Column::new().spacing(spacing::XXS);

    col = col.push(text(label).size(typography::BODY_SM));

    let mut input = text_input(placeholder, value)
        .padding(spacing::XS)
        .size(typography::BODY);
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

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> State {
        State {
            title: "Nebula #7".to_string(),
            category: "Art".to_string(),
            price: "12.5".to_string(),
            ..State::default()
        }
    }

    #[test]
    fn valid_form_submits_a_mint_request() {
        let mut state = filled_state();
        let event = update(Message::SubmitPressed, &mut state);
        match event {
            Event::Submit(request) => {
                assert_eq!(request.title, "Nebula #7");
                assert_eq!(request.category, "art");
                assert_eq!(request.price, Some(12.5));
            }
            other => panic!("expected Submit, got {other:?}"),
        }
    }

    #[test]
    fn empty_price_mints_unlisted() {
        let mut state = filled_state();
        state.price = String::new();
        let event = update(Message::SubmitPressed, &mut state);
        match event {
            Event::Submit(request) => assert_eq!(request.price, None),
            other => panic!("expected Submit, got {other:?}"),
        }
    }

    #[test]
    fn blank_title_blocks_the_submit() {
        let mut state = filled_state();
        state.title = "   ".to_string();
        let event = update(Message::SubmitPressed, &mut state);
        assert!(matches!(event, Event::None));
        assert!(state.title_error.is_some());
    }

    #[test]
    fn non_numeric_price_blocks_the_submit() {
        let mut state = filled_state();
        state.price = "twelve".to_string();
        let event = update(Message::SubmitPressed, &mut state);
        assert!(matches!(event, Event::None));
        assert!(state.price_error.is_some());
    }

    #[test]
    fn zero_price_is_accepted() {
        let mut state = filled_state();
        state.price = "0".to_string();
        let event = update(Message::SubmitPressed, &mut state);
        match event {
            Event::Submit(request) => assert_eq!(request.price, Some(0.0)),
            other => panic!("expected Submit, got {other:?}"),
        }
    }

    #[test]
    fn negative_price_blocks_the_submit() {
        let mut state = filled_state();
        state.price = "-1".to_string();
        let event = update(Message::SubmitPressed, &mut state);
        assert!(matches!(event, Event::None));
        assert!(state.price_error.is_some());
    }

    #[test]
    fn submit_is_ignored_while_in_flight() {
        let mut state = filled_state();
        state.begin_submit();
        let event = update(Message::SubmitPressed, &mut state);
        assert!(matches!(event, Event::None));
    }
}
