// SPDX-License-Identifier: MPL-2.0
//! Full-screen loading view shown while the first marketplace fetch is in
//! flight.

use crate::ui::design_tokens::{palette, spacing};
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

/// Renders a centered spinner with a caption.
///
/// `spinner_rotation` is the current rotation angle in radians, advanced by
/// the caller on animation ticks.
pub fn view<Message: 'static>(spinner_rotation: f32) -> Element<'static, Message> {
    let spinner = AnimatedSpinner::new(palette::PRIMARY_500, spinner_rotation).into_element();

    let caption = Text::new("Loading marketplace…").size(14);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(spinner)
        .push(caption);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
