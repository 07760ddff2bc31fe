// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the header, the active tab's screen, the modal auth dialog and
//! the toast overlay into one element tree.

use super::{App, Message};
use crate::ui::auth_dialog;
use crate::ui::community;
use crate::ui::header::{self, Tab, ViewContext as HeaderViewContext};
use crate::ui::loading;
use crate::ui::marketplace;
use crate::ui::notifications::Toast;
use crate::ui::upload;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Renders the whole application.
pub fn view(app: &App) -> Element<'_, Message> {
    let header_view = header::view(HeaderViewContext {
        active_tab: app.active_tab,
        session: app.session.as_ref(),
        login_in_progress: app
            .auth_dialog
            .as_ref()
            .is_some_and(|dialog| dialog.login_in_progress),
    })
    .map(Message::Header);

    let body: Element<'_, Message> = match app.active_tab {
        Tab::Marketplace => view_marketplace(app),
        Tab::Community => community::view(&app.marketplace.nfts, &app.images),
        Tab::Upload => upload::view(&app.upload).map(Message::Upload),
    };

    let screen = Column::new()
        .push(header_view)
        .push(
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let base: Element<'_, Message> = match app.auth_dialog.as_ref() {
        Some(dialog) => auth_dialog::modal(
            screen.into(),
            auth_dialog::view(dialog).map(Message::AuthDialog),
            Message::AuthDialog(auth_dialog::Message::BackdropPressed),
        ),
        None => screen.into(),
    };

    let toasts = Toast::view_overlay(&app.notifications).map(Message::Notification);

    Stack::new().push(base).push(toasts).into()
}

fn view_marketplace(app: &App) -> Element<'_, Message> {
    // Show the spinner only before the very first response; later failures
    // render inline so stale data stays visible.
    if app.initial_load_pending && !app.marketplace.has_data() && app.marketplace.error.is_none() {
        return loading::view(app.spinner_rotation);
    }

    marketplace::view(marketplace::ViewContext {
        state: &app.marketplace,
        images: &app.images,
    })
    .map(Message::Marketplace)
}
