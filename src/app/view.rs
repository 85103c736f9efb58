// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays out the comparison area above a status bar. While either image is
//! still loading, or failed to load, the comparison area shows a message
//! instead of the slider.

use super::Message;
use crate::domain::reveal::SlideMode;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{ImageData, Side};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::reveal;
use crate::ui::theme;
use fluent_bundle::FluentValue;
use iced::widget::{container, Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub reveal: &'a reveal::State,
    pub before: Option<&'a ImageData>,
    pub after: Option<&'a ImageData>,
    pub load_errors: &'a [(Side, Error)],
    pub config_warning: Option<&'a str>,
    pub is_dark_theme: bool,
}

/// Renders the comparison screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let surface = theme::reveal_surface_color(ctx.is_dark_theme);

    let content: Element<'_, Message> = if !ctx.load_errors.is_empty() {
        view_errors(ctx.i18n, ctx.load_errors)
    } else if let (Some(before), Some(after)) = (ctx.before, ctx.after) {
        ctx.reveal.view(before, after).map(Message::Reveal)
    } else {
        centered(
            Text::new(ctx.i18n.tr("status-loading"))
                .size(typography::BODY)
                .color(theme::muted_text_color())
                .into(),
        )
    };

    let comparison = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::reveal_surface_style(surface));

    Column::new()
        .push(view_labels(ctx.i18n))
        .push(comparison)
        .push(view_status(&ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_labels(i18n: &I18n) -> Element<'_, Message> {
    let label = |key: &str| {
        container(Text::new(i18n.tr(key)).size(typography::CAPTION))
            .padding([spacing::XS / 2.0, spacing::XS])
            .style(|_theme| container::Style {
                background: Some(iced::Background::Color(theme::reveal_label_background())),
                text_color: Some(theme::reveal_divider_color()),
                ..Default::default()
            })
    };

    Row::new()
        .push(label("label-before"))
        .push(Space::new().width(Length::Fill))
        .push(label("label-after"))
        .padding(spacing::XS)
        .width(Length::Fill)
        .into()
}

fn view_status<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let percent = format!("{:.0}", ctx.reveal.percent().value());
    let revealed = ctx
        .i18n
        .tr_with_args("status-reveal-percent", &[("percent", FluentValue::from(percent))]);
    let mode = ctx.i18n.tr_with_args(
        "status-mode",
        &[("mode", FluentValue::from(ctx.i18n.tr(mode_key(ctx.reveal.mode()))))],
    );

    let mut row = Row::new()
        .push(Text::new(revealed).size(typography::BODY))
        .push(
            Text::new(mode)
                .size(typography::BODY)
                .color(theme::muted_text_color()),
        )
        .spacing(spacing::MD)
        .align_y(Alignment::Center);

    if let Some(key) = ctx.config_warning {
        row = row.push(
            Text::new(ctx.i18n.tr(key))
                .size(typography::BODY)
                .color(theme::error_text_color()),
        );
    }

    row.padding([spacing::XS, spacing::SM]).width(Length::Fill).into()
}

fn view_errors<'a>(i18n: &'a I18n, errors: &'a [(Side, Error)]) -> Element<'a, Message> {
    let lines = errors.iter().map(|(side, error)| {
        let side_label = i18n.tr(match side {
            Side::Before => "label-before",
            Side::After => "label-after",
        });
        let text = i18n.tr_with_args(
            "error-load-image-details",
            &[
                ("side", FluentValue::from(side_label)),
                ("message", FluentValue::from(i18n.tr(error.i18n_key()))),
            ],
        );
        Text::new(text)
            .size(typography::BODY)
            .color(theme::error_text_color())
            .into()
    });

    centered(
        Column::with_children(lines)
            .spacing(spacing::XS)
            .align_x(Alignment::Center)
            .into(),
    )
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Translation key for a mode's display name.
pub fn mode_key(mode: SlideMode) -> &'static str {
    match mode {
        SlideMode::Hover => "mode-hover",
        SlideMode::Click => "mode-click",
        SlideMode::Drag => "mode-drag",
    }
}
