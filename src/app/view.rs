// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::config::READOUT_DECIMALS;
use super::i18n::fluent::I18n;
use super::Message;
use crate::domain::slider::{CrossingPolicy, RangeValues, SliderRange};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::range_slider;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Alignment, Element, Length, Padding};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub range: SliderRange,
    pub values: RangeValues,
    pub crossing: CrossingPolicy,
    /// i18n key of the configuration notice, if one is shown.
    pub notice: Option<&'a str>,
}

/// Renders the host view: heading, slider and value readout.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new().spacing(spacing::MD).width(Length::Fill);

    if let Some(key) = ctx.notice {
        column = column.push(view_notice(ctx.i18n, key));
    }

    let slider = range_slider(ctx.range, ctx.values, Message::RangeChanged)
        .on_release(Message::RangeReleased)
        .crossing(ctx.crossing);

    column = column
        .push(Text::new(ctx.i18n.tr("heading")).size(typography::TITLE_MD))
        .push(Container::new(slider).padding(Padding {
            top: spacing::SLIDER_VERTICAL,
            bottom: spacing::SLIDER_VERTICAL,
            left: spacing::SLIDER_LEADING,
            right: spacing::SLIDER_TRAILING,
        }))
        .push(view_readout(ctx.i18n, ctx.values))
        .push(
            Text::new(ctx.i18n.tr_with_args(
                "readout-bounds",
                &[
                    ("min", format_value(ctx.range.min()).as_str()),
                    ("max", format_value(ctx.range.max()).as_str()),
                ],
            ))
            .size(typography::CAPTION),
        );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::surface)
        .into()
}

fn view_readout<'a>(i18n: &I18n, values: RangeValues) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::LG)
        .push(
            Text::new(i18n.tr_with_args(
                "readout-lower",
                &[("value", format_value(values.lower).as_str())],
            ))
            .size(typography::BODY),
        )
        .push(
            Text::new(i18n.tr_with_args(
                "readout-upper",
                &[("value", format_value(values.upper).as_str())],
            ))
            .size(typography::BODY),
        )
        .into()
}

fn view_notice<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .push(
            Text::new(i18n.tr(key))
                .size(typography::CAPTION)
                .width(Length::Fill),
        )
        .push(
            button(Text::new(i18n.tr("notice-dismiss")).size(typography::CAPTION))
                .on_press(Message::DismissNotice),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::notice)
        .into()
}

/// Formats a slider value for the readout.
#[must_use]
pub fn format_value(value: f32) -> String {
    format!("{:.*}", READOUT_DECIMALS, value)
}
