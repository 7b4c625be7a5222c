/// A single search result: photo, category, name and match percentage
use iced::widget::{column, container, image, text, tooltip};
use iced::{Color, ContentFit, Element, Length};
use std::borrow::Cow;

use super::{RemoteImage, BOLD, MUTED};
use crate::state::data::ProductResult;
use crate::Message;

/// Cards have a fixed width so the grid can wrap them into columns
pub const CARD_WIDTH: f32 = 220.0;

const IMAGE_HEIGHT: f32 = 200.0;

/// Longest name shown before truncating with an ellipsis
const NAME_MAX_CHARS: usize = 22;

const MATCH_GREEN: Color = Color::from_rgb(0.30, 0.78, 0.42);

pub fn view<'a>(product: &'a ProductResult, photo: Option<&'a RemoteImage>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match photo {
        Some(RemoteImage::Loaded(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(IMAGE_HEIGHT)
            .content_fit(ContentFit::Cover)
            .into(),
        Some(RemoteImage::Failed) => placeholder("Image unavailable"),
        Some(RemoteImage::Loading) | None => placeholder("Loading image..."),
    };

    // Full name on hover
    let name = tooltip(
        text(truncate_name(&product.name, NAME_MAX_CHARS)).size(18),
        container(text(product.name.as_str()).size(14))
            .padding(6)
            .style(container::rounded_box),
        tooltip::Position::Top,
    );

    let details = column![
        text(product.category.as_str()).size(13).color(MUTED),
        name,
        text(format_match(product.similarity_percent()))
            .font(BOLD)
            .color(MATCH_GREEN),
    ]
    .spacing(6)
    .padding(12);

    container(column![picture, details])
        .width(CARD_WIDTH)
        .style(container::rounded_box)
        .into()
}

fn placeholder(label: &str) -> Element<'_, Message> {
    container(text(label).size(14).color(MUTED))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(IMAGE_HEIGHT))
        .into()
}

/// "83.3% Match"
pub fn format_match(percent: f64) -> String {
    format!("{:.1}% Match", percent)
}

/// Shorten `name` to at most `max_chars` characters, ending in an ellipsis
pub fn truncate_name(name: &str, max_chars: usize) -> Cow<'_, str> {
    if name.chars().count() <= max_chars {
        return Cow::Borrowed(name);
    }

    let kept: String = name.chars().take(max_chars.saturating_sub(1)).collect();
    Cow::Owned(format!("{}…", kept.trim_end()))
}
