/// Responsive results grid
///
/// Cards have a fixed width and the Wrap layout fills each row with as
/// many as fit, so the column count follows the window width.
use iced::widget::{column, text};
use iced::Element;
use iced_aw::Wrap;
use std::collections::HashMap;

use super::{product_card, RemoteImage, BOLD};
use crate::state::data::{ProductId, ProductResult};
use crate::Message;

const GAP: f32 = 16.0;

/// Photos are looked up by product id, so a card keeps its picture when
/// the threshold filter changes which cards are shown
pub fn view<'a>(
    results: &[&'a ProductResult],
    photos: &'a HashMap<ProductId, RemoteImage>,
) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = results
        .iter()
        .map(|&product| product_card::view(product, photos.get(&product.product_id)))
        .collect();

    column![
        text("Results:").size(26).font(BOLD),
        Wrap::with_elements(cards).spacing(GAP).line_spacing(GAP),
    ]
    .spacing(16)
    .into()
}
