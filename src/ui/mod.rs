/// UI components
///
/// - `uploader.rs` - file/URL input with preview
/// - `results_grid.rs` - wrapping grid of result cards
/// - `product_card.rs` - a single result card

pub mod product_card;
pub mod results_grid;
pub mod uploader;

use iced::widget::image::Handle;
use iced::{font, Color, Font};

use crate::api::SearchError;

/// Bold variant of the default font
pub const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Muted text for secondary labels
pub const MUTED: Color = Color::from_rgb(0.62, 0.62, 0.66);

/// A picture fetched over HTTP
#[derive(Debug, Clone)]
pub enum RemoteImage {
    Loading,
    Loaded(Handle),
    Failed,
}

impl RemoteImage {
    pub fn from_download(result: Result<Vec<u8>, SearchError>) -> Self {
        match result {
            Ok(bytes) => RemoteImage::Loaded(Handle::from_bytes(bytes)),
            Err(err) => {
                log::warn!("⚠️  {}", err);
                RemoteImage::Failed
            }
        }
    }
}
