/// Image uploader: a URL field OR a picked file, never both
use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, text, text_input};
use iced::{Alignment, ContentFit, Element, Length};
use std::path::PathBuf;

use super::{RemoteImage, MUTED};
use crate::state::data::SearchInput;
use crate::Message;

/// Extensions offered by the file picker
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff"];

const PREVIEW_HEIGHT: f32 = 320.0;

/// What the preview box shows
#[derive(Debug, Clone)]
pub enum Preview {
    /// Picked file, displayed straight from disk
    File { path: PathBuf, handle: Handle },
    /// Submitted URL, downloaded best-effort
    Url { url: String, image: RemoteImage },
}

#[derive(Debug, Clone, Default)]
pub struct ImageUploader {
    image_file: Option<PathBuf>,
    image_url: String,
    preview: Option<Preview>,
}

impl ImageUploader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image_file(&self) -> Option<&PathBuf> {
        self.image_file.as_ref()
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Pick a file: clears the URL and previews the file
    pub fn select_file(&mut self, path: PathBuf) {
        self.preview = Some(Preview::File {
            handle: Handle::from_path(&path),
            path: path.clone(),
        });
        self.image_file = Some(path);
        self.image_url.clear();
    }

    /// Edit the URL text: clears the file and the preview.
    /// The URL is only previewed on submit, not on every keystroke.
    pub fn set_url(&mut self, url: String) {
        self.image_url = url;
        self.image_file = None;
        self.preview = None;
    }

    /// Snapshot the inputs for a search. A URL gets previewed now; returns
    /// the URL to download when a preview fetch is needed.
    pub fn submit(&mut self) -> (SearchInput, Option<String>) {
        let mut fetch = None;

        let url = self.image_url.trim();
        if !url.is_empty() {
            self.preview = Some(Preview::Url {
                url: url.to_string(),
                image: RemoteImage::Loading,
            });
            fetch = Some(url.to_string());
        }

        let input = SearchInput {
            image_file: self.image_file.clone(),
            image_url: self.image_url.clone(),
        };
        (input, fetch)
    }

    /// Store a downloaded preview if it still belongs to the shown URL
    pub fn preview_loaded(&mut self, url: &str, image: RemoteImage) {
        if let Some(Preview::Url { url: shown, image: slot }) = &mut self.preview {
            if shown == url {
                *slot = image;
            }
        }
    }

    /// Advisory guard for the submit controls
    pub fn can_submit(&self, is_loading: bool) -> bool {
        let has_input = self.image_file.is_some() || !self.image_url.trim().is_empty();
        has_input && !is_loading
    }

    pub fn view(&self, is_loading: bool) -> Element<'_, Message> {
        let can_submit = self.can_submit(is_loading);

        let mut url_input = text_input("Paste an image URL", &self.image_url)
            .padding(10)
            .width(Length::Fill);
        if !is_loading {
            url_input = url_input.on_input(Message::UrlChanged);
        }
        if can_submit {
            url_input = url_input.on_submit(Message::Submit);
        }

        let upload = button(centered(text("Upload an Image")))
            .width(Length::Fill)
            .padding(10)
            .style(button::secondary)
            .on_press_maybe((!is_loading).then_some(Message::PickFile));

        let mut content = column![
            text("Find a Product").size(22),
            url_input,
            centered(text("OR").color(MUTED)),
            upload,
        ]
        .spacing(14)
        .align_x(Alignment::Center);

        if let Some(label) = self.image_file.as_ref().and_then(|p| p.file_name()) {
            content = content.push(text(label.to_string_lossy().to_string()).size(14).color(MUTED));
        }

        if let Some(preview) = &self.preview {
            content = content.push(preview_view(preview));
        }

        let submit = button(centered(text("Find Lookalikes").size(18)))
            .width(Length::Fill)
            .padding(12)
            .on_press_maybe(can_submit.then_some(Message::Submit));

        container(content.push(submit))
            .padding(30)
            .width(Length::Fill)
            .max_width(720.0)
            .style(container::rounded_box)
            .into()
    }
}

fn preview_view(preview: &Preview) -> Element<'_, Message> {
    let picture: Element<'_, Message> = match preview {
        Preview::File { handle, .. } | Preview::Url { image: RemoteImage::Loaded(handle), .. } => {
            image(handle.clone())
                .width(Length::Fill)
                .height(PREVIEW_HEIGHT)
                .content_fit(ContentFit::Contain)
                .into()
        }
        Preview::Url { image: RemoteImage::Loading, .. } => placeholder("Loading preview..."),
        Preview::Url { image: RemoteImage::Failed, .. } => placeholder("Preview unavailable"),
    };

    container(picture)
        .padding(4)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

fn centered<'a>(label: iced::widget::Text<'a>) -> Element<'a, Message> {
    container(label).center_x(Length::Fill).into()
}

fn placeholder(label: &str) -> Element<'_, Message> {
    container(text(label).color(MUTED))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(PREVIEW_HEIGHT / 2.0))
        .into()
}
