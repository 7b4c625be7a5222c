use env_logger::Env;
use iced::widget::{column, container, scrollable, slider, text};
use iced::{Alignment, Border, Element, Length, Task, Theme};
use iced_aw::Spinner;
use std::collections::HashMap;
use std::path::PathBuf;

mod api;
mod config;
mod state;
mod ui;

use api::{SearchClient, SearchError};
use config::Config;
use state::data::{ProductId, ProductResult, SearchInput};
use state::search::{SearchState, MAX_THRESHOLD};
use ui::uploader::{ImageUploader, IMAGE_EXTENSIONS};
use ui::{results_grid, RemoteImage, BOLD, MUTED};

/// Main application state
struct LookalikeLens {
    /// Results, loading flag, error slot and threshold
    search: SearchState,
    /// File/URL inputs and preview
    uploader: ImageUploader,
    /// Product photos of the current search, by product id
    photos: HashMap<ProductId, RemoteImage>,
    /// HTTP client for the search API
    client: SearchClient,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User edited the image URL
    UrlChanged(String),
    /// User clicked "Upload an Image"
    PickFile,
    /// File dialog closed (None = cancelled)
    FileSelected(Option<PathBuf>),
    /// User asked for lookalikes
    Submit,
    /// Search request settled
    SearchFinished {
        generation: u64,
        outcome: Result<Vec<ProductResult>, SearchError>,
    },
    /// A product photo download settled
    PhotoLoaded {
        generation: u64,
        product_id: ProductId,
        result: Result<Vec<u8>, SearchError>,
    },
    /// The URL preview download settled
    PreviewLoaded {
        url: String,
        result: Result<Vec<u8>, SearchError>,
    },
    /// Similarity threshold slider moved
    ThresholdChanged(u8),
}

impl LookalikeLens {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = Config::from_env();
        let client = SearchClient::new(&config);

        log::info!("🎨 Lookalike Lens ready, searching via {}", client.endpoint());

        (Self::with_client(client), Task::none())
    }

    fn with_client(client: SearchClient) -> Self {
        LookalikeLens {
            search: SearchState::new(),
            uploader: ImageUploader::new(),
            photos: HashMap::new(),
            client,
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::UrlChanged(url) => {
                self.uploader.set_url(url);
                Task::none()
            }
            Message::PickFile => Task::perform(pick_image_file(), Message::FileSelected),
            Message::FileSelected(Some(path)) => {
                log::debug!("Selected {}", path.display());
                self.uploader.select_file(path);
                Task::none()
            }
            Message::FileSelected(None) => Task::none(),
            Message::Submit => {
                let (input, preview_url) = self.uploader.submit();
                let search = self.handle_search(input);

                match preview_url {
                    Some(url) => Task::batch([search, self.fetch_preview(url)]),
                    None => search,
                }
            }
            Message::SearchFinished { generation, outcome } => {
                match &outcome {
                    Ok(results) => log::info!("✅ Search #{} returned {} products", generation, results.len()),
                    Err(SearchError::Connection { detail }) => {
                        log::warn!("⚠️  Search #{} failed: {}", generation, detail)
                    }
                    Err(SearchError::ReadFile { path, detail }) => {
                        log::warn!("⚠️  Search #{} could not read {}: {}", generation, path.display(), detail)
                    }
                    Err(err) => log::warn!("⚠️  Search #{} failed: {}", generation, err),
                }

                if !self.search.finish(generation, outcome) {
                    log::debug!("Discarding stale response of search #{}", generation);
                    return Task::none();
                }

                self.fetch_photos()
            }
            Message::PhotoLoaded { generation, product_id, result } => {
                if generation == self.search.generation() {
                    self.photos.insert(product_id, RemoteImage::from_download(result));
                }
                Task::none()
            }
            Message::PreviewLoaded { url, result } => {
                self.uploader.preview_loaded(&url, RemoteImage::from_download(result));
                Task::none()
            }
            Message::ThresholdChanged(threshold) => {
                self.search.set_similarity_threshold(threshold);
                Task::none()
            }
        }
    }

    /// Start a search for the uploader's input
    fn handle_search(&mut self, input: SearchInput) -> Task<Message> {
        let pending = match self.search.begin(input) {
            Ok(pending) => pending,
            Err(err) => {
                log::info!("Search not started: {}", err);
                return Task::none();
            }
        };

        self.photos.clear();
        log::info!("🔍 Search #{} started: {:?}", pending.generation, pending.source);

        let client = self.client.clone();
        let generation = pending.generation;
        Task::perform(
            async move { client.search(pending.source).await },
            move |outcome| Message::SearchFinished { generation, outcome },
        )
    }

    /// Download the photo of every current result
    fn fetch_photos(&mut self) -> Task<Message> {
        let generation = self.search.generation();
        let mut tasks = Vec::new();

        for product in self.search.results() {
            if product.image_url.is_empty() {
                self.photos.insert(product.product_id.clone(), RemoteImage::Failed);
                continue;
            }

            self.photos.insert(product.product_id.clone(), RemoteImage::Loading);

            let client = self.client.clone();
            let url = product.image_url.clone();
            let product_id = product.product_id.clone();
            tasks.push(Task::perform(
                async move { client.fetch_image(url).await },
                move |result| Message::PhotoLoaded {
                    generation,
                    product_id: product_id.clone(),
                    result,
                },
            ));
        }

        Task::batch(tasks)
    }

    /// Best-effort download of a submitted URL for the preview box
    fn fetch_preview(&self, url: String) -> Task<Message> {
        let client = self.client.clone();
        let request_url = url.clone();
        Task::perform(
            async move { client.fetch_image(request_url).await },
            move |result| Message::PreviewLoaded { url: url.clone(), result },
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = column![
            text("Lookalike Lens").size(48).font(BOLD),
            text("Find visually similar products in seconds.")
                .size(20)
                .color(MUTED),
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        let mut body = column![].spacing(20).width(Length::Fill);

        if self.search.is_loading() {
            body = body.push(
                container(Spinner::new().width(Length::Fixed(40.0)).height(Length::Fixed(40.0)))
                    .center_x(Length::Fill)
                    .padding(20),
            );
        }

        if let Some(error) = self.search.error() {
            body = body.push(
                container(text(error))
                    .padding(12)
                    .width(Length::Fill)
                    .style(error_banner),
            );
        }

        if !self.search.results().is_empty() {
            let threshold = self.search.similarity_threshold();
            let filter = column![
                text(format!("Similarity Threshold: {}%", threshold)),
                slider(0..=MAX_THRESHOLD, threshold, Message::ThresholdChanged).step(1u8),
            ]
            .spacing(8)
            .width(Length::Fill)
            .max_width(720.0);
            body = body.push(container(filter).center_x(Length::Fill));

            let filtered = self.search.filtered_results();
            if filtered.is_empty() {
                body = body.push(
                    container(text("No results match the selected filter.").color(MUTED))
                        .center_x(Length::Fill),
                );
            } else {
                body = body.push(results_grid::view(&filtered, &self.photos));
            }
        }

        let page = column![
            header,
            self.uploader.view(self.search.is_loading()),
            body,
            text("Have a good one!").color(MUTED),
        ]
        .spacing(32)
        .padding(40)
        .max_width(1200.0)
        .align_x(Alignment::Center);

        scrollable(container(page).center_x(Length::Fill)).into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn error_banner(theme: &Theme) -> container::Style {
    let danger = theme.extended_palette().danger.weak;

    container::Style {
        background: Some(danger.color.into()),
        text_color: Some(danger.text),
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Show the native image picker without blocking the UI
async fn pick_image_file() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Select an Image")
        .add_filter("Images", &IMAGE_EXTENSIONS[..])
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn,lookalike_lens=info")).init();

    iced::application(
        "Lookalike Lens",
        LookalikeLens::update,
        LookalikeLens::view,
    )
    .theme(LookalikeLens::theme)
    .centered()
    .run_with(LookalikeLens::new)
}
