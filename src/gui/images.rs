//! Option image loading
//!
//! Each option's image is fetched and decoded once on a background thread,
//! then uploaded as a texture on the UI thread. A failed load leaves the slot
//! in [`ImageSlot::Failed`] and the tile shows a placeholder instead. Failures
//! stay inside this module: nothing is logged or reported to the caller.

use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Duration;

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

/// Remote images larger than this are treated as failed loads
const MAX_REMOTE_BYTES: u64 = 16 * 1024 * 1024;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Whole request, including the body; a stalled server ends as `Failed`
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Error type for a single image load
#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch image: {0}")]
    Http(String),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Where an option's image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLocation {
    Remote(String),
    Local(PathBuf),
}

impl ImageLocation {
    /// Classify an option string as a URL or a filesystem path
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            ImageLocation::Remote(source.to_string())
        } else if let Some(path) = source.strip_prefix("file://") {
            ImageLocation::Local(PathBuf::from(path))
        } else {
            ImageLocation::Local(PathBuf::from(source))
        }
    }

    fn read_bytes(&self, agent: &ureq::Agent) -> Result<Vec<u8>, ImageLoadError> {
        match self {
            ImageLocation::Local(path) => Ok(std::fs::read(path)?),
            ImageLocation::Remote(url) => {
                let response = agent
                    .get(url)
                    .set("User-Agent", "imagepick")
                    .call()
                    .map_err(|e| ImageLoadError::Http(e.to_string()))?;
                let mut bytes = Vec::new();
                response
                    .into_reader()
                    .take(MAX_REMOTE_BYTES)
                    .read_to_end(&mut bytes)?;
                Ok(bytes)
            }
        }
    }
}

/// Decode encoded image bytes into an egui image
pub fn decode_image(bytes: &[u8]) -> Result<ColorImage, ImageLoadError> {
    let img = image::load_from_memory(bytes)?.into_rgba8();
    let (width, height) = img.dimensions();
    let rgba = img.into_raw();
    Ok(ColorImage::from_rgba_unmultiplied(
        [width as usize, height as usize],
        &rgba,
    ))
}

/// Load state of one option's image
pub enum ImageSlot {
    Loading,
    Ready(TextureHandle),
    /// Render a placeholder; selection is unaffected
    Failed,
}

type LoadResult = (String, Result<ColorImage, ImageLoadError>);

fn build_agent(connect: Duration, total: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout_connect(connect)
        .timeout(total)
        .build()
}

/// Texture cache keyed by option string
pub struct ImageCache {
    slots: HashMap<String, ImageSlot>,
    agent: ureq::Agent,
    tx: Sender<LoadResult>,
    rx: Receiver<LoadResult>,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCache {
    pub fn new() -> Self {
        Self::with_timeouts(CONNECT_TIMEOUT, FETCH_TIMEOUT)
    }

    /// Cache whose remote fetches give up after `connect` / `total`
    pub fn with_timeouts(connect: Duration, total: Duration) -> Self {
        let (tx, rx) = channel();
        Self {
            slots: HashMap::new(),
            agent: build_agent(connect, total),
            tx,
            rx,
        }
    }

    /// Start loading any option that has not been requested yet
    pub fn ensure_loaded(&mut self, ctx: &egui::Context, sources: &[String]) {
        for source in sources {
            if self.slots.contains_key(source) {
                continue;
            }
            self.slots.insert(source.clone(), ImageSlot::Loading);

            let tx = self.tx.clone();
            let agent = self.agent.clone();
            let ctx = ctx.clone();
            let source = source.clone();
            thread::spawn(move || {
                let result = ImageLocation::parse(&source)
                    .read_bytes(&agent)
                    .and_then(|bytes| decode_image(&bytes));
                let _ = tx.send((source, result));
                ctx.request_repaint();
            });
        }
    }

    /// Upload finished loads (non-blocking)
    pub fn poll(&mut self, ctx: &egui::Context) {
        while let Ok((source, result)) = self.rx.try_recv() {
            let slot = match result {
                Ok(image) => ImageSlot::Ready(ctx.load_texture(
                    format!("option:{}", source),
                    image,
                    TextureOptions::LINEAR,
                )),
                Err(_) => ImageSlot::Failed,
            };
            self.slots.insert(source, slot);
        }
    }

    pub fn get(&self, source: &str) -> Option<&ImageSlot> {
        self.slots.get(source)
    }

    pub fn is_loading(&self, source: &str) -> bool {
        matches!(self.slots.get(source), Some(ImageSlot::Loading))
    }

    pub fn is_failed(&self, source: &str) -> bool {
        matches!(self.slots.get(source), Some(ImageSlot::Failed))
    }
}
