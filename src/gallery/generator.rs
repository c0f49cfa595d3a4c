//! Mock album generator backing `GET /api/photos`.
//!
//! Every call produces fresh random values; only the shape of a page (ids,
//! counts, `has_more`) is a function of the request.

use super::models::{Album, Comment, Photo, PhotosPage};
use chrono::{DateTime, SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const DEFAULT_MAX_PAGES: u32 = 10;
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://picsum.photos";
pub const ALBUM_DESCRIPTION: &str = "A beautiful collection of photos 📸✨";

pub const MAX_PHOTOS_PER_ALBUM: usize = 4;
pub const MAX_COMMENTS_PER_ALBUM: usize = 5;
pub const MAX_LIKES: u32 = 1000;

/// 2025-02-14T00:00:00Z
const TIMESTAMP_WINDOW_START_MS: i64 = 1_739_491_200_000;
/// 2025-02-15T00:00:00Z
const TIMESTAMP_WINDOW_END_MS: i64 = 1_739_577_600_000;

const COMMENT_TEXTS: [&str; 5] = [
    "Beautiful shot! 📸",
    "Love the composition!",
    "Amazing view 😍",
    "This is incredible!",
    "Perfect lighting ✨",
];

const BASE36_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Clone, Debug)]
pub struct GeneratorSettings {
    /// `has_more` is reported as `page < max_pages`.
    pub max_pages: u32,
    pub image_base_url: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        GeneratorSettings {
            max_pages: DEFAULT_MAX_PAGES,
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_owned(),
        }
    }
}

pub struct MockAlbumGenerator {
    settings: GeneratorSettings,
    rng: Mutex<StdRng>,
}

impl MockAlbumGenerator {
    pub fn new(settings: GeneratorSettings) -> Self {
        Self::with_rng(settings, StdRng::from_os_rng())
    }

    /// Deterministic generator, mostly useful in tests.
    pub fn seeded(settings: GeneratorSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(settings: GeneratorSettings, rng: StdRng) -> Self {
        MockAlbumGenerator {
            settings,
            rng: Mutex::new(rng),
        }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generates `limit` albums for the 1-based `page`.
    ///
    /// Album ids cover `(page - 1) * limit + 1 ..= page * limit`. There is no
    /// hard stop past `max_pages`, callers are expected to honour `has_more`.
    pub fn generate_page(&self, page: u32, limit: u32) -> PhotosPage {
        let page = page.max(1);
        let start_id = (page as u64 - 1) * limit as u64;

        let mut rng = self.rng.lock().unwrap();
        let albums = (0..limit as u64)
            .map(|index| self.generate_album(&mut *rng, start_id + index + 1))
            .collect();

        PhotosPage {
            albums,
            has_more: page < self.settings.max_pages,
        }
    }

    fn generate_album<R: Rng>(&self, rng: &mut R, id: u64) -> Album {
        let timestamp = random_timestamp(rng);
        Album {
            id,
            // Photo keys are spaced by 10 so neighbouring albums never share images.
            photos: self.generate_photos(rng, id * 10),
            likes: rng.random_range(0..MAX_LIKES),
            comments: generate_comments(rng),
            username: format!("photographer_{}", random_base36(rng, 5)),
            timestamp,
            description: ALBUM_DESCRIPTION.to_owned(),
        }
    }

    fn generate_photos<R: Rng>(&self, rng: &mut R, base_id: u64) -> Vec<Photo> {
        let count = rng.random_range(1..=MAX_PHOTOS_PER_ALBUM);
        (0..count)
            .map(|index| {
                let image_key = base_id + index as u64;
                Photo {
                    id: format!("{}_{}", base_id, index + 1),
                    image_url: format!(
                        "{}/id/{}/800/800",
                        self.settings.image_base_url, image_key
                    ),
                    thumbnail_url: format!(
                        "{}/id/{}/400/400",
                        self.settings.image_base_url, image_key
                    ),
                }
            })
            .collect()
    }
}

fn generate_comments<R: Rng>(rng: &mut R) -> Vec<Comment> {
    let count = rng.random_range(1..=MAX_COMMENTS_PER_ALBUM);
    (0..count)
        .map(|_| Comment {
            id: random_base36(rng, 9),
            username: format!("user_{}", random_base36(rng, 5)),
            text: COMMENT_TEXTS[rng.random_range(0..COMMENT_TEXTS.len())].to_owned(),
            timestamp: random_timestamp(rng),
        })
        .collect()
}

/// Lowercase base36 string of the given length.
pub fn random_base36<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| BASE36_CHARSET[rng.random_range(0..BASE36_CHARSET.len())] as char)
        .collect()
}

fn random_timestamp<R: Rng>(rng: &mut R) -> String {
    let millis = rng.random_range(TIMESTAMP_WINDOW_START_MS..TIMESTAMP_WINDOW_END_MS);
    format_timestamp(DateTime::from_timestamp_millis(millis).unwrap_or_default())
}

/// Formats like JavaScript's `Date.toISOString()`.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
