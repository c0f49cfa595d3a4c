//! Gallery models shared by the mock API and the client state.
//!
//! Field names follow the JSON wire format (camelCase).

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub image_url: String,
    pub thumbnail_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub username: String,
    pub text: String,
    /// ISO-8601, e.g. `2025-02-14T05:12:33.123Z`.
    pub timestamp: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: u64,
    pub photos: Vec<Photo>,
    pub likes: u32,
    pub comments: Vec<Comment>,
    pub username: String,
    pub timestamp: String,
    pub description: String,
}

impl Album {
    /// The tile shown in the masonry grid for this album.
    pub fn card(&self) -> AlbumCard {
        AlbumCard {
            album_id: self.id,
            thumbnail_url: self
                .photos
                .first()
                .map(|p| p.thumbnail_url.clone())
                .unwrap_or_default(),
            photos_count: self.photos.len(),
            likes: self.likes,
            comments_count: self.comments.len(),
        }
    }
}

/// Summary rendered by a grid tile: cover thumbnail plus hover counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumCard {
    pub album_id: u64,
    pub thumbnail_url: String,
    pub photos_count: usize,
    pub likes: u32,
    pub comments_count: usize,
}

/// Response body of `GET /api/photos`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotosPage {
    pub albums: Vec<Album>,
    pub has_more: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}
