//! Likes and comments, applied locally to the loaded albums. Nothing here
//! reaches the server, a restart discards it all.

use super::clock::Clock;
use super::error::{GalleryError, GalleryResult};
use super::pagination::PaginationStore;
use crate::gallery::{format_timestamp, random_base36, Comment, User};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tracing::debug;

pub const COMMENT_ID_LENGTH: usize = 9;

pub struct SocialState {
    /// Display flag only, the counter is not gated by it.
    liked: HashSet<u64>,
    rng: StdRng,
    clock: Box<dyn Clock>,
}

impl SocialState {
    pub fn new(rng: StdRng, clock: Box<dyn Clock>) -> Self {
        Self {
            liked: HashSet::new(),
            rng,
            clock,
        }
    }

    pub fn seeded(seed: u64, clock: Box<dyn Clock>) -> Self {
        Self::new(StdRng::seed_from_u64(seed), clock)
    }

    pub fn is_liked(&self, album_id: u64) -> bool {
        self.liked.contains(&album_id)
    }

    /// Adds one like and returns the new count.
    pub fn like(
        &mut self,
        store: &mut PaginationStore,
        user: Option<&User>,
        album_id: u64,
    ) -> GalleryResult<u32> {
        let user = user.ok_or(GalleryError::AuthRequired)?;
        let album = store
            .album_mut(album_id)
            .ok_or(GalleryError::AlbumNotFound(album_id))?;

        album.likes = album.likes.saturating_add(1);
        self.liked.insert(album_id);
        debug!("{} liked album {} ({} likes)", user.name, album_id, album.likes);
        Ok(album.likes)
    }

    /// Appends a comment signed by `user` and returns it.
    pub fn comment(
        &mut self,
        store: &mut PaginationStore,
        user: Option<&User>,
        album_id: u64,
        text: &str,
    ) -> GalleryResult<Comment> {
        let user = user.ok_or(GalleryError::AuthRequired)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(GalleryError::validation("Comment cannot be empty"));
        }
        let album = store
            .album_mut(album_id)
            .ok_or(GalleryError::AlbumNotFound(album_id))?;

        let comment = Comment {
            id: random_base36(&mut self.rng, COMMENT_ID_LENGTH),
            username: user.name.clone(),
            text: text.to_owned(),
            timestamp: format_timestamp(self.clock.now()),
        };
        album.comments.push(comment.clone());
        debug!("{} commented on album {}", user.name, album_id);
        Ok(comment)
    }
}
