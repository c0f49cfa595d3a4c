//! Viewer navigation: an album cursor and a photo cursor over the loaded
//! albums, crossing album boundaries and asking for more pages at the end.
//!
//! Moving to another album, in either direction, always lands on its first
//! photo.

use super::pagination::PaginationStore;
use crate::gallery::{Album, Photo};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewerPosition {
    pub album_index: usize,
    pub photo_index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Moved,
    /// At the last loaded photo while more pages exist. Load the next page,
    /// then call [`Viewer::resume_after_fetch`].
    NeedsFetch,
    NoOp,
}

#[derive(Default, Debug)]
pub struct Viewer {
    position: Option<ViewerPosition>,
    session: u64,
}

impl Viewer {
    /// Opens on the first photo of `album_id`. Unknown ids keep the viewer
    /// closed and return false.
    pub fn open(&mut self, album_id: u64, store: &PaginationStore) -> bool {
        match store.index_of(album_id) {
            Some(album_index) => {
                self.session += 1;
                self.position = Some(ViewerPosition {
                    album_index,
                    photo_index: 0,
                });
                debug!("Viewer session {} opened on album {}", self.session, album_id);
                true
            }
            None => {
                debug!("Cannot open viewer, album {} is not loaded", album_id);
                false
            }
        }
    }

    /// Returns false if the viewer was already closed.
    pub fn close(&mut self) -> bool {
        self.position.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.position.is_some()
    }

    pub fn position(&self) -> Option<ViewerPosition> {
        self.position
    }

    /// Identifies the current opening of the viewer; `None` while closed.
    pub fn session(&self) -> Option<u64> {
        self.position.map(|_| self.session)
    }

    pub fn current_album<'a>(&self, store: &'a PaginationStore) -> Option<&'a Album> {
        self.position
            .and_then(|p| store.albums().get(p.album_index))
    }

    pub fn current_photo<'a>(&self, store: &'a PaginationStore) -> Option<&'a Photo> {
        let position = self.position?;
        store
            .albums()
            .get(position.album_index)?
            .photos
            .get(position.photo_index)
    }

    pub fn has_next(&self, store: &PaginationStore) -> bool {
        match self.position {
            Some(p) => {
                let photos = album_len(store, p.album_index);
                p.photo_index + 1 < photos
                    || p.album_index + 1 < store.albums().len()
                    || store.has_more()
            }
            None => false,
        }
    }

    pub fn has_prev(&self) -> bool {
        match self.position {
            Some(p) => p.photo_index > 0 || p.album_index > 0,
            None => false,
        }
    }

    pub fn next_photo(&mut self, store: &PaginationStore) -> Transition {
        let position = match self.position.as_mut() {
            Some(p) => p,
            None => return Transition::NoOp,
        };

        if position.photo_index + 1 < album_len(store, position.album_index) {
            position.photo_index += 1;
            return Transition::Moved;
        }

        if position.album_index + 1 < store.albums().len() {
            position.album_index += 1;
            position.photo_index = 0;
            return Transition::Moved;
        }

        if store.has_more() {
            Transition::NeedsFetch
        } else {
            Transition::NoOp
        }
    }

    pub fn prev_photo(&mut self) -> Transition {
        let position = match self.position.as_mut() {
            Some(p) => p,
            None => return Transition::NoOp,
        };

        if position.photo_index > 0 {
            position.photo_index -= 1;
            Transition::Moved
        } else if position.album_index > 0 {
            position.album_index -= 1;
            position.photo_index = 0;
            Transition::Moved
        } else {
            Transition::NoOp
        }
    }

    pub fn jump_to_photo(&mut self, photo_index: usize, store: &PaginationStore) -> Transition {
        match self.position.as_mut() {
            Some(p) if photo_index < album_len(store, p.album_index) => {
                p.photo_index = photo_index;
                Transition::Moved
            }
            _ => Transition::NoOp,
        }
    }

    /// Retries `next_photo` once a fetch started in `session` completed.
    /// Does nothing if the viewer was closed or reopened in the meantime.
    pub fn resume_after_fetch(&mut self, session: u64, store: &PaginationStore) -> Transition {
        if self.session() != Some(session) {
            debug!("Viewer session {} is gone, ignoring fetched page", session);
            return Transition::NoOp;
        }
        match self.next_photo(store) {
            // The page did not grow, e.g. the fetch failed.
            Transition::NeedsFetch => Transition::NoOp,
            other => other,
        }
    }
}

fn album_len(store: &PaginationStore, album_index: usize) -> usize {
    store
        .albums()
        .get(album_index)
        .map(|a| a.photos.len())
        .unwrap_or(0)
}
