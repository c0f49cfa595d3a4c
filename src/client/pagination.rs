//! Infinite-scroll pagination over the album source.
//!
//! Fetching is split in two steps, [`PaginationStore::begin_fetch`] and
//! [`PaginationStore::complete_fetch`], so that a host which spawns the
//! request elsewhere still gets the single in-flight guarantee.

use super::error::GalleryResult;
use super::source::AlbumSource;
use crate::gallery::{Album, AlbumCard, PhotosPage, DEFAULT_PAGE_SIZE};
use serde::Serialize;
use tracing::{debug, error, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationCursor {
    /// Next page to request, 1-based.
    pub page: u32,
    pub page_size: u32,
    pub exhausted: bool,
}

impl PaginationCursor {
    fn initial(page_size: u32) -> Self {
        PaginationCursor {
            page: 1,
            page_size,
            exhausted: false,
        }
    }
}

/// Handed out by `begin_fetch`, must be given back to `complete_fetch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub page: u32,
    pub limit: u32,
    generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page arrived and this many albums were appended.
    Appended(usize),
    /// The source failed; nothing changed.
    Failed,
    /// The ticket was issued before a reset, or is not the one in flight.
    Stale,
    /// No request was made: exhausted, or another fetch is in flight.
    Skipped,
}

pub struct PaginationStore {
    albums: Vec<Album>,
    cursor: PaginationCursor,
    in_flight: Option<FetchTicket>,
    generation: u64,
}

impl Default for PaginationStore {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginationStore {
    pub fn new(page_size: u32) -> Self {
        PaginationStore {
            albums: Vec::new(),
            cursor: PaginationCursor::initial(page_size.max(1)),
            in_flight: None,
            generation: 0,
        }
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn cards(&self) -> Vec<AlbumCard> {
        self.albums.iter().map(Album::card).collect()
    }

    pub fn album(&self, album_id: u64) -> Option<&Album> {
        self.albums.iter().find(|a| a.id == album_id)
    }

    pub fn album_mut(&mut self, album_id: u64) -> Option<&mut Album> {
        self.albums.iter_mut().find(|a| a.id == album_id)
    }

    pub fn index_of(&self, album_id: u64) -> Option<usize> {
        self.albums.iter().position(|a| a.id == album_id)
    }

    pub fn cursor(&self) -> PaginationCursor {
        self.cursor
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn has_more(&self) -> bool {
        !self.cursor.exhausted
    }

    /// Reserves the next page. Returns `None` when pagination is exhausted
    /// or a fetch is already outstanding.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.cursor.exhausted {
            debug!("Pagination exhausted, not fetching page {}", self.cursor.page);
            return None;
        }
        if let Some(ticket) = &self.in_flight {
            debug!("Page {} already in flight", ticket.page);
            return None;
        }

        let ticket = FetchTicket {
            page: self.cursor.page,
            limit: self.cursor.page_size,
            generation: self.generation,
        };
        self.in_flight = Some(ticket);
        Some(ticket)
    }

    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: GalleryResult<PhotosPage>,
    ) -> FetchOutcome {
        if self.in_flight != Some(ticket) {
            debug!("Dropping stale result for page {}", ticket.page);
            return FetchOutcome::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(page) => {
                let count = page.albums.len();
                self.albums.extend(page.albums);
                self.cursor.page += 1;
                self.cursor.exhausted = !page.has_more;
                info!(
                    "Loaded page {} ({} albums, {} total, has_more={})",
                    ticket.page,
                    count,
                    self.albums.len(),
                    page.has_more
                );
                FetchOutcome::Appended(count)
            }
            Err(err) => {
                error!("Error fetching page {}: {}", ticket.page, err);
                FetchOutcome::Failed
            }
        }
    }

    pub async fn load_next_page(&mut self, source: &dyn AlbumSource) -> FetchOutcome {
        let ticket = match self.begin_fetch() {
            Some(ticket) => ticket,
            None => return FetchOutcome::Skipped,
        };
        let result = source.fetch_page(ticket.page, ticket.limit).await;
        self.complete_fetch(ticket, result)
    }

    /// Back to the initial state. Outstanding tickets become stale.
    pub fn reset(&mut self) {
        self.albums.clear();
        self.cursor = PaginationCursor::initial(self.cursor.page_size);
        self.in_flight = None;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::error::GalleryError;
    use crate::client::source::LocalAlbumSource;
    use crate::gallery::{GeneratorSettings, MockAlbumGenerator};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn local_source() -> LocalAlbumSource {
        LocalAlbumSource::new(Arc::new(MockAlbumGenerator::seeded(
            GeneratorSettings::default(),
            11,
        )))
    }

    struct FailingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AlbumSource for FailingSource {
        async fn fetch_page(&self, _page: u32, _limit: u32) -> GalleryResult<PhotosPage> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(GalleryError::Fetch("boom".to_owned()))
        }
    }

    #[tokio::test]
    async fn appends_pages_in_arrival_order() {
        let source = local_source();
        let mut store = PaginationStore::new(12);

        assert_eq!(store.load_next_page(&source).await, FetchOutcome::Appended(12));
        assert_eq!(store.load_next_page(&source).await, FetchOutcome::Appended(12));

        let ids: Vec<u64> = store.albums().iter().map(|a| a.id).collect();
        assert_eq!(ids, (1..=24).collect::<Vec<u64>>());
        assert_eq!(store.cursor().page, 3);
        assert!(store.has_more());
    }

    #[tokio::test]
    async fn stops_after_the_last_page() {
        let source = local_source();
        let mut store = PaginationStore::new(12);

        for _ in 0..10 {
            assert_eq!(store.load_next_page(&source).await, FetchOutcome::Appended(12));
        }
        assert!(store.cursor().exhausted);
        assert_eq!(store.albums().last().unwrap().id, 120);

        // Page 11 is never requested.
        assert_eq!(store.load_next_page(&source).await, FetchOutcome::Skipped);
        assert_eq!(store.albums().len(), 120);
        assert_eq!(store.cursor().page, 11);
    }

    #[test]
    fn only_one_fetch_in_flight() {
        let mut store = PaginationStore::new(12);

        let ticket = store.begin_fetch().unwrap();
        assert_eq!(ticket.page, 1);
        assert!(store.is_loading());
        assert_eq!(store.begin_fetch(), None);

        let page = MockAlbumGenerator::seeded(GeneratorSettings::default(), 1).generate_page(1, 12);
        assert_eq!(store.complete_fetch(ticket, Ok(page)), FetchOutcome::Appended(12));
        assert!(!store.is_loading());

        let next = store.begin_fetch().unwrap();
        assert_eq!(next.page, 2);
    }

    #[test]
    fn completing_twice_does_not_duplicate_the_page() {
        let generator = MockAlbumGenerator::seeded(GeneratorSettings::default(), 1);
        let mut store = PaginationStore::new(12);

        let ticket = store.begin_fetch().unwrap();
        assert_eq!(
            store.complete_fetch(ticket, Ok(generator.generate_page(1, 12))),
            FetchOutcome::Appended(12)
        );
        assert_eq!(
            store.complete_fetch(ticket, Ok(generator.generate_page(1, 12))),
            FetchOutcome::Stale
        );
        assert_eq!(store.albums().len(), 12);
    }

    #[tokio::test]
    async fn failures_leave_the_store_untouched() {
        let source = FailingSource {
            calls: AtomicUsize::new(0),
        };
        let mut store = PaginationStore::new(12);

        assert_eq!(store.load_next_page(&source).await, FetchOutcome::Failed);
        assert!(store.albums().is_empty());
        assert_eq!(store.cursor().page, 1);
        assert!(!store.is_loading());
        assert!(store.has_more());

        // No automatic retry, but the next attempt goes through.
        assert_eq!(store.load_next_page(&source).await, FetchOutcome::Failed);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn reset_discards_in_flight_results() {
        let generator = MockAlbumGenerator::seeded(GeneratorSettings::default(), 1);
        let mut store = PaginationStore::new(12);

        let ticket = store.begin_fetch().unwrap();
        store.reset();
        assert!(!store.is_loading());
        assert_eq!(
            store.complete_fetch(ticket, Ok(generator.generate_page(1, 12))),
            FetchOutcome::Stale
        );
        assert!(store.albums().is_empty());

        let fresh = store.begin_fetch().unwrap();
        assert_eq!(fresh.page, 1);
        assert_ne!(fresh, ticket);
    }

    #[tokio::test]
    async fn reset_restores_initial_cursor() {
        let source = local_source();
        let mut store = PaginationStore::new(5);
        store.load_next_page(&source).await;
        store.reset();

        assert!(store.albums().is_empty());
        assert_eq!(
            store.cursor(),
            PaginationCursor {
                page: 1,
                page_size: 5,
                exhausted: false
            }
        );
    }

    #[tokio::test]
    async fn looks_albums_up_by_id() {
        let source = local_source();
        let mut store = PaginationStore::new(4);
        store.load_next_page(&source).await;

        assert_eq!(store.index_of(3), Some(2));
        assert_eq!(store.album(3).unwrap().id, 3);
        assert!(store.album(99).is_none());
        assert_eq!(store.cards().len(), 4);
    }
}
