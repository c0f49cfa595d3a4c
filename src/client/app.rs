//! The gallery controller: what the page component wires its events to.

use super::auth::{AuthSession, Credentials};
use super::error::{GalleryError, GalleryResult};
use super::keyboard::{Key, KeyListenerRegistry, ListenerId, ViewerCommand};
use super::notification::Notification;
use super::pagination::{FetchOutcome, PaginationStore};
use super::social::SocialState;
use super::source::AlbumSource;
use super::viewer::{Transition, Viewer};
use crate::gallery::{Album, AlbumCard, Comment, Photo, User};
use std::sync::Arc;
use tracing::{info, warn};

pub struct GalleryApp {
    source: Arc<dyn AlbumSource>,
    pagination: PaginationStore,
    viewer: Viewer,
    keyboard: KeyListenerRegistry,
    key_listener: Option<ListenerId>,
    social: SocialState,
    auth: AuthSession,
    notification: Option<Notification>,
}

impl GalleryApp {
    pub fn new(
        source: Arc<dyn AlbumSource>,
        page_size: u32,
        auth: AuthSession,
        social: SocialState,
    ) -> Self {
        GalleryApp {
            source,
            pagination: PaginationStore::new(page_size),
            viewer: Viewer::default(),
            keyboard: KeyListenerRegistry::default(),
            key_listener: None,
            social,
            auth,
            notification: None,
        }
    }

    /// Application start: restores the persisted user and loads the first
    /// page from scratch.
    pub async fn start(&mut self) -> FetchOutcome {
        if let Err(err) = self.auth.restore() {
            warn!("Could not restore the previous session: {}", err);
        }
        self.close_viewer();
        self.pagination.reset();
        self.load_next_page().await
    }

    pub async fn load_next_page(&mut self) -> FetchOutcome {
        self.pagination.load_next_page(self.source.as_ref()).await
    }

    pub fn pagination(&self) -> &PaginationStore {
        &self.pagination
    }

    pub fn albums(&self) -> &[Album] {
        self.pagination.albums()
    }

    pub fn cards(&self) -> Vec<AlbumCard> {
        self.pagination.cards()
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn key_listeners(&self) -> usize {
        self.keyboard.active_count()
    }

    pub fn current_album(&self) -> Option<&Album> {
        self.viewer.current_album(&self.pagination)
    }

    pub fn current_photo(&self) -> Option<&Photo> {
        self.viewer.current_photo(&self.pagination)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.auth.current_user()
    }

    pub fn is_liked(&self, album_id: u64) -> bool {
        self.social.is_liked(album_id)
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn open_viewer(&mut self, album_id: u64) -> bool {
        if !self.viewer.open(album_id, &self.pagination) {
            return false;
        }
        if self.key_listener.is_none() {
            self.key_listener = Some(self.keyboard.attach());
        }
        true
    }

    pub fn close_viewer(&mut self) -> bool {
        if let Some(listener) = self.key_listener.take() {
            self.keyboard.detach(listener);
        }
        self.viewer.close()
    }

    /// Crosses into the next page when the loaded albums run out. If the
    /// viewer is closed or reopened while that page loads, the page is kept
    /// but the viewer does not move.
    pub async fn next_photo(&mut self) -> Transition {
        match self.viewer.next_photo(&self.pagination) {
            Transition::NeedsFetch => {
                let session = match self.viewer.session() {
                    Some(session) => session,
                    None => return Transition::NoOp,
                };
                self.load_next_page().await;
                self.viewer.resume_after_fetch(session, &self.pagination)
            }
            transition => transition,
        }
    }

    pub fn prev_photo(&mut self) -> Transition {
        self.viewer.prev_photo()
    }

    pub fn jump_to_photo(&mut self, photo_index: usize) -> Transition {
        self.viewer.jump_to_photo(photo_index, &self.pagination)
    }

    /// Keys are ignored unless the viewer's listener is attached. Closing
    /// through Escape reports `Moved`.
    pub async fn handle_key(&mut self, key: Key) -> Transition {
        match self.keyboard.dispatch(key) {
            Some(ViewerCommand::NextPhoto) => self.next_photo().await,
            Some(ViewerCommand::PrevPhoto) => self.prev_photo(),
            Some(ViewerCommand::Close) => {
                if self.close_viewer() {
                    Transition::Moved
                } else {
                    Transition::NoOp
                }
            }
            None => Transition::NoOp,
        }
    }

    pub fn like(&mut self, album_id: u64) -> GalleryResult<u32> {
        let result = self
            .social
            .like(&mut self.pagination, self.auth.current_user(), album_id);
        self.notify_failure(&result);
        result
    }

    pub fn comment(&mut self, album_id: u64, text: &str) -> GalleryResult<Comment> {
        let result =
            self.social
                .comment(&mut self.pagination, self.auth.current_user(), album_id, text);
        self.notify_failure(&result);
        result
    }

    pub async fn sign_in(&mut self, credentials: &Credentials) -> GalleryResult<User> {
        let result = self.auth.sign_in(credentials).await;
        match &result {
            Ok(user) => {
                self.notification = Some(Notification::success(format!(
                    "Welcome, {}!",
                    user.name
                )))
            }
            Err(err) => self.notification = Some(Notification::error(err.to_string())),
        }
        result
    }

    pub fn sign_out(&mut self) -> GalleryResult<()> {
        let result = self.auth.sign_out();
        match &result {
            Ok(()) => {
                info!("Signed out");
                self.notification = Some(Notification::success("Signed out successfully"));
            }
            Err(err) => self.notification = Some(Notification::error(err.to_string())),
        }
        result
    }

    fn notify_failure<T>(&mut self, result: &GalleryResult<T>) {
        if let Err(err) = result {
            if matches!(err, GalleryError::AuthRequired | GalleryError::Validation(_)) {
                self.notification = Some(Notification::error(err.to_string()));
            } else {
                warn!("{}", err);
            }
        }
    }
}
