//! Client-side gallery state: pagination, the photo viewer, likes and
//! comments, and the mock sign-in flow.

mod app;
mod auth;
mod clock;
mod error;
mod keyboard;
mod notification;
mod pagination;
mod persistence;
mod social;
mod source;
mod viewer;

pub use app::GalleryApp;
pub use auth::{
    validate_credentials, AuthSession, Credentials, MockAuthenticator, DEFAULT_SIGN_IN_DELAY,
    MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{GalleryError, GalleryResult};
pub use keyboard::{Key, KeyListenerRegistry, ListenerId, ViewerCommand};
pub use notification::{Notification, NotificationKind};
pub use pagination::{FetchOutcome, FetchTicket, PaginationCursor, PaginationStore};
pub use persistence::{
    FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, PersistedUser, USER_KEY,
};
pub use social::{SocialState, COMMENT_ID_LENGTH};
pub use source::{AlbumSource, HttpAlbumSource, LocalAlbumSource};
pub use viewer::{Transition, Viewer, ViewerPosition};
