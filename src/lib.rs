//! Masonry photo gallery: a mock photos API plus the client-side state the
//! gallery page runs on.

pub mod client;
pub mod config;
pub mod gallery;
pub mod server;

pub use client::{GalleryApp, GalleryError, GalleryResult};
pub use gallery::{Album, MockAlbumGenerator, PhotosPage};
pub use server::{run_server, RequestsLoggingLevel};
