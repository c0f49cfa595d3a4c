mod generator;
mod models;

pub use generator::{
    format_timestamp, random_base36, GeneratorSettings, MockAlbumGenerator, ALBUM_DESCRIPTION,
    DEFAULT_IMAGE_BASE_URL, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE, MAX_COMMENTS_PER_ALBUM,
    MAX_LIKES, MAX_PHOTOS_PER_ALBUM,
};
pub use models::{Album, AlbumCard, Comment, Photo, PhotosPage, User};
