pub mod components;
pub mod config;
pub mod data;
pub mod date_utils;
pub mod icons;
pub mod list_loader;
pub mod list_utils;
pub mod page_frame;
pub mod resources;
pub mod summary;
