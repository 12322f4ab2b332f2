pub mod config;
pub mod content;
pub mod data;
pub mod export;
pub mod logger;
pub mod post;
pub mod post_list;
pub mod text_utils;
mod test_data;
