//! Main module for transcript extraction

pub mod episode;
pub mod extract;
pub mod filter;
pub mod layout;
pub mod node;
pub mod normalize;
pub mod payload;
pub mod render;
pub mod session;
pub mod testing;
