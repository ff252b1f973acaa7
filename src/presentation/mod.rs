// Terminal rendering of the list/detail views and flat exports.

pub mod export;
pub mod render;
