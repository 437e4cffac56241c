// View layer: the in-memory scene host and its terminal rendering

pub mod scene;

#[cfg(feature = "runtime")]
pub mod render;
