mod client;
mod movies;

pub use client::{ClientError, SentimentClient};
pub use movies::{MOVIES, find_movie};
