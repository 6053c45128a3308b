//! # NASA Integration Module
//!
//! Thin client for the Astronomy Picture of the Day (APOD) API.
//!
//! ## API Coverage
//!
//! - `GET /planetary/apod?api_key=&date=` - picture, title and explanation for
//!   a single day
//!
//! ## Error Handling
//!
//! Callers only need to know whether the fetch worked. Transport errors, bodies
//! that are not JSON and payloads without a `title` all come back as an
//! [`crate::Error`], and the search handler turns every one of them into the
//! same `500` response.

mod apod;

pub use apod::NasaClient;
