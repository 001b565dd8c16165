//! # CLI Module
//!
//! User-facing commands. Each command gathers configuration, drives the
//! lookup pipeline and renders the outcome; the heavy lifting lives in
//! [`crate::pipeline`] and [`crate::spotify`].
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Pipeline (auth → resolve → fetch → pair)
//!     ↓
//! API Layer (Spotify Integration)
//! ```
//!
//! ## Usage
//!
//! ```bash
//! toptracks top Daft Punk              # table of the artist's top tracks
//! toptracks top "Daft Punk" --json     # same data as JSON
//! toptracks top Daft Punk --timeout 10 # give up on slow requests
//! ```
//!
//! Failures are reported with the crate's output macros: a missing artist is a
//! warning, everything else terminates with exit code 1.

mod top;

pub use top::render_view;
pub use top::top;
