//! Shimmer loading placeholders for Dioxus.
//!
//! [`Shimmer`] decorates any content with an animated highlight sweep to
//! signal that it is loading, and [`SkeletonScreen`] is a prebuilt skeleton
//! layout built from it. Both are plain components: wrap the markup that is
//! still loading, pick the two colors, and the crate's stylesheet does the
//! rest.
//!
//! ```rust,no_run
//! use dioxus::prelude::*;
//! use dioxus_shimmer::{Shimmer, Speed};
//!
//! #[component]
//! fn ProfileCard(loading: bool) -> Element {
//!     rsx! {
//!         Shimmer {
//!             tint: "rgba(142, 142, 147, 0.3)",
//!             highlight: "white",
//!             blur: 5.0,
//!             speed: Speed::Medium,
//!             redacted: true,
//!             active: loading,
//!             div { class: "profile-card",
//!                 h3 { "Ada Lovelace" }
//!                 p { "Analyst, programmer" }
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! The sweep is driven entirely by a CSS animation; the component only
//! measures the decorated box after its first layout to work out how far
//! the diagonal band has to travel to clear both edges.

pub mod components;
pub mod config;
pub mod speed;

pub use components::*;
pub use config::ShimmerConfig;
pub use speed::Speed;
