pub mod shimmer;
pub mod skeleton_screen;

// Re-exports for convenience
pub use shimmer::*;
pub use skeleton_screen::*;
