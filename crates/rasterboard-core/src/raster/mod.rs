//! Integer rasterization.
//!
//! [`line`] produces the ordered pixel sequence approximating an ideal
//! segment between two canvas points. Output is lazy; callers that need the
//! whole sequence can collect it, callers that stream pixels to a sink
//! iterate without allocating.

mod line;

pub use line::{LinePixels, line};
