//! Software rendering module
//!
//! Points are accumulated in a persistent 0RGB buffer that is only cleared on
//! reset, so every presented frame shows the whole figure so far.

pub mod framebuffer;

pub use framebuffer::FrameBuffer;
