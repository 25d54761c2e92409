//! One-shot notifications shown on the next rendered page.
//!
//! Messages are queued per browser session and drained on first read.

pub mod flash_store;

pub use flash_store::{FlashStore, SessionFlash};
