//! State Module - behavior subsystems wired by the page.
//!
//! - **menu** - mobile nav toggle, body scroll lock, outside-click close
//! - **header** - sticky header scrolled state, last-scroll tracking
//! - **nav** - active-link highlighting, in-page scroll with header offset
//! - **a11y** - keyboard-navigation body class
//! - **lazy** - deferred image activation with polyfill fallback
//! - **track** - inert contact-link click stubs

pub mod a11y;
pub mod header;
pub mod lazy;
pub mod menu;
pub mod nav;
pub mod track;

pub use header::HeaderState;
