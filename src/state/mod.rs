//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat` log and status, `roster`, `composer`
//! draft) so components depend on small focused models. All of it is plain
//! data, testable without a browser.

pub mod chat;
pub mod composer;
pub mod roster;
