//! Board interaction: turning pointer events into highlights and moves.

pub mod highlight;
pub mod render;
pub mod session;
