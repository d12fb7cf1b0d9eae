//! Render-free state machines behind the interactive sections: the
//! reveal-on-scroll latch, the portfolio category filter, the gallery
//! modal, and the contact form. Components hold these in signals; nothing
//! in this module touches the DOM, so everything is unit tested directly.

pub mod contact;
pub mod filter;
pub mod gallery;
pub mod reveal;

#[cfg(test)]
mod tests;
