//! Two-player chess board that shows where a piece can go. Pointing at a piece
//! previews its destinations, clicking it selects the piece and a second click
//! on a highlighted square performs the move.
//!
//! The crate is split into the board model ([`chess`]), the interaction layer
//! that turns pointer events into drawing commands ([`interface`]) and a small
//! line-oriented [`Frontend`] used by the `kibitz` binary.

#![warn(missing_docs, variant_size_differences)]
// Rustc lints.
#![warn(
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]
// Rustdoc lints.
#![warn(
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![deny(clippy::perf)]

pub mod chess;
pub mod interface;

mod frontend;
pub use frontend::Frontend;
use shadow_rs::shadow;

shadow!(build);

/// Returns the full version that can be used to identify how the binary was
/// built in the first place.
#[must_use]
pub fn version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Describes the build type and whether it was made from a clean checkout.
#[must_use]
pub fn build_info() -> String {
    let mut info = format!("release build: {}", !shadow_rs::is_debug());
    if !shadow_rs::git_clean() {
        info.push_str(", built with uncommitted changes");
    }
    info
}
