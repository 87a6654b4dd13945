//! svg-sprite - Assemble SVG sprite documents from pre-rendered fragments
//!
//! This library accumulates already-rendered SVG markup fragments (symbols,
//! shapes, paths) into a single `<svg>` document with a configurable
//! XML/doctype preamble and root attributes, then serializes the document to
//! a string or wraps it as an in-memory file for a downstream asset pipeline.
//!
//! It is a structural accumulator and string formatter only: no parsing, no
//! validation, no layout. Fragments are emitted verbatim; only root attribute
//! values are escaped.
//!
//! # Example
//!
//! ```rust
//! use svg_sprite::SpriteDocument;
//!
//! let mut sprite = SpriteDocument::new("", "", &[("viewBox", "0 0 24 24")], true);
//! sprite.add_one(r##"<symbol id="icon"><path d="M0 0h10v10H0z"/></symbol>"##);
//!
//! let svg = sprite.serialize();
//! assert!(svg.starts_with(r#"<svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg""#));
//!
//! let file = sprite.to_file("dist", "dist/sprite.svg");
//! assert_eq!(file.contents_utf8(), Some(svg.as_str()));
//! ```

pub mod file;
pub mod sprite;

pub use file::FileHandle;
pub use sprite::{escape_attribute, SpriteDocument};
