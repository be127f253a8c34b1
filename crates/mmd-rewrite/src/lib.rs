//! Mermaid post-processing for Pandoc-generated HTML.
//!
//! Pandoc renders fenced `mermaid` code blocks as inert
//! `<pre class="mermaid"><code>...</code></pre>` markup with the diagram
//! source entity-escaped. This crate rewrites a generated HTML document so
//! the Mermaid browser library can render those diagrams client-side:
//! - `<pre class="mermaid"><code>` blocks become `<div class="mermaid">`
//!   containers with their HTML entities decoded
//! - the Mermaid loader script and an initialization call are injected
//!   before `</body>`
//! - a small centering style for `.mermaid` containers is injected before
//!   `</head>`
//!
//! The transformation is a single pass over an in-memory string; the file
//! is read once and overwritten in place.

mod consts;
mod entities;
mod rewriter;

pub use consts::{SCRIPT_BLOCK, STYLE_BLOCK};
pub use entities::decode_entities;
pub use rewriter::{RewriteError, process_file, rewrite_document};
