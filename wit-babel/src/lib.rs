//! Lucky-star outline transcoding
//!
//!     This crate converts the lucky-star outline notation into either nested HTML lists
//!     (hierarchical numbering, collapsible items, named anchors, resolved cross-references) or
//!     an indented plain-text equivalent.
//!
//!     This is a pure lib: it powers the wittgenstein CLI but is shell agnostic. No code here
//!     reads files, prints, looks at env vars or exits the process. Fatal conditions are
//!     returned as [`ConvertError`] values.
//!
//! The Notation
//!
//!     * an item                     bullet, depth 1
//!         * a child                 one indent unit (4 columns, or a tab) deeper
//!     ** another child              extra stars add depth as well
//!     1* a numbered item            `1` before the glyph starts a numbered branch
//!     *{intro} a named item         identifier, referenced elsewhere as @{intro}
//!     ```                           fenced regions switch all of the above off
//!
//! Architecture
//!
//!     raw lines → fence tracker → classifier → nesting machine → formatter → records
//!                                                                           ↓
//!                                             final text ← reference resolver
//!
//!     The nesting machine (./nesting) only decides: levels to close, levels to open, the
//!     item's numbering. Formatters (./formats) turn those decisions into records, each tagged
//!     with the source line it came from. The resolver (./references) is a second pass, so
//!     forward references work and undefined ones are reported against their source line.
//!
//!     The file structure :
//!     .
//!     ├── error.rs           # ConvertError
//!     ├── source.rs          # numbered source lines
//!     ├── classify.rs        # fence tracker + line classifier
//!     ├── counters.rs        # per-depth counters, Numbering
//!     ├── ids.rs             # identifier markers + registry
//!     ├── nesting            # state machine, continuation lines
//!     ├── output.rs          # records with pending closing tags
//!     ├── inline.rs          # inline markup rendering (comrak)
//!     ├── formats
//!     │   ├── html           # structured mode + stylesheet/script assets
//!     │   └── plain          # plain mode
//!     ├── references.rs      # second pass
//!     └── transcoder.rs      # the driver
//!
//! Testing
//!
//!     Unit tests live next to each module. tests/ holds document level tests per output mode
//!     plus property tests of the nesting invariants.

pub mod classify;
pub mod counters;
pub mod error;
pub mod formats;
pub mod ids;
pub mod inline;
pub mod nesting;
pub mod output;
pub mod references;
pub mod source;
pub mod transcoder;

pub use error::ConvertError;
pub use formats::OutputMode;
pub use transcoder::{convert, ConvertOptions, Transcoder};
