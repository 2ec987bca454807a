#![forbid(unsafe_code)]
//! Resource constant generator for Objective-C projects.
//!
//! Turns named sections of raw resource keys and values into a paired
//! `.h`/`.m` artifact set: a header declaring a nested read-only struct of
//! `NSString *` constants, and an implementation initializing it with
//! literal values. Raw keys are normalized into safe lower-camel-case
//! identifiers; keys that normalize to nothing or to a compiler keyword are
//! skipped with a warning instead of failing the run.
//!
//! # Quick Start
//!
//! ```rust
//! use xcresgen::{ResourceValue, ResourcesBuilder, SectionOptions};
//!
//! let mut builder = ResourcesBuilder::new().with_output_path("gen/Resources");
//! builder.add_section(
//!     "icons",
//!     Some(vec![
//!         ("play_button", ResourceValue::from("play.png")),
//!         ("pause_button", ResourceValue::annotated("pause.png", "Pause icon")),
//!     ]),
//!     &SectionOptions::new(),
//! )?;
//!
//! let artifacts = builder.build();
//! assert!(artifacts.header.contains("__unsafe_unretained NSString *playButton;"));
//! assert!(artifacts.implementation.contains(".playButton = @\"play.png\","));
//! # Ok::<(), xcresgen::Error>(())
//! ```
//!
//! # Guarantees
//!
//! - **Deterministic**: identical registrations render byte-identical
//!   artifacts, independent of registration order.
//! - **Structurally paired**: both artifacts enumerate sections and keys
//!   from the same sorted registry, so their aggregate and field names
//!   always match.
//! - **Best effort**: invalid keys are dropped and reported to a
//!   [`SkipObserver`]; only a missing item map is a hard error.

pub mod builder;
pub mod emit;
pub mod error;
pub mod keywords;
pub mod normalize;
pub mod observer;
pub mod options;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    builder::ResourcesBuilder,
    emit::Artifacts,
    error::Error,
    keywords::{COMPILER_KEYWORDS, ReservedWords},
    observer::{LogObserver, MemoryObserver, SkipObserver},
    options::SectionOptions,
    types::{ResourceEntry, ResourceValue, Section, SectionRegistry, SkipEvent, SkipReason},
};
