//! The text → date-range pipeline.
//!
//! Parsing an input string is a fixed forward pipeline. No stage reads ahead
//! past the current token, and only the range builder carries cross-token
//! state:
//!
//! ```text
//! input ── tagger::tag ────────── keyword / text segments      (tagger.rs)
//!               │
//!               v
//!         strip::strip_noise ──── digits and numeral words survive,
//!               │                 surrounding prose collapses   (strip.rs)
//!               v
//!         normalize::tokenize ─── numeral-word runs become integers,
//!               │                 keywords become tokens    (normalize.rs)
//!               v
//!         RangeBuilder::push ──── slot-filling state machine  (builder.rs)
//!               │                 over calendar arithmetic   (calendar.rs)
//!               v
//!         RangeBuilder::finish ── defaults for the open range, emit
//!               │
//!               v
//!         Vec<DateRange>
//! ```
//!
//! ## Responsibilities by module
//!
//! - `tagger.rs`: longest-first literal scan for the keyword table.
//! - `strip.rs`: noise removal outside keyword segments.
//! - `normalize.rs`: per-run tokenization and Korean numeral conversion.
//! - `builder.rs`: token classification, the `from`/`to` slot machine,
//!   mid-stream flushing and the end-of-input finalizer.
//! - `calendar.rs`: fallible month/year shifting and month-length lookup.

mod builder;
mod calendar;
mod normalize;
mod strip;
mod tagger;


use crate::api::Context;
use crate::date_range::{DateRange, ParseError};
use crate::engine::builder::RangeBuilder;

/// Run the full pipeline over `text`, resolving relative expressions
/// against the reference date snapshotted in `context`.
pub(crate) fn run(text: &str, context: &Context) -> Result<Vec<DateRange>, ParseError> {
    let segments = tagger::tag(text);
    let tokens = normalize::tokenize(&segments);

    let mut builder = RangeBuilder::new(context.reference_date);
    for token in tokens {
        builder.push(token)?;
    }
    builder.finish()
}
