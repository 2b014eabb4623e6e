//! Season standings aggregation engine.
//!
//! Raw race tables flow strictly forward through this crate:
//!
//! 1. [`AliasResolver`] is built once from the roster document.
//! 2. Each table is parsed by [`read_race_table`] into canonicalized rows.
//! 3. [`extract_race`] derives the race's winners, podium, fastest lap and
//!    biggest position gain.
//! 4. [`SeasonAggregator`] folds every race, in upload order, into a
//!    [`SeasonReport`](season_model::SeasonReport).
//!
//! [`aggregate_season`] runs all four steps.
//!
//! # Example
//!
//! ```ignore
//! use season_core::{AliasResolver, aggregate_season};
//! use season_model::AggregationOptions;
//!
//! let resolver = AliasResolver::from_entries(&roster);
//! let report = aggregate_season(&tables, &resolver, &AggregationOptions::default());
//! println!("{}", report.to_json(true)?);
//! ```

pub mod aggregate;
pub mod alias;
pub mod engine;
pub mod extract;
pub mod numeric;
pub mod table;

pub use aggregate::{SeasonAggregator, Tally};
pub use alias::AliasResolver;
pub use engine::{aggregate_season, process_table};
pub use extract::{biggest_gain, extract_race, fastest_lap, podium, winners};
pub use table::{clean_header, first_block, read_race_table};
