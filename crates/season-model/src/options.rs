//! Configuration options for season aggregation.

use serde::{Deserialize, Serialize};

/// Options controlling how race tables are folded into a season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationOptions {
    /// Parse and extract tables on the rayon pool before folding them in
    /// upload order.
    pub parallel_parse: bool,

    /// Drop rows whose driver and team are both blank.
    ///
    /// Off by default: such rows still count towards standings under the
    /// empty identity.
    pub skip_blank_rows: bool,
}

impl Default for AggregationOptions {
    fn default() -> Self {
        Self {
            parallel_parse: true,
            skip_blank_rows: false,
        }
    }
}

impl AggregationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a single-threaded run.
    pub fn sequential() -> Self {
        Self {
            parallel_parse: false,
            ..Self::default()
        }
    }

    pub fn with_parallel_parse(mut self, enable: bool) -> Self {
        self.parallel_parse = enable;
        self
    }

    pub fn with_skip_blank_rows(mut self, enable: bool) -> Self {
        self.skip_blank_rows = enable;
        self
    }
}
