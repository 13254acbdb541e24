//! Behavioural tests for the probviz core
//!
//! Tests are organized by topic:
//! - `registry` - Registry contents and lookup failures
//! - `evaluation` - Curve shape and formula values per distribution
//! - `session` - Selection changes and slider state
//! - `render_output` - The render entry point as a UI adapter sees it

mod evaluation;
