//! Document-level codec tests.

mod fixtures;
