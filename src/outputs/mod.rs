//! Output generation for the enriched article rows.
//!
//! One format is produced per run: a CSV file of scored articles, named
//! after the query. See [`csv`].

pub mod csv;
