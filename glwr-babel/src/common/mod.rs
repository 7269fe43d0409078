//! Helpers shared by the readers and writers.

pub mod xml;
