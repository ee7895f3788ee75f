//! # `iptc_naa_types`
//!
//! Data model and tag tables for the `iptc_naa` parsing crate.
//!
//! This crate is intentionally "dumb" - it holds the key/value types that
//! parsed IPTC metadata is represented with, alongside the static dictionary
//! mapping Application Record dataset numbers to their names.
//!
//! No parsing happens here.

#![forbid(unsafe_code)]

pub mod iptc;
