//! # numwords-core
//!
//! Core types, traits, and error definitions for the numwords speller.
//!
//! This crate provides the foundational abstractions shared by the engine and
//! the command-line front end:
//!
//! - Exact numeric input (`Number`, `NumericInput`) and language tags (`Lang`)
//! - Grammatical classes and plural buckets (`GrammaticalClass`, `CountClass`)
//! - The `NumberSpeller` trait
//! - Unified error handling via `NumWordsError`
//! - Conversion options and currency metadata

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{ConversionOptions, CurrencyInfo, DecimalSeparator, NumberFormat};
pub use error::{NumWordsError, NumWordsResult};
pub use traits::NumberSpeller;
pub use types::{CountClass, GrammaticalClass, Lang, Number, NumericInput};
