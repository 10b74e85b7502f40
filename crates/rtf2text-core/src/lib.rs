//! rtf2text-core: Converter-independent vocabulary types.
//!
//! This crate provides the error taxonomy ([`RtfError`]), the non-fatal
//! warning types ([`ConvertWarning`], [`ConvertWarningCode`]), and the
//! [`ConvertResult`] wrapper used by rtf2text-rs. It has no external
//! dependencies — all functionality is pure Rust.

pub mod error;

pub use error::{ConvertResult, ConvertWarning, ConvertWarningCode, RtfError};
