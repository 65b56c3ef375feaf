//! # Secded Core
//!
//! Hamming single-error-correcting, double-error-detecting codec for 8, 16
//! and 32 bit payloads.
//!
//! ## Modules
//!
//! - `constants`: Supported widths and the parity-count table
//! - `types`: Core types (Payload, Codeword, Syndrome, DecodeResult)
//! - `layout`: Parity-position planning and payload extraction
//! - `encoder`: Codeword construction
//! - `corrupt`: Bit flips at caller-supplied positions
//! - `decoder`: Syndrome computation, classification and correction
//! - `stream`: Block codec over byte buffers
//!
//! All operations are pure: every call takes its inputs by reference and
//! returns fresh values, so a "current codeword" lives with the caller.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod constants;
pub mod corrupt;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod layout;
pub mod stream;
pub mod types;

// Re-export commonly used types
pub use constants::DataWidth;
pub use corrupt::corrupt;
pub use decoder::{decode, Decoder, DecoderConfig};
pub use encoder::{encode, encode_str};
pub use error::CodecError;
pub use layout::{extract_payload, ParityLayout};
pub use types::{BitRole, Codeword, DecodeResult, ErrorClass, Payload, Syndrome};

/// Result type alias for codec operations
pub type Result<T> = core::result::Result<T, CodecError>;
