/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A plain text Portable Bitmap reader and writer
//!
//! The supported format is a whitespace separated list of tokens
//! ```text
//! P1
//! 3 2
//! 1 0 1
//! 0 1 0
//! ```
//! a magic number, the width, the height and then `width*height` pixels
//! in row-major order, `1` for a set pixel and anything else for a clear one.
//!
//! # Example
//! ```
//! use pbm::Bitmap;
//!
//! let mut bitmap = Bitmap::from_bytes(b"P1\n3 2\n1 0 1\n0 1 0\n").unwrap();
//!
//! assert_eq!(bitmap.size(), (3, 2));
//! assert!(bitmap.at(0, 0).unwrap());
//!
//! bitmap.invert();
//! bitmap.flip();
//!
//! assert_eq!(bitmap.to_bytes().unwrap(), b"P1\n3 2\n0 1 0 \n1 0 1 \n");
//! ```
//!
//! # Unsupported
//! - Binary `P4` bitmaps
//! - Header comments
//!
//! # Features
//! - `log`: Log header information via the `log` crate
//! - `serde`: Serialize [`PbmHeader`]
#![macro_use]

pub use pbm_core;

pub use crate::bitmap::Bitmap;
pub use crate::decoder::PbmDecoder;
pub use crate::encoder::PbmEncoder;
pub use crate::errors::{PbmErrorKind, PbmErrors};
pub use crate::header::PbmHeader;

mod bitmap;
mod decoder;
mod encoder;
mod errors;
mod header;
pub mod ops;
