/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;

/// Coarse classification of a [`PbmErrors`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PbmErrorKind {
    /// The underlying file or stream failed
    Io,
    /// The stream content does not describe a valid bitmap
    Format,
    /// A pixel coordinate lies outside the grid
    Index
}

/// Errors that can occur when reading, writing or
/// accessing a plain bitmap
#[non_exhaustive]
pub enum PbmErrors {
    /// Underlying I/O error, from opening, reading, creating,
    /// writing or flushing
    IoErrors(io::Error),
    /// A header field that should be an unsigned integer
    /// is not, the field name and offending token
    InvalidInteger(&'static str, String),
    /// The stream ended early, what we were reading,
    /// how many tokens we expected and how many we found
    NotEnoughTokens(&'static str, usize, usize),
    /// A dimension is larger than allowed by the decoder options,
    /// the dimension name, the maximum and the value found
    LargeDimensions(&'static str, usize, usize),
    /// Strict mode: a pixel token is neither `0` nor `1`,
    /// the pixel index and the token
    InvalidPixel(usize, String),
    /// The pixel buffer handed to the encoder does not match
    /// the header dimensions, expected and found lengths
    DimensionMismatch(usize, usize),
    /// Pixel access outside the grid, `x`, `y`, `width`, `height`
    OutOfBounds(usize, usize, usize, usize)
}

impl PbmErrors {
    /// Return which family of failures this error belongs to
    pub const fn kind(&self) -> PbmErrorKind {
        match self {
            Self::IoErrors(_) => PbmErrorKind::Io,
            Self::InvalidInteger(..)
            | Self::NotEnoughTokens(..)
            | Self::LargeDimensions(..)
            | Self::InvalidPixel(..)
            | Self::DimensionMismatch(..) => PbmErrorKind::Format,
            Self::OutOfBounds(..) => PbmErrorKind::Index
        }
    }
}

impl Debug for PbmErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoErrors(err) => {
                writeln!(f, "I/O error: {err}")
            }
            Self::InvalidInteger(field, token) => {
                writeln!(f, "Expected an unsigned integer for {field} but found '{token}'")
            }
            Self::NotEnoughTokens(what, expected, found) => {
                writeln!(
                    f,
                    "Stream ended while reading {what}, expected {expected} tokens but found {found}"
                )
            }
            Self::LargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension}, expected a value less than {expected} but found {found}"
                )
            }
            Self::InvalidPixel(index, token) => {
                writeln!(f, "Invalid pixel token '{token}' at pixel {index}, expected 0 or 1")
            }
            Self::DimensionMismatch(expected, found) => {
                writeln!(
                    f,
                    "Data length does not match image dimensions, expected {expected} pixels but found {found}"
                )
            }
            Self::OutOfBounds(x, y, width, height) => {
                writeln!(
                    f,
                    "Pixel ({x}, {y}) is out of bounds for a {width}x{height} image"
                )
            }
        }
    }
}

impl Display for PbmErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for PbmErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoErrors(err) => Some(err),
            _ => None
        }
    }
}

impl From<io::Error> for PbmErrors {
    fn from(err: io::Error) -> Self {
        PbmErrors::IoErrors(err)
    }
}
