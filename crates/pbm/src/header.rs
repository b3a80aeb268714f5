/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// The leading fields of a plain bitmap
///
/// ```text
/// P1
/// 3 2
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PbmHeader {
    pub(crate) magic_number: String,
    pub(crate) width:        usize,
    pub(crate) height:       usize
}

impl PbmHeader {
    /// Create a header from its parts.
    ///
    /// The magic number is not validated
    pub fn new(magic_number: impl Into<String>, width: usize, height: usize) -> PbmHeader {
        PbmHeader {
            magic_number: magic_number.into(),
            width,
            height
        }
    }
    /// The format identifying token, conventionally `P1`
    pub fn magic_number(&self) -> &str {
        &self.magic_number
    }
    pub const fn width(&self) -> usize {
        self.width
    }
    pub const fn height(&self) -> usize {
        self.height
    }
    /// Number of pixels described by the header,
    /// or `None` if `width * height` overflows
    pub const fn num_pixels(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PbmHeader {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("PbmHeader", 3)?;

        state.serialize_field("magic_number", &self.magic_number)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;

        state.end()
    }
}
