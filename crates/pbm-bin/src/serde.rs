/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use pbm::pbm_core::options::DecoderOptions;
use pbm::PbmHeader;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Header information of a file, for logging
pub struct Metadata<'a> {
    file:    &'a Path,
    header:  &'a PbmHeader,
    set:     usize,
    options: &'a DecoderOptions
}

impl<'a> Metadata<'a> {
    pub fn new(
        file: &'a Path, header: &'a PbmHeader, set: usize, options: &'a DecoderOptions
    ) -> Metadata<'a> {
        Metadata {
            file,
            header,
            set,
            options
        }
    }
}

impl Serialize for Metadata<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 4)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("header", &self.header)?;
        state.serialize_field("set_pixels", &self.set)?;
        state.serialize_field("options", &self.options)?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pbm::pbm_core::options::DecoderOptions;
    use pbm::PbmHeader;

    use crate::serde::Metadata;

    #[test]
    fn metadata_serializes_to_json() {
        let header = PbmHeader::new("P1", 3, 2);
        let options = DecoderOptions::default();
        let metadata = Metadata::new(Path::new("image.pbm"), &header, 4, &options);

        let json = serde_json::to_string(&metadata).unwrap();

        assert_eq!(
            json,
            concat!(
                r#"{"file":"image.pbm","header":{"magic_number":"P1","width":3,"height":2},"#,
                r#""set_pixels":4,"options":{"max_width":16384,"max_height":16384,"strict_mode":false}}"#
            )
        );
    }

    #[test]
    fn options_serialize_their_limits() {
        let options = DecoderOptions::new_strict()
            .set_max_width(10)
            .set_max_height(20);

        let value = serde_json::to_value(options).unwrap();

        assert_eq!(value["max_width"], 10);
        assert_eq!(value["max_height"], 20);
        assert_eq!(value["strict_mode"], true);
    }
}
