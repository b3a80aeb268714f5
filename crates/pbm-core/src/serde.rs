#![cfg(feature = "serde")]

use serde::ser::*;

use crate::options::DecoderOptions;

impl Serialize for DecoderOptions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("DecoderOptions", 3)?;

        state.serialize_field("max_width", &self.get_max_width())?;
        state.serialize_field("max_height", &self.get_max_height())?;
        state.serialize_field("strict_mode", &self.get_strict_mode())?;

        state.end()
    }
}
