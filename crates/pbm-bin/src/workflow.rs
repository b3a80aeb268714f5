/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;
use std::path::Path;

use log::{debug, info};
use pbm::pbm_core::options::DecoderOptions;
use pbm::{Bitmap, PbmErrors};

use crate::serde::Metadata;

pub const INPUT_FILE: &str = "image.pbm";
pub const OUTPUT_FILE: &str = "inverted_image.pbm";

/// Read `input`, report its size and the pixel at (1, 1),
/// then write an inverted copy to `output`
pub fn run_example<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<(), PbmErrors> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();

    run_example_to(input.as_ref(), output.as_ref(), &mut lock)
}

/// Same as [`run_example`] with the report written to `report`
pub fn run_example_to<W: Write>(
    input: &Path, output: &Path, report: &mut W
) -> Result<(), PbmErrors> {
    info!("Reading {:?}", input);

    let options = DecoderOptions::default();
    let mut image = Bitmap::open_with_options(input, options)?;

    let metadata = Metadata::new(input, image.header(), image.count_set(), &options);

    if let Ok(json) = serde_json::to_string(&metadata) {
        info!("{json}");
    }

    let (width, height) = image.size();
    writeln!(report, "Image Size: {width} x {height}")?;
    writeln!(report, "Value at (1, 1): {}", image.at(1, 1)?)?;

    image.invert();
    debug!("Inverted image, {} pixels set", image.count_set());

    image.save(output)?;
    info!("Wrote {:?}", output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::{read, remove_file, write};
    use std::path::PathBuf;

    use pbm::PbmErrorKind;

    use crate::workflow::run_example_to;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pbm-bin-{}-{name}.pbm", std::process::id()))
    }

    #[test]
    fn example_reports_and_inverts() {
        let input = temp_path("in");
        let output = temp_path("out");
        write(&input, b"P1\n3 2\n1 0 1\n0 1 0\n").unwrap();

        let mut report = vec![];
        run_example_to(&input, &output, &mut report).unwrap();

        let written = read(&output).unwrap();
        remove_file(&input).unwrap();
        remove_file(&output).unwrap();

        assert_eq!(
            String::from_utf8(report).unwrap(),
            "Image Size: 3 x 2\nValue at (1, 1): true\n"
        );
        assert_eq!(written, b"P1\n3 2\n0 1 0 \n1 0 1 \n");
    }

    #[test]
    fn missing_input_is_reported() {
        let input = temp_path("missing");
        let output = temp_path("never-written");

        let err = run_example_to(&input, &output, &mut Vec::<u8>::new()).unwrap_err();

        assert_eq!(err.kind(), PbmErrorKind::Io);
        assert!(!output.exists());
    }

    #[test]
    fn too_small_images_fail_on_pixel_lookup() {
        let input = temp_path("tiny");
        let output = temp_path("tiny-out");
        write(&input, b"P1 1 1 1").unwrap();

        let mut report = vec![];
        let err = run_example_to(&input, &output, &mut report).unwrap_err();
        remove_file(&input).unwrap();

        assert_eq!(err.kind(), PbmErrorKind::Index);
        assert_eq!(String::from_utf8(report).unwrap(), "Image Size: 1 x 1\n");
        assert!(!output.exists());
    }
}
