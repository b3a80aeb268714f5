/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{read, remove_file, write};
use std::path::PathBuf;

use pbm::pbm_core::options::DecoderOptions;
use pbm::{Bitmap, PbmErrorKind, PbmErrors};

const SAMPLE: &[u8] = b"P1\n3 2\n1 0 1\n0 1 0\n";

/// A path in the temp directory unique to this process and test
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pbm-{}-{name}.pbm", std::process::id()))
}

#[test]
fn open_reads_the_named_file() {
    let path = temp_path("open");
    write(&path, SAMPLE).unwrap();

    let bitmap = Bitmap::open(&path).unwrap();
    remove_file(&path).unwrap();

    assert_eq!(bitmap.size(), (3, 2));
    assert!(bitmap.at(0, 0).unwrap());
    assert!(!bitmap.at(1, 0).unwrap());
}

#[test]
fn open_missing_file_is_an_io_error() {
    let path = temp_path("does-not-exist");

    let err = Bitmap::open(&path).unwrap_err();

    assert_eq!(err.kind(), PbmErrorKind::Io);
    assert!(matches!(err, PbmErrors::IoErrors(ref e) if e.kind() == std::io::ErrorKind::NotFound));
}

#[test]
fn open_truncated_file_is_a_format_error() {
    let path = temp_path("truncated");
    write(&path, b"P1\n3 2\n1 0 1\n0").unwrap();

    let err = Bitmap::open(&path).unwrap_err();
    remove_file(&path).unwrap();

    assert_eq!(err.kind(), PbmErrorKind::Format);
}

#[test]
fn open_respects_options() {
    let path = temp_path("options");
    write(&path, b"P1 2 1 1 7").unwrap();

    let lenient = Bitmap::open(&path);
    let strict = Bitmap::open_with_options(&path, DecoderOptions::new_strict());
    remove_file(&path).unwrap();

    assert_eq!(lenient.unwrap().pixels(), &[true, false]);
    assert!(matches!(strict, Err(PbmErrors::InvalidPixel(1, _))));
}

#[test]
fn save_writes_the_inverted_sample_exactly() {
    let input = temp_path("sample-in");
    let output = temp_path("sample-out");
    write(&input, SAMPLE).unwrap();

    let mut bitmap = Bitmap::open(&input).unwrap();
    bitmap.invert();
    bitmap.save(&output).unwrap();

    let contents = read(&output).unwrap();
    let reread = Bitmap::open(&output).unwrap();

    remove_file(&input).unwrap();
    remove_file(&output).unwrap();

    assert_eq!(contents, b"P1\n3 2\n0 1 0 \n1 0 1 \n");
    assert_eq!(reread, bitmap);
}

#[test]
fn save_overwrites_existing_files() {
    let output = temp_path("overwrite");
    write(&output, b"some much longer content that must disappear entirely").unwrap();

    let bitmap = Bitmap::from_bytes(b"P1 1 1 1").unwrap();
    bitmap.save(&output).unwrap();

    let contents = read(&output).unwrap();
    remove_file(&output).unwrap();

    assert_eq!(contents, b"P1\n1 1\n1 \n");
}

#[test]
fn save_into_missing_directory_is_an_io_error() {
    let output = std::env::temp_dir()
        .join(format!("pbm-{}-no-such-dir", std::process::id()))
        .join("out.pbm");

    let bitmap = Bitmap::from_bytes(SAMPLE).unwrap();
    let err = bitmap.save(&output).unwrap_err();

    assert_eq!(err.kind(), PbmErrorKind::Io);
}

#[test]
fn read_accepts_any_reader() {
    let bitmap = Bitmap::read(std::io::Cursor::new(SAMPLE)).unwrap();

    assert_eq!(bitmap, Bitmap::from_bytes(SAMPLE).unwrap());
}
