/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! In place transforms over row-major pixel buffers
//!
//! These operate on raw slices so they can be used on any
//! buffer laid out as `height` rows of `width` elements.
//! A width of zero is treated as an empty image.

/// Invert every pixel
///
/// ```text
///old image     new image
///┌─────────┐   ┌─────────┐
///│1 0 1 1 0│   │0 1 0 0 1│
///│0 0 1 0 1│   │1 1 0 1 0│
///└─────────┘   └─────────┘
///```
pub fn invert(in_out_image: &mut [bool]) {
    in_out_image.iter_mut().for_each(|x| *x = !*x);
}

/// Creates a horizontal mirror image by reflecting the pixels around the central y-axis
///
/// The middle column of an odd width image stays in place.
///
///```text
///old image     new image
///┌─────────┐   ┌─────────┐
///│a b c d e│   │e d c b a│
///│f g h i j│   │j i h g f│
///└─────────┘   └─────────┘
///```
pub fn flip_rows<T>(in_out_image: &mut [T], width: usize) {
    if width == 0 {
        return;
    }
    debug_assert_eq!(
        in_out_image.len() % width,
        0,
        "Width does not evenly divide image"
    );

    for width_chunks in in_out_image.chunks_exact_mut(width) {
        let (left_to_right, right_to_left) = width_chunks.split_at_mut(width / 2);

        // iterate and swap
        for (ltr, rtl) in left_to_right.iter_mut().zip(right_to_left.iter_mut().rev()) {
            core::mem::swap(ltr, rtl);
        }
    }
}

/// Creates a vertical mirror image by reversing the order of rows
///
/// The middle row of an odd height image stays in place.
///
/// ```text
///old image     new image
/// ┌─────────┐   ┌─────────┐
/// │a b c d e│   │k l m n o│
/// │f g h i j│   │f g h i j│
/// │k l m n o│   │a b c d e│
/// └─────────┘   └─────────┘
/// ```
pub fn flop_rows<T>(in_out_image: &mut [T], width: usize) {
    if width == 0 {
        return;
    }
    // Split the image in half, walk the top half forwards
    // and the bottom half backwards, swapping whole rows.
    // With an odd height the middle row straddles the split
    // and is skipped by both exact chunk iterators.
    let len = in_out_image.len();

    let (top, bottom) = in_out_image.split_at_mut(len / 2);

    for (t, b) in top
        .chunks_exact_mut(width)
        .zip(bottom.rchunks_exact_mut(width))
    {
        t.swap_with_slice(b);
    }
}
