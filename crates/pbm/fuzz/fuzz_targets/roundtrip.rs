#![no_main]

use libfuzzer_sys::fuzz_target;
use pbm::pbm_core::options::DecoderOptions;

fuzz_target!(|data: &[u8]| {
    let options = DecoderOptions::default()
        .set_max_width(1024)
        .set_max_height(1024);

    if let Ok(mut bitmap) = pbm::Bitmap::from_bytes_with_options(data, options) {
        bitmap.invert();
        bitmap.flip();
        bitmap.flop();

        let encoded = bitmap.to_bytes().unwrap();
        let decoded = pbm::Bitmap::from_bytes_with_options(&encoded, options)
            .expect("Failed to decode an encoded bitmap");

        assert!(decoded == bitmap, "Re-decoded bitmap doesn't match the original");
    }
});
