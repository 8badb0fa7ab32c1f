// Pixel-packing codec: PNG round trips and every failure a damaged carrier can raise.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use soundpixel_core::{
        crypto::seal,
        headers::{build_block, BlockFormat},
        pack_to_image,
        pixel::{
            raster::{pad_to_raster, read_png, write_png},
            Dimensions,
        },
        types::ErrorKind,
        unpack_from_image,
    };

    /// Re-serialize a raster stream at the dimensions of `png`.
    fn repack(png: &[u8], stream: &[u8]) -> Vec<u8> {
        let img = image::load_from_memory(png).unwrap();
        let dims = Dimensions { width: img.width(), height: img.height() };
        write_png(stream, dims).unwrap()
    }

    /// Wrap a hand-built stream in a PNG the way the encoder would.
    fn png_of(mut stream: Vec<u8>) -> Vec<u8> {
        let (dims, _) = pad_to_raster(&mut stream).unwrap();
        write_png(&stream, dims).unwrap()
    }

    #[test]
    fn empty_payload_roundtrip() {
        let enc = pack_to_image(b"", "empty.mp3", None).unwrap();
        let dec = unpack_from_image(&enc.png, None).unwrap();
        assert!(dec.data.is_empty());
        assert_eq!(dec.filename, "empty.mp3");
        assert_eq!(dec.data_length, 0);
    }

    #[test]
    fn silence_roundtrip() {
        let data = vec![0u8; 10_000];
        let enc = pack_to_image(&data, "silence.wav", None).unwrap();
        assert_eq!(enc.payload_size, 10_000);

        let dec = unpack_from_image(&enc.png, None).unwrap();
        assert_eq!(dec.data, data);
        assert_eq!(dec.data_length, 10_000);
        assert_eq!(dec.filename, "silence.wav");
    }

    #[test]
    fn output_is_rgb_png_of_reported_size() {
        let enc = pack_to_image(&[0xFF; 1000], "ff.bin", None).unwrap();
        assert_eq!(&enc.png[..8], b"\x89PNG\r\n\x1a\n");

        let img = image::load_from_memory(&enc.png).unwrap();
        assert_eq!(img.color(), image::ColorType::Rgb8);
        assert_eq!((img.width(), img.height()), (enc.width, enc.height));
        assert_eq!(enc.total_pixels, u64::from(enc.width) * u64::from(enc.height));

        // 22 header + 6 name + 1000 data = 1028 bytes = 343 pixels -> 19 x 19
        assert_eq!((enc.width, enc.height), (19, 19));
    }

    #[test]
    fn dimensions_are_deterministic() {
        let a = pack_to_image(&[1; 300], "a", None).unwrap();
        let b = pack_to_image(&[2; 300], "b", None).unwrap();
        assert_eq!((a.width, a.height), (b.width, b.height));
    }

    #[test]
    fn empty_filename_kept() {
        let enc = pack_to_image(b"abc", "", None).unwrap();
        assert_eq!(unpack_from_image(&enc.png, None).unwrap().filename, "");
    }

    #[test]
    fn long_filename_truncated() {
        let name = format!("{}.bin", "n".repeat(300));
        let enc = pack_to_image(b"abc", &name, None).unwrap();
        let dec = unpack_from_image(&enc.png, None).unwrap();
        assert_eq!(dec.filename, "n".repeat(255));
    }

    #[test]
    fn encrypted_roundtrip() {
        let enc = pack_to_image(b"top secret", "plan.txt", Some("pw")).unwrap();
        let dec = unpack_from_image(&enc.png, Some("pw")).unwrap();
        assert_eq!(dec.data, b"top secret");
        assert_eq!(dec.filename, "plan.txt");
        assert_eq!(dec.telemetry.counters.envelopes, 1);
    }

    #[test]
    fn encrypted_without_password() {
        let enc = pack_to_image(b"top secret", "plan.txt", Some("pw")).unwrap();
        let err = unpack_from_image(&enc.png, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPassword);
        let err = unpack_from_image(&enc.png, Some("")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPassword);
    }

    #[test]
    fn encrypted_wrong_password() {
        let enc = pack_to_image(b"top secret", "plan.txt", Some("pw")).unwrap();
        let err = unpack_from_image(&enc.png, Some("nope")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecryptionFailed);
    }

    #[test]
    fn empty_password_on_encode_rejected() {
        let err = pack_to_image(b"abc", "a", Some("")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPassword);
    }

    #[test]
    fn password_ignored_for_plain_carrier() {
        let enc = pack_to_image(b"abc", "a", None).unwrap();
        assert_eq!(unpack_from_image(&enc.png, Some("pw")).unwrap().data, b"abc");
    }

    #[test]
    fn bit_flip_in_payload_is_corrupted() {
        let data: Vec<u8> = (0..500u32).map(|i| (i * 7) as u8).collect();
        let enc = pack_to_image(&data, "f.bin", None).unwrap();

        let mut stream = read_png(&enc.png).unwrap();
        stream[22 + 5 + 250] ^= 0x04;
        let err = unpack_from_image(&repack(&enc.png, &stream), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Corrupted);
    }

    #[test]
    fn bit_flip_in_sealed_payload_fails_authentication() {
        let enc = pack_to_image(&[3u8; 200], "f.bin", Some("pw")).unwrap();
        let mut stream = read_png(&enc.png).unwrap();
        stream[64 + 100] ^= 0x01;
        let err = unpack_from_image(&repack(&enc.png, &stream), Some("pw")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecryptionFailed);
    }

    #[test]
    fn padding_is_ignored() {
        let enc = pack_to_image(b"x", "f", None).unwrap();
        let mut stream = read_png(&enc.png).unwrap();
        let last = stream.len() - 1;
        stream[last] = 0xAA;
        let dec = unpack_from_image(&repack(&enc.png, &stream), None).unwrap();
        assert_eq!(dec.data, b"x");
    }

    #[test]
    fn declared_length_past_raster_is_truncated() {
        let block = build_block(BlockFormat::Image, &[9u8; 1000], "f");
        let png = png_of(block[..22 + 1 + 10].to_vec());
        let err = unpack_from_image(&png, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Truncated);
    }

    #[test]
    fn sealed_length_past_raster_is_truncated() {
        let block = build_block(BlockFormat::Image, &[9u8; 1000], "f");
        let env = seal(&block, "pw").unwrap();
        let png = png_of(env[..200].to_vec());
        let err = unpack_from_image(&png, Some("pw")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Truncated);
    }

    #[test]
    fn unsupported_version() {
        let mut block = build_block(BlockFormat::Image, b"data", "f");
        block[4..8].copy_from_slice(&5u32.to_be_bytes());
        let err = unpack_from_image(&png_of(block), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedVersion);
    }

    #[test]
    fn foreign_png_is_format_mismatch() {
        let png = png_of(vec![0x42; 300]);
        let err = unpack_from_image(&png, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FormatMismatch);
    }

    #[test]
    fn non_png_is_format_mismatch() {
        for input in [&b""[..], b"not an image at all", b"\xFF\xD8\xFF\xE0 jpeg-ish"] {
            let err = unpack_from_image(input, None).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::FormatMismatch);
        }
    }

    #[test]
    fn telemetry_accounts_for_stream() {
        let enc = pack_to_image(&[1u8; 100], "abc", None).unwrap();
        let c = &enc.telemetry.counters;
        assert_eq!(c.bytes_payload, 100);
        assert_eq!(c.bytes_header, 22 + 3);
        assert_eq!(c.bytes_envelope, 0);
        assert_eq!(
            c.bytes_header + c.bytes_payload + c.bytes_padding,
            enc.total_pixels * 3
        );
        assert_eq!(c.bytes_carrier, enc.png.len() as u64);
        assert!(enc.telemetry.sanity_check());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_roundtrip(
            data in prop::collection::vec(any::<u8>(), 0..4096),
            name in "[a-zA-Z0-9_.\\- ]{0,64}",
        ) {
            let enc = pack_to_image(&data, &name, None).unwrap();
            let dec = unpack_from_image(&enc.png, None).unwrap();
            prop_assert_eq!(dec.data, data);
            prop_assert_eq!(dec.filename, name);
        }

        #[test]
        fn prop_uniform_roundtrip(byte in prop::sample::select(vec![0x00u8, 0xFF]), len in 0usize..3000) {
            let data = vec![byte; len];
            let enc = pack_to_image(&data, "u", None).unwrap();
            prop_assert_eq!(unpack_from_image(&enc.png, None).unwrap().data, data);
        }

        #[test]
        fn prop_any_payload_bit_flip_detected(
            data in prop::collection::vec(any::<u8>(), 1..400),
            pos in any::<prop::sample::Index>(),
            bit in 0u8..8,
        ) {
            let enc = pack_to_image(&data, "p", None).unwrap();
            let mut stream = read_png(&enc.png).unwrap();
            stream[22 + 1 + pos.index(data.len())] ^= 1 << bit;
            let err = unpack_from_image(&repack(&enc.png, &stream), None).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::Corrupted);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(4))]

        #[test]
        fn prop_encrypted_roundtrip(
            data in prop::collection::vec(any::<u8>(), 0..1024),
            password in "[a-zA-Z0-9]{1,16}",
        ) {
            let enc = pack_to_image(&data, "s.bin", Some(&password)).unwrap();
            let dec = unpack_from_image(&enc.png, Some(&password)).unwrap();
            prop_assert_eq!(dec.data, data);
        }
    }
}
