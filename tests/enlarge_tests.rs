use pixel_hide::steganography::{enlarge_capacity, enlarge_decode, enlarge_encode};
use pixel_hide::{CodecError, PixelImage};
use rand::{Rng, RngCore};

/// 一个辅助函数，用于创建一幅带有随机像素的图像
fn random_image(width: usize, height: usize, planes: usize) -> PixelImage {
    let mut data = vec![0u8; width * height * planes];
    rand::rng().fill_bytes(&mut data);
    PixelImage::new(width, height, planes, data).expect("valid geometry")
}

fn random_ascii(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| char::from(rng.random_range(1u8..128)))
        .collect()
}

#[test]
fn test_round_trip_doubles_dimensions() {
    for planes in 1..=4 {
        let image = random_image(6, 5, planes);
        let capacity = enlarge_capacity(&image);
        for len in [0, 1, 17, capacity - 1, capacity] {
            let text = random_ascii(len);
            let enlarged = enlarge_encode(&image, &text).unwrap();

            assert_eq!((enlarged.width(), enlarged.height()), (12, 10));
            assert_eq!(enlarged.planes(), planes);
            assert_eq!(enlarge_decode(&enlarged).unwrap(), text, "planes {planes}, length {len}");
        }
    }
}

#[test]
fn test_single_pixel_block_layout() {
    // 'A' = 65 = 0b001_000_001
    let image = PixelImage::new(1, 1, 1, vec![0xFF]).unwrap();
    let enlarged = enlarge_encode(&image, "A").unwrap();

    assert_eq!(enlarged.row(0), &[0xFF, 0xF9]);
    assert_eq!(enlarged.row(1), &[0xF8, 0xF9]);
    assert_eq!(enlarge_decode(&enlarged).unwrap(), "A");
}

#[test]
fn test_blocks_keep_the_source_pixel() {
    let image = random_image(4, 3, 3);
    let enlarged = enlarge_encode(&image, "Hello, enlarged world").unwrap();

    for y in 0..image.height() {
        for x in 0..image.width() {
            let source = image.pixel(x, y);
            assert_eq!(enlarged.pixel(2 * x, 2 * y), source, "top-left is an exact copy");

            for (dx, dy) in [(1, 0), (0, 1), (1, 1)] {
                let patched = enlarged.pixel(2 * x + dx, 2 * y + dy);
                for (s, p) in source.iter().zip(patched) {
                    assert_eq!(s & !0x7, p & !0x7);
                }
            }
        }
    }
}

#[test]
fn test_eight_bit_codes_survive() {
    let image = random_image(3, 3, 2);
    let text = "ÿé\u{80}";
    let enlarged = enlarge_encode(&image, text).unwrap();
    assert_eq!(enlarge_decode(&enlarged).unwrap(), text);
}

#[test]
fn test_image_without_text_decodes_to_empty_string() {
    let image = PixelImage::filled(4, 4, 3, 0xF8).unwrap();
    assert_eq!(enlarge_decode(&image).unwrap(), "");
}

#[test]
fn test_odd_dimensions_are_rejected() {
    let image = random_image(3, 4, 3);
    assert_eq!(
        enlarge_decode(&image),
        Err(CodecError::NotEnlarged {
            width: 3,
            height: 4
        })
    );
}

#[test]
fn test_capacity_exceeded() {
    let image = random_image(1, 1, 3);
    assert_eq!(enlarge_capacity(&image), 3);
    assert_eq!(
        enlarge_encode(&image, "abcd"),
        Err(CodecError::CapacityExceeded {
            required: 36,
            available: 27
        })
    );
}

#[test]
fn test_payload_with_terminator_is_rejected() {
    let image = random_image(4, 4, 4);
    assert_eq!(
        enlarge_encode(&image, "\0"),
        Err(CodecError::PayloadContainsTerminator { index: 0 })
    );
}
