use pixel_hide::steganography::{Background, magic_combine, magic_preview};
use pixel_hide::{CodecError, PixelImage};
use rand::RngCore;

/// 随机灰度 RGBA 图像 (R=G=B，完全不透明)
fn random_gray_rgba(width: usize, height: usize) -> PixelImage {
    let mut luma = vec![0u8; width * height];
    rand::rng().fill_bytes(&mut luma);
    let data = luma.iter().flat_map(|&l| [l, l, l, 255]).collect();
    PixelImage::new(width, height, 4, data).expect("valid geometry")
}

#[test]
fn test_output_is_gray_rgba_of_same_size() {
    let first = random_gray_rgba(7, 5);
    let second = random_gray_rgba(7, 5);
    let mixed = magic_combine(&first, &second).unwrap();

    assert_eq!((mixed.width(), mixed.height(), mixed.planes()), (7, 5, 4));
    for pixel in mixed.pixels() {
        assert_eq!(pixel[0], pixel[1]);
        assert_eq!(pixel[1], pixel[2]);
        assert!(pixel[3] >= 1, "opacity never drops to zero");
    }
}

#[test]
fn test_single_pixel_formula() {
    let first = PixelImage::new(1, 1, 4, vec![200, 200, 200, 255]).unwrap();
    let second = PixelImage::new(1, 1, 4, vec![50, 50, 50, 255]).unwrap();

    // a = 100, b = 153, opacity = 202, lightness = 25500 / 202 = 126
    let mixed = magic_combine(&first, &second).unwrap();
    assert_eq!(mixed.as_raw(), &[126, 126, 126, 202]);
}

#[test]
fn test_swapping_inputs_changes_the_result() {
    let first = PixelImage::new(2, 1, 4, vec![10, 10, 10, 255, 240, 240, 240, 255]).unwrap();
    let second = PixelImage::new(2, 1, 4, vec![220, 220, 220, 255, 30, 30, 30, 255]).unwrap();

    let forward = magic_combine(&first, &second).unwrap();
    let backward = magic_combine(&second, &first).unwrap();
    assert_ne!(forward, backward);
}

#[test]
fn test_previews_reveal_each_input() {
    let first = random_gray_rgba(16, 16);
    let second = random_gray_rgba(16, 16);
    let mixed = magic_combine(&first, &second).unwrap();

    let dark = magic_preview(&mixed, Background::Dark).unwrap();
    let light = magic_preview(&mixed, Background::Light).unwrap();
    assert_eq!(dark.planes(), 3);
    assert_eq!(light.planes(), 3);

    for ((a, b), (on_dark, on_light)) in first
        .pixels()
        .zip(second.pixels())
        .zip(dark.pixels().zip(light.pixels()))
    {
        let expected_dark = i32::from(a[0] / 2);
        let expected_light = i32::from(b[0] / 2) + 128;
        assert!((i32::from(on_dark[0]) - expected_dark).abs() <= 1);
        assert!((i32::from(on_light[0]) - expected_light).abs() <= 1);
    }
}

#[test]
fn test_non_rgba_inputs_are_rejected() {
    let rgba = random_gray_rgba(2, 2);
    let rgb = PixelImage::filled(2, 2, 3, 128).unwrap();

    assert_eq!(
        magic_combine(&rgba, &rgb),
        Err(CodecError::UnsupportedPlaneCount {
            planes: 3,
            allowed: &[4]
        })
    );
    assert!(matches!(
        magic_preview(&rgb, Background::Light),
        Err(CodecError::UnsupportedPlaneCount { planes: 3, .. })
    ));
}

#[test]
fn test_size_mismatch_is_rejected() {
    let first = random_gray_rgba(2, 2);
    let second = random_gray_rgba(3, 2);
    assert_eq!(
        magic_combine(&first, &second),
        Err(CodecError::DimensionMismatch {
            expected_width: 2,
            expected_height: 2,
            actual_width: 3,
            actual_height: 2
        })
    );
}
