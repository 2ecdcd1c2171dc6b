use pixel_hide::steganography::{channels_combine, channels_separate};
use pixel_hide::{CodecError, PixelImage};
use rand::RngCore;

/// 一个辅助函数，用于创建一幅带有随机像素的图像
fn random_image(width: usize, height: usize, planes: usize) -> PixelImage {
    let mut data = vec![0u8; width * height * planes];
    rand::rng().fill_bytes(&mut data);
    PixelImage::new(width, height, planes, data).expect("valid geometry")
}

#[test]
fn test_separate_then_combine_restores_rgb() {
    let image = random_image(11, 6, 3);
    let (red, green, blue) = channels_separate(&image).unwrap();

    for channel in [&red, &green, &blue] {
        assert_eq!((channel.width(), channel.height(), channel.planes()), (11, 6, 1));
    }

    let merged = channels_combine(&red, &green, &blue).unwrap();
    assert_eq!(merged, image);
}

#[test]
fn test_separate_reads_each_component_offset() {
    let image = PixelImage::new(2, 1, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    let (red, green, blue) = channels_separate(&image).unwrap();
    assert_eq!(red.as_raw(), &[1, 4]);
    assert_eq!(green.as_raw(), &[2, 5]);
    assert_eq!(blue.as_raw(), &[3, 6]);
}

#[test]
fn test_alpha_is_skipped_for_rgba() {
    let image = random_image(5, 5, 4);
    let (red, green, blue) = channels_separate(&image).unwrap();
    let merged = channels_combine(&red, &green, &blue).unwrap();

    assert_eq!(merged.planes(), 3);
    for (source, target) in image.pixels().zip(merged.pixels()) {
        assert_eq!(&source[..3], target);
    }
}

#[test]
fn test_grayscale_is_copied_to_every_channel() {
    let image = PixelImage::new(2, 1, 2, vec![10, 255, 20, 0]).unwrap();
    let (red, green, blue) = channels_separate(&image).unwrap();
    assert_eq!(red.as_raw(), &[10, 20]);
    assert_eq!(green, red);
    assert_eq!(blue, red);
}

#[test]
fn test_combine_uses_each_source_plane_count() {
    let red = PixelImage::new(1, 1, 1, vec![7]).unwrap();
    let green = PixelImage::new(1, 1, 2, vec![42, 0]).unwrap();
    let blue = PixelImage::new(1, 1, 3, vec![10, 20, 31]).unwrap();
    let merged = channels_combine(&red, &green, &blue).unwrap();
    assert_eq!(merged.as_raw(), &[7, 42, 20]);

    let rgba = PixelImage::new(1, 1, 4, vec![255, 255, 254, 9]).unwrap();
    let merged = channels_combine(&rgba, &rgba, &rgba).unwrap();
    assert_eq!(merged.as_raw(), &[254, 254, 254]);
}

#[test]
fn test_combine_rejects_mismatched_sizes() {
    let red = random_image(4, 4, 1);
    let green = random_image(4, 4, 1);
    let blue = random_image(4, 5, 1);
    assert_eq!(
        channels_combine(&red, &green, &blue),
        Err(CodecError::DimensionMismatch {
            expected_width: 4,
            expected_height: 4,
            actual_width: 4,
            actual_height: 5
        })
    );
}
