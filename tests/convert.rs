use image::{DynamicImage, ImageFormat, Luma, GrayImage, Rgb, RgbImage};
use picascii::{convert, convert_image, CharsetRegistry, ConversionConfig, PicasciiError};
use std::io::Cursor;
use std::path::{Path, PathBuf};

fn photo(w: u32, h: u32) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| {
        let r = (x * 255 / (w - 1)) as u8;
        let g = (y * 255 / (h - 1)) as u8;
        Rgb([r, g, ((x * y) % 256) as u8])
    })
}

fn write_png(dir: &Path, name: &str, img: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    img.save_with_format(&path, ImageFormat::Png).unwrap();
    path
}

#[test]
fn conversion_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "in.png", &photo(120, 90));
    let a = convert(&path, 60, 1.5, "Extreme").unwrap();
    let b = convert(&path, 60, 1.5, "Extreme").unwrap();
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn every_line_has_target_width() {
    let registry = CharsetRegistry::builtin();
    for width in [1, 7, 33, 100] {
        let art = convert_image(
            &DynamicImage::ImageRgb8(photo(200, 100)),
            &registry,
            &ConversionConfig::new(width, 2.0, "Enhanced"),
        )
        .unwrap();
        assert!(art.ends_with('\n'));
        for line in art.lines() {
            assert_eq!(line.chars().count(), width as usize);
        }
    }
}

#[test]
fn aspect_correction_for_wide_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "wide.png", &photo(200, 100));
    let art = convert(&path, 100, 1.0, "Standard").unwrap();
    assert_eq!(art.lines().count(), 28);
}

#[test]
fn black_and_white_hit_ramp_ends() {
    let registry = CharsetRegistry::builtin();
    let config = ConversionConfig::new(4, 1.0, "Standard");

    let black = DynamicImage::ImageLuma8(GrayImage::from_pixel(8, 8, Luma([0])));
    assert_eq!(convert_image(&black, &registry, &config).unwrap(), "@@@@\n@@@@\n");

    let white = DynamicImage::ImageLuma8(GrayImage::from_pixel(8, 8, Luma([255])));
    assert_eq!(convert_image(&white, &registry, &config).unwrap(), "    \n    \n");
}

#[test]
fn brighter_pixels_never_map_denser() {
    // Horizontal gradient: ramp indices must not decrease along a row
    let set: Vec<char> = "0123456789".chars().collect();
    let registry = CharsetRegistry::builtin().with_set("Digits", "0123456789");
    let img = DynamicImage::ImageLuma8(GrayImage::from_fn(256, 8, |x, _| Luma([x as u8])));
    let art = convert_image(&img, &registry, &ConversionConfig::new(64, 1.0, "Digits")).unwrap();
    for line in art.lines() {
        let indices: Vec<usize> = line
            .chars()
            .map(|c| set.iter().position(|&s| s == c).unwrap())
            .collect();
        assert!(indices.windows(2).all(|w| w[0] <= w[1]), "{line}");
    }
}

#[test]
fn bad_inputs_report_their_kind() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "in.png", &photo(40, 40));

    assert!(matches!(
        convert(&path, 0, 1.0, "Standard"),
        Err(PicasciiError::InvalidDimension { .. })
    ));
    assert!(matches!(
        convert(&path, 80, -1.0, "Standard"),
        Err(PicasciiError::InvalidParameter { .. })
    ));

    let registry = CharsetRegistry::builtin().with_set("", "");
    let img = image::open(&path).unwrap();
    assert!(matches!(
        convert_image(&img, &registry, &ConversionConfig::new(80, 1.0, "")),
        Err(PicasciiError::EmptyCharacterSet(_))
    ));
}

#[test]
fn undecodable_source_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not a png at all").unwrap();
    assert!(matches!(
        convert(&path, 80, 1.0, "Best"),
        Err(PicasciiError::ImageDecode(_))
    ));
}

#[test]
fn unknown_charset_uses_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "in.png", &photo(64, 64));
    assert_eq!(
        convert(&path, 32, 1.5, "NoSuchSet").unwrap(),
        convert(&path, 32, 1.5, "Best").unwrap()
    );
}

#[test]
fn text_survives_file_round_trip() {
    let registry = CharsetRegistry::builtin();
    let art = convert_image(
        &DynamicImage::ImageRgb8(photo(90, 60)),
        &registry,
        &ConversionConfig::new(45, 1.5, "Extreme"),
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("art.txt");
    std::fs::write(&out, &art).unwrap();
    let back = std::fs::read_to_string(&out).unwrap();
    assert_eq!(back.lines().collect::<Vec<_>>(), art.lines().collect::<Vec<_>>());
    assert_eq!(back, art);
}

#[test]
fn encoded_bytes_convert_like_files() {
    let img = photo(50, 30);
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();

    let registry = CharsetRegistry::builtin();
    let config = ConversionConfig::new(25, 1.5, "Best");
    let from_bytes = picascii::Converter::new(&registry, config.clone())
        .convert_bytes(buf.get_ref())
        .unwrap();
    let direct = convert_image(&DynamicImage::ImageRgb8(img), &registry, &config).unwrap();
    assert_eq!(from_bytes, direct);
}
