use std::path::{Path, PathBuf};

use icopack_core::{convert, ensure_decoder, read_directory, IconError, SizeList};

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("icopack_it_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create test dir");
    dir
}

/// Gradient source so the Lanczos resampling has real detail to work on.
fn write_source(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    let path = dir.join(name);
    img.save(&path).expect("write source image");
    path
}

#[test]
fn end_to_end_jpeg_to_default_sizes() {
    let dir = test_dir("end_to_end");
    let input = write_source(&dir, "icon.jpeg", 512, 512);
    let output = dir.join("app_icon.ico");

    let report = convert(&input, &output, &SizeList::default()).expect("conversion should succeed");
    assert_eq!(report.source_width, 512);
    assert_eq!(report.source_height, 512);
    assert_eq!(report.sizes, vec![16, 32, 48, 256]);
    assert!(output.exists());

    // Our own directory reader sees exactly the requested size set.
    let directory = read_directory(&output).expect("output should parse as ICO");
    assert_eq!(directory.entries.len(), 4);
    assert!(directory.matches_sizes(&[16, 32, 48, 256]));

    // Independent decoder agrees, entry by entry.
    let file = std::fs::File::open(&output).expect("open output");
    let icon_dir = ico::IconDir::read(file).expect("ico crate should read the container");
    assert_eq!(icon_dir.entries().len(), 4);
    let mut decoded_sizes: Vec<u32> = icon_dir.entries().iter().map(|e| e.width()).collect();
    decoded_sizes.sort_unstable();
    assert_eq!(decoded_sizes, vec![16, 32, 48, 256]);
    for entry in icon_dir.entries() {
        assert_eq!(entry.width(), entry.height(), "entries must be square");
        let img = entry.decode().expect("entry pixel data should decode");
        assert_eq!(img.width(), entry.width());
        assert_eq!(img.height(), entry.height());
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn non_square_source_is_distorted_to_exact_squares() {
    let dir = test_dir("distort");
    let input = write_source(&dir, "wide.png", 800, 600);
    let output = dir.join("wide.ico");
    let sizes = SizeList::new(&[16, 48]).unwrap();

    convert(&input, &output, &sizes).expect("conversion should succeed");

    let directory = read_directory(&output).unwrap();
    for entry in &directory.entries {
        assert_eq!(
            entry.width, entry.height,
            "aspect ratio must be discarded, every variant exactly square"
        );
    }
    assert!(directory.matches_sizes(&[16, 48]));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn repeated_runs_produce_dimension_equivalent_output() {
    let dir = test_dir("idempotent");
    let input = write_source(&dir, "icon.png", 128, 128);
    let first = dir.join("first.ico");
    let second = dir.join("second.ico");
    let sizes = SizeList::new(&[16, 32]).unwrap();

    convert(&input, &first, &sizes).unwrap();
    convert(&input, &second, &sizes).unwrap();

    let mut sizes_a = read_directory(&first).unwrap().sizes();
    let mut sizes_b = read_directory(&second).unwrap().sizes();
    sizes_a.sort_unstable();
    sizes_b.sort_unstable();
    assert_eq!(sizes_a, sizes_b);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn size_256_uses_the_zero_dimension_byte_encoding() {
    let dir = test_dir("size_256");
    let input = write_source(&dir, "big.png", 300, 300);
    let output = dir.join("big.ico");
    let sizes = SizeList::new(&[256]).unwrap();

    convert(&input, &output, &sizes).unwrap();

    let directory = read_directory(&output).unwrap();
    assert_eq!(directory.sizes(), vec![256]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_input_creates_no_output() {
    let dir = test_dir("no_input");
    let input = dir.join("icon.jpeg");
    let output = dir.join("app_icon.ico");

    let err = convert(&input, &output, &SizeList::default()).unwrap_err();
    assert!(matches!(err, IconError::InputNotFound(_)));
    assert!(!output.exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn undecodable_input_format_is_rejected_up_front() {
    let dir = test_dir("no_decoder");
    let input = dir.join("icon.txt");
    std::fs::write(&input, b"not an image").unwrap();

    assert!(ensure_decoder(&input).is_err());

    let _ = std::fs::remove_dir_all(&dir);
}
