use bmpfx::*;

/// The 2x2 sample: top row red, green; bottom row blue, white.
fn sample_2x2() -> Grid {
    Grid::from_rows(vec![
        vec![Pixel::new(255, 0, 0), Pixel::new(0, 255, 0)],
        vec![Pixel::new(0, 0, 255), Pixel::new(255, 255, 255)],
    ])
    .unwrap()
}

#[test]
fn bmp_roundtrip_rgb8() {
    let grid = Grid::from_rows(vec![
        vec![
            Pixel::new(255, 0, 0),
            Pixel::new(0, 255, 0),
            Pixel::new(0, 0, 255),
        ],
        vec![
            Pixel::new(128, 128, 128),
            Pixel::new(64, 64, 64),
            Pixel::new(0, 0, 0),
        ],
    ])
    .unwrap();

    let encoded = EncodeRequest::new().encode(&grid, Unstoppable).unwrap();
    assert_eq!(&encoded[0..2], b"BM");

    let decoded = DecodeRequest::new(&encoded).decode(Unstoppable).unwrap();
    assert_eq!(decoded.width(), 3);
    assert_eq!(decoded.height(), 2);
    assert_eq!(decoded, grid);
}

#[test]
fn two_by_two_scenario() {
    let encoded = EncodeRequest::new().encode(&sample_2x2(), Unstoppable).unwrap();

    let info = BmpInfo::from_bytes(&encoded).unwrap();
    assert_eq!(info.file_size, 70);
    assert_eq!(info.pixel_offset, 54);
    assert_eq!((info.width, info.height), (2, 2));
    assert_eq!(info.bits_per_pixel, 24);
    assert_eq!(info.row_padding, 2);

    let decoded = DecodeRequest::new(&encoded).decode(Unstoppable).unwrap();
    assert_eq!(decoded, sample_2x2());

    let gray = Filter::Grayscale.apply(&decoded).unwrap();
    let g = Pixel::new(85, 85, 85);
    assert_eq!(
        gray.to_rows(),
        vec![vec![g, g], vec![g, Pixel::new(255, 255, 255)]]
    );
}

#[test]
fn file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src.bmp");
    let dst = dir.path().join("dst.bmp");

    encode_file(&src, &sample_2x2()).unwrap();
    let first = decode_file(&src).unwrap();
    encode_file(&dst, &first).unwrap();
    let second = decode_file(&dst).unwrap();

    assert_eq!(first, second);
    assert_eq!(std::fs::read(&src).unwrap(), std::fs::read(&dst).unwrap());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = decode_file(dir.path().join("nope.bmp")).unwrap_err();
    assert!(matches!(err, BitmapError::Io { .. }));
}

#[test]
fn unwritable_destination_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let dst = dir.path().join("no-such-dir").join("out.bmp");
    let err = encode_file(&dst, &sample_2x2()).unwrap_err();
    match err {
        BitmapError::Io { path, .. } => assert_eq!(path, dst),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn size_mismatch_rejected() {
    let mut encoded = EncodeRequest::new().encode(&sample_2x2(), Unstoppable).unwrap();
    encoded[2..6].copy_from_slice(&71u32.to_le_bytes());
    encoded.push(0);
    let err = DecodeRequest::new(&encoded).decode(Unstoppable).unwrap_err();
    assert!(matches!(
        err,
        BitmapError::SizeMismatch {
            declared: 71,
            expected: 70
        }
    ));
}

#[test]
fn limits_reject_large() {
    let encoded = EncodeRequest::new().encode(&sample_2x2(), Unstoppable).unwrap();

    let limits = Limits {
        max_pixels: Some(3),
        ..Default::default()
    };

    let result = DecodeRequest::new(&encoded)
        .with_limits(&limits)
        .decode(Unstoppable);
    match result.unwrap_err() {
        BitmapError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let limits = Limits {
        max_memory_bytes: Some(11),
        ..Default::default()
    };
    assert!(
        DecodeRequest::new(&encoded)
            .with_limits(&limits)
            .decode(Unstoppable)
            .is_err()
    );
}

#[test]
fn trailing_bytes_beyond_declared_size_are_ignored() {
    let mut encoded = EncodeRequest::new().encode(&sample_2x2(), Unstoppable).unwrap();
    encoded.extend_from_slice(&[0xAA; 5]);
    let decoded = DecodeRequest::new(&encoded).decode(Unstoppable).unwrap();
    assert_eq!(decoded, sample_2x2());
}
