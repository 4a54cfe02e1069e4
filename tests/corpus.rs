//! Test corpus: roundtrip and layout checks across patterns and sizes.

use bmpfx::*;

fn checkerboard(w: usize, h: usize) -> Grid {
    let mut pixels = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            if (x + y) % 2 == 0 {
                pixels.push(Pixel::new(200, 220, 240));
            } else {
                pixels.push(Pixel::new(10, 40, 70));
            }
        }
    }
    Grid::new(w, h, pixels).unwrap()
}

fn noise_pattern(w: usize, h: usize) -> Grid {
    let mut state: u32 = 0xDEAD_BEEF;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    let pixels = (0..w * h)
        .map(|_| {
            let s = next();
            Pixel::new(s as u8, (s >> 8) as u8, (s >> 16) as u8)
        })
        .collect();
    Grid::new(w, h, pixels).unwrap()
}

fn encode(grid: &Grid) -> Vec<u8> {
    EncodeRequest::new().encode(grid, Unstoppable).unwrap()
}

fn decode(data: &[u8]) -> Grid {
    DecodeRequest::new(data).decode(Unstoppable).unwrap()
}

// ── Roundtrips ───────────────────────────────────────────────────────

#[test]
fn checkerboard_roundtrip() {
    let grid = checkerboard(10, 8);
    assert_eq!(decode(&encode(&grid)), grid);
}

#[test]
fn noise_roundtrip_all_padding_classes() {
    // widths 1..=8 cover padding of 0, 1, 2 and 3 bytes
    for w in 1..=8 {
        for h in [1, 2, 5] {
            let grid = noise_pattern(w, h);
            assert_eq!(decode(&encode(&grid)), grid, "{w}x{h}");
        }
    }
}

#[test]
fn decode_encode_decode_is_stable() {
    let original = encode(&noise_pattern(7, 5));
    let first = decode(&original);
    let second = decode(&encode(&first));
    assert_eq!(first, second);
    assert_eq!(encode(&first), original);
}

#[test]
fn large_image_roundtrip() {
    let grid = noise_pattern(257, 33);
    assert_eq!(decode(&encode(&grid)), grid);
}

// ── Layout ───────────────────────────────────────────────────────────

#[test]
fn scanlines_padded_with_zeros() {
    for w in 1..=9usize {
        let h = 3;
        let grid = Grid::filled(w, h, Pixel::new(0xFF, 0xFF, 0xFF)).unwrap();
        let data = encode(&grid);

        let row_bytes = w * 3;
        let stride = row_bytes.div_ceil(4) * 4;
        assert_eq!(stride % 4, 0);
        assert_eq!(data.len(), 54 + stride * h, "width {w}");
        assert_eq!(
            u32::from_le_bytes(data[2..6].try_into().unwrap()) as usize,
            data.len()
        );
        assert_eq!(
            u32::from_le_bytes(data[34..38].try_into().unwrap()) as usize,
            stride * h
        );

        for row in data[54..].chunks_exact(stride) {
            assert!(row[..row_bytes].iter().all(|&b| b == 0xFF));
            assert!(row[row_bytes..].iter().all(|&b| b == 0), "width {w}");
        }
    }
}

#[test]
fn bottom_row_written_first_in_bgr() {
    let grid = Grid::from_rows(vec![
        vec![Pixel::new(1, 2, 3)],
        vec![Pixel::new(4, 5, 6)],
    ])
    .unwrap();
    let data = encode(&grid);
    // 1 pixel + 1 pad byte per row
    assert_eq!(&data[54..58], &[6, 5, 4, 0]);
    assert_eq!(&data[58..62], &[3, 2, 1, 0]);
}

// ── Hand-built files ────────────────────────────────────────────────

/// Minimal 1x1 24-bit BMP with the given pixel-array offset.
fn handmade_1x1(offset: u32) -> Vec<u8> {
    let size = offset as usize + 4;
    let mut bmp = vec![0u8; size];
    bmp[0] = b'B';
    bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&(size as u32).to_le_bytes());
    bmp[10..14].copy_from_slice(&offset.to_le_bytes());
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes());
    bmp[18..22].copy_from_slice(&1i32.to_le_bytes());
    bmp[22..26].copy_from_slice(&1i32.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes());
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes());
    let px = offset as usize;
    bmp[px..px + 3].copy_from_slice(&[0xff, 0x00, 0x80]);
    bmp
}

#[test]
fn honors_pixel_offset_gap() {
    // some writers leave a gap between the headers and the pixel array
    let bmp = handmade_1x1(70);
    let grid = decode(&bmp);
    assert_eq!(grid.pixels(), &[Pixel::new(0x80, 0x00, 0xff)]);
}

#[test]
fn probe_matches_decode() {
    let bmp = handmade_1x1(54);
    let info = BmpInfo::from_bytes(&bmp).unwrap();
    assert_eq!((info.width, info.height), (1, 1));
    assert_eq!(info.row_padding, 1);
    assert_eq!(info.file_size, 58);
}

#[test]
fn malformed_inputs_never_panic() {
    let good = encode(&noise_pattern(3, 3));
    for len in 0..good.len() {
        let _ = DecodeRequest::new(&good[..len]).decode(Unstoppable);
    }
    let mut flipped = good.clone();
    for i in 0..54 {
        flipped[i] ^= 0xFF;
        let _ = DecodeRequest::new(&flipped).decode(Unstoppable);
        flipped[i] ^= 0xFF;
    }
    assert!(DecodeRequest::new(b"").decode(Unstoppable).is_err());
    assert!(DecodeRequest::new(b"BM\x00\x00").decode(Unstoppable).is_err());
}

#[test]
fn truncated_file_rejected() {
    let good = encode(&noise_pattern(4, 4));
    let err = DecodeRequest::new(&good[..good.len() - 1])
        .decode(Unstoppable)
        .unwrap_err();
    assert!(matches!(err, BitmapError::UnexpectedEof));
}
