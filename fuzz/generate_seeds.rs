#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

/// 24-bit bottom-up BMP with every pixel set to `bgr`.
fn bmp(width: u32, height: u32, bgr: [u8; 3]) -> Vec<u8> {
    let row_bytes = width * 3;
    let stride = row_bytes.div_ceil(4) * 4;
    let size = 54 + stride * height;
    let mut out = vec![0u8; size as usize];
    out[0] = b'B'; out[1] = b'M';
    out[2..6].copy_from_slice(&size.to_le_bytes()); // file size
    out[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    out[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    out[18..22].copy_from_slice(&(width as i32).to_le_bytes());
    out[22..26].copy_from_slice(&(height as i32).to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    out[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    out[34..38].copy_from_slice(&(stride * height).to_le_bytes());
    for row in out[54..].chunks_exact_mut(stride as usize) {
        for px in row[..row_bytes as usize].chunks_exact_mut(3) {
            px.copy_from_slice(&bgr);
        }
    }
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp(1, 1, [0xff, 0x00, 0x00])).unwrap();
    fs::write(format!("{dir}/bmp_2x2.bmp"), bmp(2, 2, [0x80, 0x40, 0x20])).unwrap();
    fs::write(format!("{dir}/bmp_3x1.bmp"), bmp(3, 1, [0x00, 0xff, 0x00])).unwrap();
    fs::write(format!("{dir}/bmp_4x3.bmp"), bmp(4, 3, [0x10, 0x20, 0x30])).unwrap();

    // Declared size one byte off
    let mut wrong_size = bmp(2, 2, [0; 3]);
    wrong_size[2..6].copy_from_slice(&71u32.to_le_bytes());
    fs::write(format!("{dir}/bmp_wrong_size.bin"), wrong_size).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let full = bmp(5, 5, [0x7f; 3]);
    fs::write(format!("{dir}/bmp_truncated.bin"), &full[..full.len() - 7]).unwrap();

    // Filter seeds: selector + 3 parameter bytes + image
    let fdir = "fuzz/corpus/fuzz_filters";
    fs::create_dir_all(fdir).unwrap();
    for code in 1u8..=10 {
        let mut seed = vec![code, 128, 1, 2];
        seed.extend(bmp(3, 2, [0x30, 0x90, 0xe0]));
        fs::write(format!("{fdir}/filter_{code}.bin"), seed).unwrap();
    }

    println!("Generated seed corpus in {dir}/ and {fdir}/");
}
