#![no_main]
use libfuzzer_sys::fuzz_target;
use bmpfx::*;

fuzz_target!(|data: &[u8]| {
    // First byte picks the filter, the next three its parameters; the rest is the image.
    let [code, a, b, c, rest @ ..] = data else {
        return;
    };
    let limits = Limits {
        max_pixels: Some(1 << 16),
        ..Default::default()
    };
    let Ok(grid) = DecodeRequest::new(rest)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    else {
        return;
    };

    let params = FilterParams {
        scale: Some(f64::from(*a) / 255.0),
        turns: Some(i64::from(*b as i8)),
        x_scale: Some(i64::from(b % 8)),
        y_scale: Some(i64::from(c % 8)),
    };
    let Ok(filter) = Filter::from_menu_code(code % 11, &params) else {
        return;
    };
    let Ok(out) = filter.apply_with_limits(&grid, &limits) else {
        return;
    };

    match filter {
        Filter::Rotate90 | Filter::Rotate { .. } | Filter::Enlarge { .. } => {}
        _ => assert_eq!((out.width(), out.height()), (grid.width(), grid.height())),
    }
});
