#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the header claims
    let _ = bmpfx::DecodeRequest::new(data).decode(enough::Unstoppable);
    let _ = bmpfx::BmpInfo::from_bytes(data);
});
