#![no_main]
use bmpfilters::{BmpPermissiveness, DecodeRequest};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Every permissiveness level must reject bad input without panicking
    for level in [
        BmpPermissiveness::Strict,
        BmpPermissiveness::Standard,
        BmpPermissiveness::Permissive,
    ] {
        let _ = DecodeRequest::new(data)
            .with_permissiveness(level)
            .decode(enough::Unstoppable);
    }
    let _ = bmpfilters::BmpHeader::parse(data);
});
