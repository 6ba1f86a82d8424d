#![no_main]
use bmpfilters::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let Ok(decoded) = DecodeRequest::new(data)
        .with_permissiveness(BmpPermissiveness::Permissive)
        .decode(enough::Unstoppable)
    else {
        return;
    };

    let Ok(reencoded) = encode_bmp(&decoded, enough::Unstoppable) else {
        return;
    };
    let Ok(decoded2) = decode_bmp(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded, decoded2, "roundtrip pixel mismatch");

    // Filters must not panic on any decodable image
    for t in [
        Transform::Vignette,
        Transform::Clarendon { factor: 0.7 },
        Transform::Rotate { turns: -1 },
        Transform::FiveColor,
    ] {
        let _ = t.apply(&decoded);
    }
});
