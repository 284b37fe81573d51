#![no_main]
use libfuzzer_sys::fuzz_target;
use sniff_fonts::{detect, Capability, FontData, FontFormat};

fuzz_target!(|data: &[u8]| {
    let format = sniff_fonts::identify_or_unknown(data);
    assert_ne!(format, FontFormat::DFont);

    // a failed detector must leave the cursor where it started
    for capability in [Capability::Forward, Capability::RandomAccess] {
        for (name, detector) in detect::DETECTORS {
            let mut cursor = FontData::new(data).cursor_with(capability);
            if detector(&mut cursor).is_err() {
                assert_eq!(cursor.position(), 0, "{name} moved the cursor");
            }
        }
    }
});
