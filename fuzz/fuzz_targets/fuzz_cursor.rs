#![no_main]
use libfuzzer_sys::{arbitrary, fuzz_target};
use sniff_fonts::{Capability, FontData};

#[derive(Debug, arbitrary::Arbitrary)]
enum Op {
    Advance(i64),
    ReadUint(u8),
    ReadDecimal,
    Expect(Vec<u8>),
}

#[derive(Debug, arbitrary::Arbitrary)]
struct Input {
    data: Vec<u8>,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let data = FontData::new(&input.data);
    let mut cursor = data.cursor_with(Capability::RandomAccess);
    for op in input.ops {
        let before = cursor.position();
        match op {
            Op::Advance(distance) => {
                // a failed move stops at a boundary
                if !cursor.advance_by(distance) {
                    assert!(cursor.position() == 0 || cursor.is_at_end());
                }
            }
            Op::ReadUint(width) => {
                if cursor.read_uint(width as usize).is_err() {
                    assert_eq!(cursor.position(), before);
                }
            }
            Op::ReadDecimal => {
                if cursor.read_decimal().is_err() {
                    assert_eq!(cursor.position(), before);
                }
            }
            Op::Expect(bytes) => {
                if cursor.expect_bytes(&bytes).is_err() {
                    assert_eq!(cursor.position(), before);
                }
            }
        }
        assert!(cursor.position() <= data.len());
    }
});
