//! Property tests for absolute and cursor round-trips.
//!
//! Usage:
//!   cargo test --test roundtrip_props

use proptest::prelude::*;
use wirebuf::ByteBuffer;

const CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Field {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Bytes(Vec<u8>),
}

impl Field {
    fn width(&self) -> usize {
        match self {
            Field::I8(_) | Field::U8(_) => 1,
            Field::I16(_) | Field::U16(_) => 2,
            Field::I32(_) | Field::U32(_) => 4,
            Field::I64(_) | Field::U64(_) => 8,
            Field::Bytes(b) => b.len(),
        }
    }

    fn write(&self, buf: &mut ByteBuffer) {
        match self {
            Field::I8(v) => buf.write_i8(*v),
            Field::I16(v) => buf.write_i16(*v),
            Field::I32(v) => buf.write_i32(*v),
            Field::I64(v) => buf.write_i64(*v),
            Field::U8(v) => buf.write_u8(*v),
            Field::U16(v) => buf.write_u16(*v),
            Field::U32(v) => buf.write_u32(*v),
            Field::U64(v) => buf.write_u64(*v),
            Field::Bytes(b) => buf.write_bytes(b, b.len()),
        }
    }

    fn read_back(&self, buf: &mut ByteBuffer) -> Field {
        match self {
            Field::I8(_) => Field::I8(buf.read_i8()),
            Field::I16(_) => Field::I16(buf.read_i16()),
            Field::I32(_) => Field::I32(buf.read_i32()),
            Field::I64(_) => Field::I64(buf.read_i64()),
            Field::U8(_) => Field::U8(buf.read_u8()),
            Field::U16(_) => Field::U16(buf.read_u16()),
            Field::U32(_) => Field::U32(buf.read_u32()),
            Field::U64(_) => Field::U64(buf.read_u64()),
            Field::Bytes(b) => {
                let mut out = vec![0u8; b.len()];
                buf.read_bytes(&mut out, b.len());
                Field::Bytes(out)
            }
        }
    }
}

fn field() -> impl Strategy<Value = Field> {
    prop_oneof![
        any::<i8>().prop_map(Field::I8),
        any::<i16>().prop_map(Field::I16),
        any::<i32>().prop_map(Field::I32),
        any::<i64>().prop_map(Field::I64),
        any::<u8>().prop_map(Field::U8),
        any::<u16>().prop_map(Field::U16),
        any::<u32>().prop_map(Field::U32),
        any::<u64>().prop_map(Field::U64),
        proptest::collection::vec(any::<u8>(), 0..8).prop_map(Field::Bytes),
    ]
}

proptest! {
    #[test]
    fn absolute_signed_roundtrip(
        offset in 0usize..=(CAPACITY - 8),
        a in any::<i8>(),
        b in any::<i16>(),
        c in any::<i32>(),
        d in any::<i64>(),
    ) {
        let mut buf = ByteBuffer::new(CAPACITY).unwrap();
        buf.put_i8(offset, a);
        prop_assert_eq!(buf.get_i8(offset), a);
        buf.put_i16(offset, b);
        prop_assert_eq!(buf.get_i16(offset), b);
        buf.put_i32(offset, c);
        prop_assert_eq!(buf.get_i32(offset), c);
        buf.put_i64(offset, d);
        prop_assert_eq!(buf.get_i64(offset), d);
        prop_assert_eq!(buf.offset(), 0);
    }

    #[test]
    fn absolute_unsigned_roundtrip(
        offset in 0usize..=(CAPACITY - 8),
        a in any::<u8>(),
        b in any::<u16>(),
        c in any::<u32>(),
        d in any::<u64>(),
    ) {
        let mut buf = ByteBuffer::new(CAPACITY).unwrap();
        buf.put_u8(offset, a);
        prop_assert_eq!(buf.get_u8(offset), a);
        buf.put_u16(offset, b);
        prop_assert_eq!(buf.get_u16(offset), b);
        buf.put_u32(offset, c);
        prop_assert_eq!(buf.get_u32(offset), c);
        buf.put_u64(offset, d);
        prop_assert_eq!(buf.get_u64(offset), d);
    }

    #[test]
    fn encoding_matches_to_be_bytes(value in any::<i64>(), offset in 0usize..=(CAPACITY - 8)) {
        let mut buf = ByteBuffer::new(CAPACITY).unwrap();
        buf.put_i64(offset, value);
        let mut out = [0u8; 8];
        buf.get_bytes(offset, &mut out, 8);
        prop_assert_eq!(out, value.to_be_bytes());

        buf.put_i32(offset, value as i32);
        let mut out = [0u8; 4];
        buf.get_bytes(offset, &mut out, 4);
        prop_assert_eq!(out, (value as i32).to_be_bytes());
    }

    #[test]
    fn cursor_sequence_roundtrip(fields in proptest::collection::vec(field(), 0..16)) {
        let total: usize = fields.iter().map(Field::width).sum();
        let mut buf = ByteBuffer::new(total.max(1)).unwrap();

        for f in &fields {
            f.write(&mut buf);
        }
        prop_assert_eq!(buf.offset(), total);

        buf.flip();
        prop_assert_eq!(buf.limit(), total);
        prop_assert_eq!(buf.offset(), 0);

        for f in &fields {
            let got = f.read_back(&mut buf);
            prop_assert_eq!(&got, f);
        }
        prop_assert_eq!(buf.offset(), total);
        prop_assert!(!buf.has_remaining());
    }
}
