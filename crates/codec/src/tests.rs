use super::*;

fn roundtrip(value: Value) {
    let bytes = encode(&value);
    match decode_one(&bytes).unwrap() {
        Decoded::Term(decoded, rest) => {
            assert_eq!(decoded, value);
            assert!(rest.is_empty(), "round-trip left unconsumed bytes");
        }
        other => panic!("expected a full term, got {:?}", other),
    }
}

// -------------------- Round-trips --------------------

#[test]
fn int_roundtrip() {
    roundtrip(Value::Int(0));
    roundtrip(Value::Int(42));
    roundtrip(Value::Int(-42));
    roundtrip(Value::Int(i64::MAX));
    roundtrip(Value::Int(i64::MIN));
}

#[test]
fn float_roundtrip() {
    roundtrip(Value::Float(0.0));
    roundtrip(Value::Float(1.5));
    roundtrip(Value::Float(-1.5));
    roundtrip(Value::Float(f64::MAX));
    roundtrip(Value::Float(f64::MIN));
    roundtrip(Value::Float(f64::MIN_POSITIVE));
}

#[test]
fn symbol_roundtrip() {
    roundtrip(Value::symbol("ok"));
    roundtrip(Value::symbol("a_longer_symbol_name"));
}

#[test]
fn bytes_roundtrip() {
    roundtrip(Value::Bytes(b"hello".to_vec()));
    roundtrip(Value::Bytes(Vec::new()));
    roundtrip(Value::Bytes(vec![0x00, 0xff, 0x80, 0x01]));
}

// -------------------- Exact wire bytes --------------------

#[test]
fn string_wire_format() {
    // "hello" frames as tag 's', u32 BE length 5, then the payload.
    let bytes = encode(&Value::from("hello"));
    assert_eq!(bytes, b"s\x00\x00\x00\x05hello");
}

#[test]
fn int_wire_format() {
    let bytes = encode(&Value::Int(1));
    assert_eq!(bytes, b"i\x00\x00\x00\x00\x00\x00\x00\x01");
}

#[test]
fn symbol_wire_format() {
    let bytes = encode(&Value::symbol("ok"));
    assert_eq!(bytes, b"a\x00\x02ok");
}

#[test]
fn float_frame_is_nine_bytes() {
    let bytes = encode(&Value::Float(3.25));
    assert_eq!(bytes.len(), 9);
    assert_eq!(bytes[0], TAG_FLOAT);
}

// -------------------- Float byte ordering --------------------

#[test]
fn float_encoding_preserves_order() {
    let sorted = [
        -1.0e300, -2.5, -1.0, -0.5, -f64::MIN_POSITIVE, 0.0, f64::MIN_POSITIVE, 0.5, 1.0, 2.5,
        1.0e300,
    ];
    for pair in sorted.windows(2) {
        let a = encode(&Value::Float(pair[0]));
        let b = encode(&Value::Float(pair[1]));
        assert!(
            a < b,
            "{} should encode below {}: {:02x?} vs {:02x?}",
            pair[0],
            pair[1],
            a,
            b
        );
    }
}

// -------------------- decode_many --------------------

#[test]
fn decode_many_concatenated_frames() {
    let values = vec![
        Value::Int(7),
        Value::Float(-2.5),
        Value::symbol("name"),
        Value::from("world"),
    ];
    let mut bytes = Vec::new();
    for v in &values {
        bytes.extend_from_slice(&encode(v));
    }

    let (decoded, rest) = decode_many(&bytes).unwrap();
    assert_eq!(decoded, values);
    assert!(rest.is_empty());
}

#[test]
fn decode_many_empty_input() {
    let (decoded, rest) = decode_many(b"").unwrap();
    assert!(decoded.is_empty());
    assert!(rest.is_empty());
}

#[test]
fn decode_many_returns_trailing_partial() {
    let full = encode(&Value::from("hello"));
    let partial = &encode(&Value::from("world"))[..4];

    let mut bytes = full.clone();
    bytes.extend_from_slice(partial);

    let (decoded, rest) = decode_many(&bytes).unwrap();
    assert_eq!(decoded, vec![Value::from("hello")]);
    assert_eq!(rest, partial);
}

// -------------------- Partial resumption --------------------

#[test]
fn every_split_of_a_frame_resumes_cleanly() {
    let values = [
        Value::Int(123_456),
        Value::Float(9.75),
        Value::symbol("resume"),
        Value::from("split me anywhere"),
    ];
    for value in &values {
        let full = encode(value);
        for split in 0..full.len() {
            let prefix = &full[..split];
            let (decoded, rest) = decode_many(prefix).unwrap();
            assert!(decoded.is_empty(), "split {} decoded early", split);
            assert_eq!(rest, prefix, "split {} consumed bytes", split);

            // Concatenate the tail and the decode completes.
            let mut resumed = rest.to_vec();
            resumed.extend_from_slice(&full[split..]);
            let (decoded, rest) = decode_many(&resumed).unwrap();
            assert_eq!(decoded, vec![value.clone()]);
            assert!(rest.is_empty());
        }
    }
}

#[test]
fn lone_tag_byte_is_partial() {
    assert_eq!(decode_one(b"i").unwrap(), Decoded::Partial);
    assert_eq!(decode_one(b"f").unwrap(), Decoded::Partial);
    assert_eq!(decode_one(b"a").unwrap(), Decoded::Partial);
    assert_eq!(decode_one(b"s").unwrap(), Decoded::Partial);
}

#[test]
fn empty_input_is_done() {
    assert_eq!(decode_one(b"").unwrap(), Decoded::Done);
}

// -------------------- Error paths --------------------

#[test]
fn unknown_tag_is_rejected() {
    let err = decode_one(b"z1234").unwrap_err();
    assert_eq!(err, CodecError::UnknownTag(b'z'));
}

#[test]
fn unknown_symbol_is_rejected() {
    // Never interned anywhere in this crate's tests.
    let name = b"never_interned_symbol_0x9c";
    let mut bytes = vec![TAG_SYMBOL];
    bytes.extend_from_slice(&(name.len() as u16).to_be_bytes());
    bytes.extend_from_slice(name);

    let err = decode_one(&bytes).unwrap_err();
    assert_eq!(
        err,
        CodecError::SymbolNotInterned("never_interned_symbol_0x9c".to_string())
    );
}

#[test]
fn decoding_does_not_intern() {
    let name = b"still_not_interned_0x3f";
    let mut bytes = vec![TAG_SYMBOL];
    bytes.extend_from_slice(&(name.len() as u16).to_be_bytes());
    bytes.extend_from_slice(name);

    assert!(decode_one(&bytes).is_err());
    assert!(!is_interned("still_not_interned_0x3f"));
    // A second attempt fails identically: the table did not grow.
    assert!(decode_one(&bytes).is_err());
}

#[test]
fn nan_payload_is_rejected() {
    // Ordered bytes that invert to the canonical NaN bit pattern.
    let ordered = (f64::NAN.to_bits() ^ (1 << 63)).to_be_bytes();
    let mut bytes = vec![TAG_FLOAT];
    bytes.extend_from_slice(&ordered);

    let err = decode_one(&bytes).unwrap_err();
    assert_eq!(err, CodecError::InvalidFloatEncoding(ordered));
}

#[test]
fn infinity_payload_is_rejected() {
    let ordered = (f64::INFINITY.to_bits() ^ (1 << 63)).to_be_bytes();
    let mut bytes = vec![TAG_FLOAT];
    bytes.extend_from_slice(&ordered);

    assert!(matches!(
        decode_one(&bytes),
        Err(CodecError::InvalidFloatEncoding(_))
    ));
}

#[test]
fn decode_many_propagates_errors() {
    let mut bytes = encode(&Value::Int(1));
    bytes.push(b'q');
    let err = decode_many(&bytes).unwrap_err();
    assert_eq!(err, CodecError::UnknownTag(b'q'));
}

// -------------------- Symbol table --------------------

#[test]
fn symbol_constructor_interns() {
    assert!(!is_interned("constructor_interns_me"));
    let _v = Value::symbol("constructor_interns_me");
    assert!(is_interned("constructor_interns_me"));
}

#[test]
fn intern_is_idempotent() {
    intern("twice");
    intern("twice");
    assert!(is_interned("twice"));
}
