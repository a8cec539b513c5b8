use crate::value::Value;

#[test]
fn test_value_from_integers() {
    assert_eq!(Value::from(-5_i8), Value::Int(-5));
    assert_eq!(Value::from(-1000_i16), Value::Int(-1000));
    assert_eq!(Value::from(i64::MIN), Value::Int(i64::MIN));
    assert_eq!(Value::from(200_u8), Value::UInt(200));
    assert_eq!(Value::from(u64::MAX), Value::UInt(u64::MAX));
}

#[test]
fn test_value_from_strings_and_bytes() {
    assert_eq!(Value::from("abc"), Value::String("abc".to_string()));
    assert_eq!(Value::from(String::from("x")), Value::String("x".to_string()));
    assert_eq!(Value::from(&[1_u8, 2][..]), Value::Bytes(vec![1, 2]));
    assert_eq!(Value::from(vec![3_u8]), Value::Bytes(vec![3]));
}

#[test]
fn test_value_from_option() {
    assert_eq!(Value::from(None::<u32>), Value::Null);
    assert_eq!(Value::from(Some(7_u32)), Value::UInt(7));
    assert!(Value::from(None::<&str>).is_null());
}

#[test]
fn test_value_accessors() {
    let s = Value::from("hi");
    assert_eq!(s.as_str(), Some("hi"));
    assert_eq!(s.as_bytes(), Some(&b"hi"[..]));
    assert_eq!(s.kind(), "String");

    let b = Value::Bytes(vec![0xFF]);
    assert_eq!(b.as_str(), None);
    assert_eq!(b.as_bytes(), Some(&[0xFF][..]));

    assert_eq!(Value::UInt(1).as_bytes(), None);
    assert_eq!(Value::Array(vec![]).kind(), "Array");
}

#[test]
fn test_value_from_uuid() {
    let id = uuid::Uuid::from_u128(0x61f0_c404_5cb3_11e7_907b_a600_6ad3_dba0);
    let value = Value::from(id);
    assert_eq!(value, Value::Uuid(id));
    assert_eq!(value.kind(), "Uuid");
    assert_eq!(value.as_bytes(), None);
    assert_eq!(<uuid::Uuid as crate::row::FromValue>::from_value(&value).unwrap(), id);
}
