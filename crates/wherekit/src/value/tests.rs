use crate::{
    error::FilterError,
    value::{Float64, Value, ValueTag},
};
use serde_json::json;

// ---- helpers -----------------------------------------------------------

fn v_f64(x: f64) -> Value {
    Value::Float64(Float64::try_new(x).expect("finite f64"))
}
fn v_txt(s: &str) -> Value {
    Value::Text(s.to_string())
}

// ---- canonical integers --------------------------------------------------

#[test]
fn unsigned_integers_that_fit_i64_are_int() {
    assert_eq!(Value::from(7u64), Value::Int(7));
    assert_eq!(Value::from(7u32), Value::Int(7));
    assert_eq!(Value::from_u64(i64::MAX as u64), Value::Int(i64::MAX));
    assert_eq!(Value::from_u64(u64::MAX), Value::Uint(u64::MAX));
}

#[test]
fn deserialized_integers_follow_the_same_rule() {
    let decoded: Value = serde_json::from_str("[0, 5, -5, 18446744073709551615]").unwrap();

    assert_eq!(
        decoded,
        Value::List(vec![
            Value::Int(0),
            Value::Int(5),
            Value::Int(-5),
            Value::Uint(u64::MAX),
        ])
    );
}

// ---- floats ----------------------------------------------------------------

#[test]
fn float64_rejects_non_finite_and_canonicalizes_negative_zero() {
    assert!(Float64::try_new(f64::NAN).is_none());
    assert!(Float64::try_new(f64::INFINITY).is_none());
    assert_eq!(Float64::try_new(-0.0).unwrap().get().to_bits(), 0.0f64.to_bits());
    assert_eq!(v_f64(-0.0), v_f64(0.0));
}

#[test]
fn non_finite_float_conversion_is_an_error() {
    let err = Value::try_from(f64::NAN).unwrap_err();

    assert!(matches!(err, FilterError::UnsupportedValue { .. }), "{err:?}");
    assert_eq!(Value::try_from(1.5).unwrap(), v_f64(1.5));
}

// ---- conversions ---------------------------------------------------------

#[test]
fn option_and_vec_conversions() {
    assert_eq!(Value::from(None::<String>), Value::Null);
    assert_eq!(Value::from(Some("a")), v_txt("a"));
    assert_eq!(
        Value::from(vec![Some(1i64), None]),
        Value::List(vec![Value::Int(1), Value::Null])
    );
}

#[test]
fn tags_are_stable_and_distinct() {
    let samples = [
        (Value::Bool(true), ValueTag::Bool, 1),
        (v_f64(1.0), ValueTag::Float64, 2),
        (Value::Int(1), ValueTag::Int, 3),
        (Value::List(vec![]), ValueTag::List, 4),
        (Value::Null, ValueTag::Null, 5),
        (v_txt("x"), ValueTag::Text, 6),
        (Value::Uint(u64::MAX), ValueTag::Uint, 7),
    ];

    for (value, tag, byte) in samples {
        assert_eq!(value.tag(), tag, "{value:?}");
        assert_eq!(tag.to_u8(), byte, "{}", tag.label());
    }
}

// ---- wire ------------------------------------------------------------------

#[test]
fn values_serialize_as_bare_json() {
    let value = Value::List(vec![
        Value::Null,
        Value::Bool(false),
        Value::Int(-3),
        v_f64(2.5),
        v_txt("abc"),
    ]);

    assert_eq!(
        serde_json::to_value(&value).unwrap(),
        json!([null, false, -3, 2.5, "abc"])
    );
}

#[test]
fn objects_are_not_values() {
    assert!(serde_json::from_str::<Value>(r#"{"a":1}"#).is_err());

    let err = Value::try_from(&json!([1, { "a": 1 }])).unwrap_err();
    assert!(matches!(err, FilterError::UnsupportedValue { .. }), "{err:?}");
    assert_eq!(err.class(), "unsupported_value");
}

#[test]
fn json_conversion_agrees_with_deserialize() {
    let json = json!(["a", 1, -1, 1.25, true, null, [2]]);
    let via_serde: Value = serde_json::from_value(json.clone()).unwrap();
    let via_json = Value::try_from(&json).unwrap();

    assert_eq!(via_serde, via_json);
    assert_eq!(serde_json::Value::from(&via_json), json);
}

#[test]
fn accessors() {
    let list = Value::list(["a", "b"]);

    assert!(list.is_list());
    assert_eq!(list.as_list().map(<[Value]>::len), Some(2));
    assert_eq!(v_txt("a").as_text(), Some("a"));
    assert!(Value::Null.is_null());
    assert_eq!(Value::Int(1).as_list(), None);
}
