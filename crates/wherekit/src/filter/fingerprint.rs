use crate::{filter::FiltersByColumn, value::Value};
use sha2::{Digest, Sha256};

const FILTERS_TAG: u8 = 0x31;
const FINGERPRINT_VERSION: u8 = 1;

/// Hash filter structure into one fingerprint stream.
pub(crate) fn hash_filters(hasher: &mut Sha256, filters: &FiltersByColumn) {
    write_tag(hasher, FINGERPRINT_VERSION);
    write_tag(hasher, FILTERS_TAG);
    write_len_u32(hasher, filters.len());

    for (column, record) in filters {
        write_str(hasher, column);
        write_len_u32(hasher, record.len());
        for (op, value) in record {
            write_tag(hasher, op.tag());
            write_value(hasher, value);
        }
    }
}

///
/// Encode one value as tag + payload.
///

fn write_value(hasher: &mut Sha256, value: &Value) {
    write_tag(hasher, value.tag().to_u8());

    match value {
        Value::Bool(v) => write_tag(hasher, u8::from(*v)),
        Value::Float64(v) => hasher.update(v.to_be_bytes()),
        Value::Int(v) => hasher.update(v.to_be_bytes()),
        Value::List(items) => {
            write_len_u32(hasher, items.len());
            for item in items {
                write_value(hasher, item);
            }
        }
        Value::Null => {}
        Value::Text(v) => write_str(hasher, v),
        Value::Uint(v) => hasher.update(v.to_be_bytes()),
    }
}

///
/// Encode one string with length prefix.
///

fn write_str(hasher: &mut Sha256, value: &str) {
    write_len_u32(hasher, value.len());
    hasher.update(value.as_bytes());
}

/// Encode a platform-sized length as u32 with deterministic saturation.
fn write_len_u32(hasher: &mut Sha256, len: usize) {
    let len = u32::try_from(len).unwrap_or(u32::MAX);
    hasher.update(len.to_be_bytes());
}

fn write_tag(hasher: &mut Sha256, tag: u8) {
    hasher.update([tag]);
}

///
/// TESTS
///
