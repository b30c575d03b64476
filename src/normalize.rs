//! Value normalization: folds an arbitrary `ToonValue` tree into the strict
//! six-kind shape the encoder assumes, applying the canonicalization rules
//! every value passes through exactly once, at encode entry.
//!
//! Values built through the `Serializer` already land in the right shape as
//! they're produced (each `serialize_*` call constructs the matching
//! `ToonValue` variant directly) — this pass exists for values assembled by
//! hand (the `toon!` macro, direct `ToonValue` construction, or values handed
//! in through [`crate::to_value`]) where a `Float` might still hold `-0.0`,
//! `NaN`, or an infinity.

use crate::map::ToonMap;
use crate::value::ToonValue;

/// Normalize a value tree in place, applying the encode-time canonicalization
/// rules recursively (pre-order, but a leaf never depends on its ancestors so
/// the order is not observable):
/// - `-0.0` folds to `0`.
/// - Non-finite floats (`NaN`, `+Infinity`, `-Infinity`) fold to `Null`.
/// - Everything else is left as-is; sequences and mappings normalize their
///   children recursively.
pub fn normalize(value: &ToonValue) -> ToonValue {
    match value {
        ToonValue::Float(f) => normalize_float(*f),
        ToonValue::Array(items) => ToonValue::Array(items.iter().map(normalize).collect()),
        ToonValue::Object(map) => {
            let mut out = ToonMap::with_capacity(map.len());
            for (k, v) in map.iter() {
                out.insert(k.clone(), normalize(v));
            }
            ToonValue::Object(out)
        }
        other => other.clone(),
    }
}

fn normalize_float(f: f64) -> ToonValue {
    if !f.is_finite() {
        return ToonValue::Null;
    }
    if f == 0.0 {
        // Canonicalize -0.0 to 0: an Integer, since the format renders both
        // the same way and the value model treats them as indistinguishable.
        return ToonValue::Integer(0);
    }
    ToonValue::Float(f)
}

// Type guards mirroring the shape classifier's vocabulary (§4.5): primitive,
// array-of-primitives, array-of-arrays, array-of-objects.

pub fn is_primitive(value: &ToonValue) -> bool {
    value.is_primitive()
}

pub fn is_array_of_primitives(items: &[ToonValue]) -> bool {
    items.iter().all(is_primitive)
}

pub fn is_array_of_arrays(items: &[ToonValue]) -> bool {
    items.iter().all(|v| matches!(v, ToonValue::Array(_)))
}

pub fn is_array_of_objects(items: &[ToonValue]) -> bool {
    items.iter().all(|v| matches!(v, ToonValue::Object(_)))
}
