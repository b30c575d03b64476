//! The dynamic value type.
//!
//! [`ToonValue`] is the in-memory form of the six-kind value model every
//! encode/decode operation works over: null, bool, integer, float, string,
//! sequence, and ordered mapping. It does not carry extra first-class kinds
//! for dates or arbitrary-precision integers — those are handled once, in
//! the normalizer, by folding host values into `String`/`Integer` before a
//! `ToonValue` is ever constructed (see [`crate::normalize`]).

use crate::map::ToonMap;
use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

/// A TOON value: exactly the six kinds the value model defines.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ToonValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<ToonValue>),
    Object(ToonMap),
}

impl ToonValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ToonValue::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, ToonValue::Bool(_))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, ToonValue::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, ToonValue::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, ToonValue::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, ToonValue::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, ToonValue::Object(_))
    }

    /// A value is primitive when it is not a container (array/object).
    pub fn is_primitive(&self) -> bool {
        !matches!(self, ToonValue::Array(_) | ToonValue::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ToonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ToonValue::Integer(i) => Some(*i),
            ToonValue::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ToonValue::Integer(i) => Some(*i as f64),
            ToonValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ToonValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[ToonValue]> {
        match self {
            ToonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ToonMap> {
        match self {
            ToonValue::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl fmt::Display for ToonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToonValue::Null => write!(f, "null"),
            ToonValue::Bool(b) => write!(f, "{b}"),
            ToonValue::Integer(i) => write!(f, "{i}"),
            ToonValue::Float(x) => write!(f, "{x}"),
            ToonValue::String(s) => write!(f, "{s}"),
            ToonValue::Array(_) => write!(f, "[array]"),
            ToonValue::Object(_) => write!(f, "[object]"),
        }
    }
}

macro_rules! from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for ToonValue {
            fn from(v: $t) -> Self {
                ToonValue::Integer(v as i64)
            }
        })*
    };
}
from_int!(i8, i16, i32, i64, u8, u16, u32, isize);

impl From<f32> for ToonValue {
    fn from(v: f32) -> Self {
        ToonValue::Float(v as f64)
    }
}
impl From<f64> for ToonValue {
    fn from(v: f64) -> Self {
        ToonValue::Float(v)
    }
}
impl From<bool> for ToonValue {
    fn from(v: bool) -> Self {
        ToonValue::Bool(v)
    }
}
impl From<String> for ToonValue {
    fn from(v: String) -> Self {
        ToonValue::String(v)
    }
}
impl From<&str> for ToonValue {
    fn from(v: &str) -> Self {
        ToonValue::String(v.to_string())
    }
}
impl<T: Into<ToonValue>> From<Vec<T>> for ToonValue {
    fn from(v: Vec<T>) -> Self {
        ToonValue::Array(v.into_iter().map(Into::into).collect())
    }
}
impl From<ToonMap> for ToonValue {
    fn from(v: ToonMap) -> Self {
        ToonValue::Object(v)
    }
}
impl<T: Into<ToonValue>> From<Option<T>> for ToonValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => ToonValue::Null,
        }
    }
}

impl TryFrom<ToonValue> for i64 {
    type Error = crate::Error;
    fn try_from(v: ToonValue) -> Result<Self, Self::Error> {
        v.as_i64()
            .ok_or_else(|| crate::Error::unsupported_type("expected integer"))
    }
}
impl TryFrom<ToonValue> for f64 {
    type Error = crate::Error;
    fn try_from(v: ToonValue) -> Result<Self, Self::Error> {
        v.as_f64()
            .ok_or_else(|| crate::Error::unsupported_type("expected number"))
    }
}
impl TryFrom<ToonValue> for bool {
    type Error = crate::Error;
    fn try_from(v: ToonValue) -> Result<Self, Self::Error> {
        v.as_bool()
            .ok_or_else(|| crate::Error::unsupported_type("expected bool"))
    }
}
impl TryFrom<ToonValue> for String {
    type Error = crate::Error;
    fn try_from(v: ToonValue) -> Result<Self, Self::Error> {
        match v {
            ToonValue::String(s) => Ok(s),
            _ => Err(crate::Error::unsupported_type("expected string")),
        }
    }
}

impl Serialize for ToonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ToonValue::Null => serializer.serialize_unit(),
            ToonValue::Bool(b) => serializer.serialize_bool(*b),
            ToonValue::Integer(i) => serializer.serialize_i64(*i),
            ToonValue::Float(f) => serializer.serialize_f64(*f),
            ToonValue::String(s) => serializer.serialize_str(s),
            ToonValue::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for item in arr {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ToonValue::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

struct ToonValueVisitor;

impl<'de> Visitor<'de> for ToonValueVisitor {
    type Value = ToonValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a TOON value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E> {
        Ok(ToonValue::Bool(v))
    }
    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ToonValue::Integer(v))
    }
    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ToonValue::Integer(v as i64))
    }
    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E> {
        Ok(ToonValue::Float(v))
    }
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ToonValue::String(v.to_string()))
    }
    fn visit_string<E>(self, v: String) -> Result<Self::Value, E> {
        Ok(ToonValue::String(v))
    }
    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(ToonValue::Null)
    }
    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(ToonValue::Null)
    }
    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }
    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut out = Vec::new();
        while let Some(item) = seq.next_element()? {
            out.push(item);
        }
        Ok(ToonValue::Array(out))
    }
    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut out = ToonMap::new();
        while let Some((k, v)) = map.next_entry::<String, ToonValue>()? {
            out.insert(k, v);
        }
        Ok(ToonValue::Object(out))
    }
}

impl<'de> Deserialize<'de> for ToonValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ToonValueVisitor)
    }
}
