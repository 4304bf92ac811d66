use alloc::string::String;
use core::fmt::{self, Formatter};

use serde_core::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_core::ser::{self, Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{Array, Key, Value};

// -----------------------------------------------------------------------------
// Serialize

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Key::Int(int) => serializer.serialize_i64(*int),
            Key::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for Array {
    /// Lists (keys `0..len` in order) serialize as sequences, everything
    /// else as maps.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(int) => serializer.serialize_i64(*int),
            Value::Float(float) => serializer.serialize_f64(*float),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(array) => array.serialize(serializer),
            Value::Object(object) => Err(<S::Error as ser::Error>::custom(format_args!(
                "object of class `{}` cannot be serialized",
                object.class_name()
            ))),
        }
    }
}

// -----------------------------------------------------------------------------
// Deserialize

struct KeyVisitor;

impl<'de> Visitor<'de> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("an integer or string key")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Key, E> {
        Ok(Key::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Key, E> {
        match i64::try_from(v) {
            Ok(int) => Ok(Key::Int(int)),
            Err(_) => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
        }
    }

    // Map keys in self-describing formats arrive as strings.
    fn visit_str<E: de::Error>(self, v: &str) -> Result<Key, E> {
        Ok(Key::from_token(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Key, E> {
        Ok(Key::from(v))
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(KeyVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a scalar, sequence or map value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        // Out of range integers degrade to floats.
        Ok(i64::try_from(v).map_or(Value::Float(v as f64), Value::Int))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut array = Array::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element::<Value>()? {
            array.push(value);
        }
        Ok(Value::Array(array))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut array = Array::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<Key, Value>()? {
            array.insert(key, value);
        }
        Ok(Value::Array(array))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Array {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match deserializer.deserialize_any(ValueVisitor)? {
            Value::Array(array) => Ok(array),
            other => Err(de::Error::invalid_type(
                de::Unexpected::Other(&other.type_name()),
                &"a sequence or map",
            )),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::{Array, Key, Record, Value};
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn lists_serialize_as_sequences() {
        let value = Value::from(vec![Value::Int(1), Value::from("a"), Value::Null]);
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"[1,"a",null]"#);
    }

    #[test]
    fn maps_keep_insertion_order() {
        let value = Value::from(Array::from([("b", 1), ("a", 2)]));
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"b":1,"a":2}"#);
    }

    #[test]
    fn json_objects_become_arrays() {
        let value: Value = serde_json::from_str(r#"{"user":{"tags":["x"]},"3":true}"#).unwrap();
        let array = value.as_array().unwrap();
        assert!(array.contains_key(&Key::Int(3)));
        let user = array.get_str("user").and_then(Value::as_array).unwrap();
        assert_eq!(user.get_str("tags"), Some(&Value::from(vec!["x"])));
    }

    #[test]
    fn objects_do_not_serialize() {
        let value = Value::from(Record::new("Author").into_ref());
        let err = serde_json::to_string(&value).unwrap_err();
        assert!(err.to_string().contains("Author"));
    }

    #[test]
    fn array_rejects_scalars() {
        assert!(serde_json::from_str::<Array>("1").is_err());
    }
}
