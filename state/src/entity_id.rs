//! Provides the listing identifier shared by favorites, hover and highlight state.

use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

use serde::de;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum IdForm {
    Number,
    #[default]
    Text,
}

/// Identifies a listing.
///
/// Listings arrive from collaborators with either numeric or string ids, so
/// identity is defined by the string form: `EntityId::from(42)` and
/// `EntityId::from("42")` are equal and hash identically. The original form
/// is remembered only so the id serializes back the way it came in.
#[derive(Debug, Clone)]
pub struct EntityId {
    repr: String,
    form: IdForm,
}

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.repr
    }

    /// Returns `true` if the id was created from a number.
    pub fn is_numeric(&self) -> bool {
        self.form == IdForm::Number
    }

    fn number(repr: String) -> Self {
        Self {
            repr,
            form: IdForm::Number,
        }
    }

    fn text(repr: String) -> Self {
        Self {
            repr,
            form: IdForm::Text,
        }
    }
}

impl PartialEq for EntityId {
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}

impl Eq for EntityId {}

impl Hash for EntityId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.repr.hash(state);
    }
}

impl PartialOrd for EntityId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EntityId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.repr.cmp(&other.repr)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::text(value.to_owned())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<&String> for EntityId {
    fn from(value: &String) -> Self {
        Self::text(value.clone())
    }
}

impl From<&EntityId> for EntityId {
    fn from(value: &EntityId) -> Self {
        value.clone()
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for EntityId {
                fn from(value: $ty) -> Self {
                    Self::number(value.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(u32, u64, usize, i32, i64);

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_numeric() {
            if let Ok(n) = self.repr.parse::<i64>() {
                return serializer.serialize_i64(n);
            }
            if let Ok(n) = self.repr.parse::<u64>() {
                return serializer.serialize_u64(n);
            }
            if let Ok(n) = self.repr.parse::<f64>() {
                return serializer.serialize_f64(n);
            }
        }
        serializer.serialize_str(&self.repr)
    }
}

struct EntityIdVisitor;

impl de::Visitor<'_> for EntityIdVisitor {
    type Value = EntityId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or numeric listing id")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(EntityId::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(EntityId::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(EntityId::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(EntityId::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if !v.is_finite() {
            return Err(E::invalid_value(de::Unexpected::Float(v), &self));
        }
        // `2.0` stringifies as "2", matching the integer form.
        Ok(EntityId::number(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EntityIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn numeric_and_string_forms_are_identical() {
        assert_eq!(EntityId::from(42), EntityId::from("42"));
        let set: HashSet<EntityId> = [EntityId::from(7u64), EntityId::from("7")].into();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn serializes_back_in_original_form() {
        let ids = vec![EntityId::from(1), EntityId::from("villa-9")];
        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"[1,"villa-9"]"#);
    }

    #[test]
    fn numeric_looking_text_stays_text() {
        let json = serde_json::to_string(&EntityId::from("12")).unwrap();
        assert_eq!(json, r#""12""#);
    }

    #[test]
    fn deserializes_mixed_forms() {
        let ids: Vec<EntityId> = serde_json::from_str(r#"[3, "3", 4.0, "a"]"#).unwrap();
        assert_eq!(ids[0], ids[1]);
        assert!(ids[0].is_numeric());
        assert!(!ids[1].is_numeric());
        assert_eq!(ids[2].as_str(), "4");
        assert_eq!(ids[3].as_str(), "a");
    }

    #[test]
    fn rejects_non_scalar_ids() {
        assert!(serde_json::from_str::<EntityId>("true").is_err());
        assert!(serde_json::from_str::<EntityId>("null").is_err());
        assert!(serde_json::from_str::<EntityId>(r#"{"id":1}"#).is_err());
    }
}
