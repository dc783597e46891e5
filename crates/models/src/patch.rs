//! Field-presence aware partial updates.

use serde::{Deserialize, Deserializer};

/// One field of a PATCH body.
///
/// A missing key and an explicit `null` are kept apart so callers can tell
/// them apart, but [`FieldUpdate::into_applied`] currently treats both as
/// "leave unchanged". There is no way to clear an optional field to null over
/// the API; that matches the behavior existing clients rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    Absent,
    Null,
    Set(T),
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::Absent
    }
}

impl<T> FieldUpdate<T> {
    /// The value to write, if any.
    pub fn into_applied(self) -> Option<T> {
        match self {
            FieldUpdate::Set(v) => Some(v),
            FieldUpdate::Absent | FieldUpdate::Null => None,
        }
    }

    pub fn as_set(&self) -> Option<&T> {
        match self {
            FieldUpdate::Set(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldUpdate::Null)
    }
}

// Only reached when the key is present; `#[serde(default)]` covers absence.
impl<'de, T> Deserialize<'de> for FieldUpdate<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => FieldUpdate::Set(v),
            None => FieldUpdate::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default)]
        a: FieldUpdate<i64>,
        #[serde(default)]
        b: FieldUpdate<i64>,
        #[serde(default)]
        c: FieldUpdate<i64>,
    }

    #[test]
    fn distinguishes_absent_null_and_set() {
        let p: Probe = serde_json::from_str(r#"{"b": null, "c": 0}"#).unwrap();
        assert_eq!(p.a, FieldUpdate::Absent);
        assert_eq!(p.b, FieldUpdate::Null);
        assert_eq!(p.c, FieldUpdate::Set(0));
        assert!(p.b.is_null());
    }

    #[test]
    fn only_set_values_are_applied() {
        assert_eq!(FieldUpdate::<i64>::Absent.into_applied(), None);
        assert_eq!(FieldUpdate::<i64>::Null.into_applied(), None);
        assert_eq!(FieldUpdate::Set(3).into_applied(), Some(3));
    }
}
