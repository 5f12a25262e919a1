//! Typed lookups over an [`OptionTable`]
//!
//! Every lookup treats an absent key, a blank key, an absent table and a
//! malformed value the same way: the value is "not found" and the caller's
//! default is used. Nothing here returns an error.

use crate::parser::{OptionTable, normalize_key};

/// Separator between items of a list value. A bare `,` does not split.
pub const LIST_SEPARATOR: &str = ", ";

/// A closed set of option values with a reserved "unset" member.
///
/// The sentinel is the type's [`Default`] and must never be produced by
/// [`OptionEnum::from_option_value`], even when the text names it.
pub trait OptionEnum: Copy + PartialEq + Default + 'static {
    /// Every declared member, sentinel included.
    const MEMBERS: &'static [Self];

    /// Member name as accepted in option files.
    fn name(self) -> &'static str;

    /// Numeric value of the member; the sentinel is 0.
    fn discriminant(self) -> i32;

    /// Parse a raw option value by name (case-insensitive) or by number.
    fn from_option_value(raw: &str) -> Option<Self> {
        let text = raw.trim();
        let member = match text.parse::<i32>() {
            Ok(number) => Self::MEMBERS
                .iter()
                .copied()
                .find(|m| m.discriminant() == number),
            Err(_) => Self::MEMBERS
                .iter()
                .copied()
                .find(|m| m.name().eq_ignore_ascii_case(text)),
        };
        member.filter(|m| *m != Self::default())
    }
}

/// Typed access to raw option values.
///
/// Implemented for [`OptionTable`] and for `Option<&OptionTable>`, so an
/// absent table can be queried the same way and simply finds nothing.
pub trait OptionLookup {
    /// Raw value for a key that has already been upper-cased.
    fn raw_value(&self, normalized_key: &str) -> Option<&str>;

    /// Raw value for `key`, normalizing it first.
    fn try_get_string(&self, key: impl AsRef<str>) -> Option<&str> {
        let key = key.as_ref();
        if key.trim().is_empty() {
            return None;
        }
        self.raw_value(&normalize_key(key))
    }

    /// The raw value for `key`, or `default`.
    fn get_string_or(&self, key: impl AsRef<str>, default: &str) -> String {
        self.try_get_string(key).unwrap_or(default).to_string()
    }

    /// The value for `key` split on `", "`, dropping empty items.
    fn try_get_list(&self, key: impl AsRef<str>) -> Option<Vec<String>> {
        self.try_get_string(key).map(|raw| {
            raw.split(LIST_SEPARATOR)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
    }

    fn get_list_or(&self, key: impl AsRef<str>, default: Vec<String>) -> Vec<String> {
        self.try_get_list(key).unwrap_or(default)
    }

    /// The value for `key` as a base-10 `i32`. Unparsable values are not found.
    fn try_get_int(&self, key: impl AsRef<str>) -> Option<i32> {
        self.try_get_string(key)
            .and_then(|raw| raw.trim().parse::<i32>().ok())
    }

    fn get_int_or(&self, key: impl AsRef<str>, default: i32) -> i32 {
        self.try_get_int(key).unwrap_or(default)
    }

    /// The value for `key` as a member of `E`, never the sentinel.
    fn try_get_enum<E: OptionEnum>(&self, key: impl AsRef<str>) -> Option<E> {
        self.try_get_string(key).and_then(E::from_option_value)
    }

    fn get_enum_or<E: OptionEnum>(&self, key: impl AsRef<str>, default: E) -> E {
        self.try_get_enum(key).unwrap_or(default)
    }
}

impl OptionLookup for OptionTable {
    fn raw_value(&self, normalized_key: &str) -> Option<&str> {
        self.raw(normalized_key)
    }
}

impl OptionLookup for Option<&OptionTable> {
    fn raw_value(&self, normalized_key: &str) -> Option<&str> {
        self.and_then(|table| table.raw(normalized_key))
    }
}
