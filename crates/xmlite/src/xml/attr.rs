//! Attribute view with best-effort value typing

use std::borrow::Cow;
use std::fmt;

use crate::entity;

/// A `name="value"` pair borrowed from a [`Node`](crate::xml::Node)
///
/// `value` is always the decoded text. The typed accessors never fail:
/// anything that does not convert yields zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attr<'a> {
    name: &'a str,
    value: &'a str,
}

impl<'a> Attr<'a> {
    pub const fn new(name: &'a str, value: &'a str) -> Self {
        Self { name, value }
    }

    pub const fn name(&self) -> &'a str {
        self.name
    }

    pub const fn value(&self) -> &'a str {
        self.value
    }

    /// Value escaped for output
    pub fn entity_value(&self) -> Cow<'a, str> {
        entity::encode(self.value)
    }

    /// Exactly `true`, `false`, `yes` or `no`
    pub fn is_boolean(&self) -> bool {
        matches!(self.value, "true" | "false" | "yes" | "no")
    }

    /// `true` for `true` and `yes`
    pub fn bool_value(&self) -> bool {
        matches!(self.value, "true" | "yes")
    }

    /// Optional sign, then digits not starting with `0`
    pub fn is_decimal(&self) -> bool {
        let digits = unsigned(self.value);
        !digits.is_empty()
            && !digits.starts_with('0')
            && digits.bytes().all(|b| b.is_ascii_digit())
    }

    /// `0` followed by octal digits; a lone `0` counts
    pub fn is_octal(&self) -> bool {
        self.value
            .strip_prefix('0')
            .is_some_and(|rest| rest.bytes().all(|b| matches!(b, b'0'..=b'7')))
    }

    /// `0x` or `0X` followed by at least one hex digit
    pub fn is_hex(&self) -> bool {
        self.value
            .strip_prefix("0x")
            .or_else(|| self.value.strip_prefix("0X"))
            .is_some_and(|rest| {
                !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_hexdigit())
            })
    }

    /// Optional sign, digits with at most one `.`, not starting with `0`.
    /// No exponent form.
    pub fn is_float(&self) -> bool {
        let body = unsigned(self.value);
        !body.starts_with('0')
            && body.bytes().any(|b| b.is_ascii_digit())
            && body.bytes().all(|b| b.is_ascii_digit() || b == b'.')
            && body.bytes().filter(|&b| b == b'.').count() <= 1
    }

    pub fn is_numeric(&self) -> bool {
        self.is_decimal() || self.is_hex() || self.is_octal() || self.is_float()
    }

    pub fn int_value(&self) -> i32 {
        i32::try_from(self.long_value()).unwrap_or(0)
    }

    /// Base 10 for decimal and float values (fraction dropped), then base
    /// 16 for hex, then base 8 for octal
    pub fn long_value(&self) -> i64 {
        let parsed = if self.is_decimal() || self.is_float() {
            let integral = self.value.split('.').next().unwrap_or_default();
            i64::from_str_radix(integral, 10).ok()
        } else if self.is_hex() {
            self.value
                .get(2..)
                .and_then(|hex| i64::from_str_radix(hex, 16).ok())
        } else if self.is_octal() {
            i64::from_str_radix(self.value, 8).ok()
        } else {
            None
        };
        parsed.unwrap_or(0)
    }

    pub fn float_value(&self) -> f32 {
        if self.is_float() {
            self.value.parse().unwrap_or(0.0)
        } else {
            #[allow(clippy::as_conversions)]
            let widened = self.long_value() as f32;
            widened
        }
    }

    pub fn double_value(&self) -> f64 {
        if self.is_float() {
            self.value.parse().unwrap_or(0.0)
        } else {
            #[allow(clippy::as_conversions)]
            let widened = self.long_value() as f64;
            widened
        }
    }
}

impl fmt::Display for Attr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.name, self.entity_value())
    }
}

fn unsigned(value: &str) -> &str {
    value.strip_prefix(['+', '-']).unwrap_or(value)
}
