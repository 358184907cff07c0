//! Dynamic property values for the generic widget surface.
//!
//! The embedding layer (a scripting engine, typically) reads and writes
//! widget state through string-named properties carrying [`PropertyValue`]s.
//! Type mismatches on the strict properties (`visible`, `mouse_enter`,
//! `mouse_leave`) fail loudly with a [`PropertyError`], since silently
//! ignoring them would hide embedder bugs.

use image::RgbaImage;

use crate::event::Callback;

/// Error raised by the strict generic properties.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PropertyError {
    /// `mouse_enter` / `mouse_leave` were assigned a non-callback value.
    #[error("property `{property}` expects a callback value")]
    NotCallable { property: String },
    /// A property was assigned a value of the wrong type.
    #[error("property `{property}` expects {expected}")]
    TypeMismatch {
        property: String,
        expected: &'static str,
    },
}

// ---------------------------------------------------------------------------
// PropertyValue
// ---------------------------------------------------------------------------

/// A dynamically typed value crossing the embedding boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Callback(Callback),
    Image(RgbaImage),
}

impl PropertyValue {
    /// The value as a bool, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The value as an integer, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The value as a float; integers coerce.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(f) => Some(*f),
            PropertyValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// The value as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The value as a callback handle, if it is one.
    pub fn as_callback(&self) -> Option<&Callback> {
        match self {
            PropertyValue::Callback(cb) => Some(cb),
            _ => None,
        }
    }

    /// The value as an image, if it is one.
    pub fn as_image(&self) -> Option<&RgbaImage> {
        match self {
            PropertyValue::Image(img) => Some(img),
            _ => None,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Int(v)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Float(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::Text(v.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::Text(v)
    }
}

impl From<Callback> for PropertyValue {
    fn from(v: Callback) -> Self {
        PropertyValue::Callback(v)
    }
}

impl From<RgbaImage> for PropertyValue {
    fn from(v: RgbaImage) -> Self {
        PropertyValue::Image(v)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variants() {
        assert_eq!(PropertyValue::Bool(true).as_bool(), Some(true));
        assert_eq!(PropertyValue::Int(7).as_int(), Some(7));
        assert_eq!(PropertyValue::Float(0.5).as_float(), Some(0.5));
        assert_eq!(PropertyValue::from("hi").as_text(), Some("hi"));
        assert_eq!(PropertyValue::Bool(true).as_int(), None);
        assert_eq!(PropertyValue::Text("x".into()).as_bool(), None);
    }

    #[test]
    fn int_coerces_to_float() {
        assert_eq!(PropertyValue::Int(3).as_float(), Some(3.0));
    }

    #[test]
    fn callback_value_round_trips() {
        let cb = Callback::new(|| {});
        let v = PropertyValue::from(cb.clone());
        assert_eq!(v.as_callback(), Some(&cb));
    }

    #[test]
    fn error_messages() {
        let e = PropertyError::NotCallable { property: "mouse_enter".into() };
        assert_eq!(e.to_string(), "property `mouse_enter` expects a callback value");

        let e = PropertyError::TypeMismatch { property: "visible".into(), expected: "a boolean" };
        assert_eq!(e.to_string(), "property `visible` expects a boolean");
    }
}
