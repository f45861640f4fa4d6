use crate::compat::{String, ToString, Vec};

/// A value supplied for a query key: a single scalar, or a sequence that
/// expands into one pair per element.
///
/// Scalars convert the way they print: booleans become `true`/`false`,
/// numbers their decimal form, and `None` the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    One(String),
    Many(Vec<String>),
}

impl ParamValue {
    pub(crate) fn into_strings(self) -> Vec<String> {
        match self {
            Self::One(value) => Vec::from([value]),
            Self::Many(values) => values,
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::One(value.clone())
    }
}

impl From<char> for ParamValue {
    fn from(value: char) -> Self {
        Self::One(value.to_string())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::One(if value { "true" } else { "false" }.to_string())
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::One(value.to_string())
                }
            }
        )*
    };
}

impl_from_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(|| Self::One(String::new()), Into::into)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        Self::Many(
            values
                .into_iter()
                .flat_map(|value| value.into().into_strings())
                .collect(),
        )
    }
}

impl<T: Into<ParamValue>, const N: usize> From<[T; N]> for ParamValue {
    fn from(values: [T; N]) -> Self {
        Self::Many(
            values
                .into_iter()
                .flat_map(|value| value.into().into_strings())
                .collect(),
        )
    }
}

impl<T: Into<ParamValue> + Clone> From<&[T]> for ParamValue {
    fn from(values: &[T]) -> Self {
        Self::Many(
            values
                .iter()
                .cloned()
                .flat_map(|value| value.into().into_strings())
                .collect(),
        )
    }
}
