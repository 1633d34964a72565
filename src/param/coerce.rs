use crate::error::{BindError, BindResult};

/// String to typed-value coercion for a single parameter.
///
/// Coercion is exactly `FromStr` on the raw parameter string: no
/// whitespace trimming and no locale-aware parsing, so `" 1"` and
/// `"1,000"` both fail to coerce to an integer.
pub trait FromParamValue: Sized + Send {
    /// Name of the target type, used in coercion failure messages.
    const TARGET: &'static str;

    fn from_param_value(name: &str, raw: &str) -> BindResult<Self>;
}

impl FromParamValue for String {
    const TARGET: &'static str = "String";

    fn from_param_value(_name: &str, raw: &str) -> BindResult<Self> {
        Ok(raw.to_owned())
    }
}

macro_rules! from_param_via_fromstr {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromParamValue for $ty {
                const TARGET: &'static str = stringify!($ty);

                fn from_param_value(name: &str, raw: &str) -> BindResult<Self> {
                    raw.parse::<$ty>().map_err(|_| BindError::TypeCoercion {
                        name: name.to_string(),
                        value: raw.to_string(),
                        target: Self::TARGET,
                    })
                }
            }
        )*
    };
}

from_param_via_fromstr!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, bool);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_text_coerces_to_integer() {
        let age: i32 = i32::from_param_value("age", "20").unwrap();
        assert_eq!(age, 20);
    }

    #[test]
    fn non_numeric_text_fails_with_type_coercion() {
        let err = i32::from_param_value("age", "abc").unwrap_err();
        match err {
            BindError::TypeCoercion { name, value, target } => {
                assert_eq!(name, "age");
                assert_eq!(value, "abc");
                assert_eq!(target, "i32");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn coercion_does_not_trim() {
        assert!(i32::from_param_value("age", " 1").is_err());
        assert!(i32::from_param_value("age", "1 ").is_err());
    }

    #[test]
    fn coercion_is_locale_independent() {
        assert!(f64::from_param_value("price", "3,14").is_err());
        assert_eq!(f64::from_param_value("price", "3.14").unwrap(), 3.14);
    }

    #[test]
    fn bool_uses_fromstr_semantics() {
        assert!(bool::from_param_value("flag", "true").unwrap());
        assert!(bool::from_param_value("flag", "TRUE").is_err());
    }
}
