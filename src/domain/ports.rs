/// A raw, untrusted timestamp value that may be coerced to a float.
///
/// Implemented for the primitive numbers, numeric strings and JSON values so
/// that a TAQ field can be handed over as-is, whatever it was decoded as.
pub trait RawNumber {
    fn to_f64(&self) -> Option<f64>;

    /// Text shown in parse errors.
    fn raw_text(&self) -> String;
}

macro_rules! impl_raw_number_for_primitive {
    ($($ty:ty),*) => {
        $(
            impl RawNumber for $ty {
                fn to_f64(&self) -> Option<f64> {
                    Some(*self as f64)
                }

                fn raw_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_raw_number_for_primitive!(f64, f32, i64, i32, u64, u32);

impl RawNumber for str {
    fn to_f64(&self) -> Option<f64> {
        self.trim().parse::<f64>().ok()
    }

    fn raw_text(&self) -> String {
        self.to_string()
    }
}

impl RawNumber for String {
    fn to_f64(&self) -> Option<f64> {
        self.as_str().to_f64()
    }

    fn raw_text(&self) -> String {
        self.clone()
    }
}

impl RawNumber for serde_json::Value {
    fn to_f64(&self) -> Option<f64> {
        match self {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.as_str().to_f64(),
            _ => None,
        }
    }

    fn raw_text(&self) -> String {
        match self {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl<T: RawNumber + ?Sized> RawNumber for &T {
    fn to_f64(&self) -> Option<f64> {
        (**self).to_f64()
    }

    fn raw_text(&self) -> String {
        (**self).raw_text()
    }
}
