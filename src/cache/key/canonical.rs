use {
    serde_json::{Map, Value},
    std::slice,
};

/// Separator between canonical entries.
pub const CANONICAL_SEPARATOR: &str = "|";

/// Canonical string for structured parameters.
///
/// Leaves are flattened into `path=value` entries, where the path is dot-joined from the root
/// (array elements are keyed by index). The entries are sorted and joined with
/// [CANONICAL_SEPARATOR], so the result does not depend on key order.
///
/// Values that differ only in type but stringify identically (`1` and `"1"`) produce the same
/// entry.
pub fn canonicalize(parameters: &Map<String, Value>) -> String {
    let mut entries = canonical_entries(parameters);
    entries.sort_unstable();
    entries.join(CANONICAL_SEPARATOR)
}

/// Unsorted `path=value` entries for all leaves.
///
/// Walks with an explicit stack, so depth is bounded only by memory.
pub fn canonical_entries(parameters: &Map<String, Value>) -> Vec<String> {
    let mut entries = Vec::new();
    let mut stack = vec![(String::default(), Branch::Object(parameters.iter()))];

    while let Some((path, branch)) = stack.last_mut() {
        let (key, value) = match branch {
            Branch::Object(iterator) => match iterator.next() {
                Some((key, value)) => (key.clone(), value),
                None => {
                    stack.pop();
                    continue;
                }
            },

            Branch::Array(iterator) => match iterator.next() {
                Some((index, value)) => (index.to_string(), value),
                None => {
                    stack.pop();
                    continue;
                }
            },
        };

        let path = format!("{}{}", path, key);

        match value {
            Value::Object(object) => stack.push((path + ".", Branch::Object(object.iter()))),
            Value::Array(array) => {
                stack.push((path + ".", Branch::Array(array.iter().enumerate())))
            }
            leaf => entries.push(format!("{}={}", path, stringify(leaf))),
        }
    }

    entries
}

/// Textual form of a leaf value.
///
/// Strings are raw (unquoted). Floats are written as in ECMAScript, see [stringify_float].
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(boolean) => boolean.to_string(),
        Value::String(string) => string.clone(),
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                integer.to_string()
            } else if let Some(integer) = number.as_u64() {
                integer.to_string()
            } else {
                number
                    .as_f64()
                    .map(stringify_float)
                    .unwrap_or_else(|| number.to_string())
            }
        }
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// ECMAScript `Number::toString` form of a float.
///
/// Shortest round-trip digits. Plain decimal notation for magnitudes in `[1e-7, 1e21)`, otherwise
/// exponent notation with an explicit sign (`1e+21`, `1.5e-7`). Negative zero is `0` and a
/// fractional part of zero is dropped.
pub fn stringify_float(float: f64) -> String {
    if float == 0.0 {
        return "0".into();
    }

    if !float.is_finite() {
        return if float.is_nan() {
            "NaN".into()
        } else if float.is_sign_negative() {
            "-Infinity".into()
        } else {
            "Infinity".into()
        };
    }

    // LowerExp is shortest round-trip: "-1.2345e-7"
    let scientific = format!("{:e}", float.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or_default();
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let length = digits.len() as i32;
    let point = exponent + 1;

    let mut string = String::with_capacity(digits.len() + 8);
    if float.is_sign_negative() {
        string.push('-');
    }

    if (length..=21).contains(&point) {
        string.push_str(&digits);
        string.push_str(&"0".repeat((point - length) as usize));
    } else if (1..=21).contains(&point) {
        let (whole, fraction) = digits.split_at(point as usize);
        string.push_str(whole);
        string.push('.');
        string.push_str(fraction);
    } else if (-5..=0).contains(&point) {
        string.push_str("0.");
        string.push_str(&"0".repeat(-point as usize));
        string.push_str(&digits);
    } else {
        let (first, rest) = digits.split_at(1);
        string.push_str(first);
        if !rest.is_empty() {
            string.push('.');
            string.push_str(rest);
        }
        string.push('e');
        string.push(if point > 0 { '+' } else { '-' });
        string.push_str(&(point - 1).abs().to_string());
    }

    string
}

enum Branch<'own> {
    Object(serde_json::map::Iter<'own>),
    Array(std::iter::Enumerate<slice::Iter<'own, Value>>),
}
