use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a server-provided scalar as the text a form field would carry.
///
/// Strings pass through, numbers and booleans use their JSON spelling and
/// `null` means "no value".
pub fn opaque_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

pub(crate) fn opaque<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(opaque_text))
}

pub(crate) fn opaque_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opaque(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_opaque_text_scalars() {
        assert_eq!(opaque_text(&json!("abc")), Some("abc".to_string()));
        assert_eq!(opaque_text(&json!(42)), Some("42".to_string()));
        assert_eq!(opaque_text(&json!(1.5)), Some("1.5".to_string()));
        assert_eq!(opaque_text(&json!(true)), Some("true".to_string()));
        assert_eq!(opaque_text(&Value::Null), None);
    }
}
