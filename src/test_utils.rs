use crate::dep5::DebianCopyright;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Compares a parsed document against a golden `.expected.json` file.
pub fn compare_document_with_expected(
    actual: &DebianCopyright,
    expected_path: &Path,
) -> Result<(), String> {
    let expected_content = fs::read_to_string(expected_path)
        .map_err(|e| format!("Failed to read expected file: {}", e))?;

    let expected_json: Value = serde_json::from_str(&expected_content)
        .map_err(|e| format!("Failed to parse expected JSON: {}", e))?;

    let actual_json = serde_json::to_value(actual)
        .map_err(|e| format!("Failed to serialize actual document: {}", e))?;

    compare_json_values(&actual_json, &expected_json, "")
}

fn compare_json_values(actual: &Value, expected: &Value, path: &str) -> Result<(), String> {
    match (actual, expected) {
        (Value::Null, Value::Null) => Ok(()),
        (Value::Bool(a), Value::Bool(e)) if a == e => Ok(()),
        (Value::Number(a), Value::Number(e)) if a == e => Ok(()),
        (Value::String(a), Value::String(e)) if a == e => Ok(()),

        (Value::Array(a), Value::Array(e)) => {
            if a.len() != e.len() {
                return Err(format!(
                    "Array length mismatch at {}: actual={}, expected={}",
                    path,
                    a.len(),
                    e.len()
                ));
            }
            for (i, (actual_item, expected_item)) in a.iter().zip(e.iter()).enumerate() {
                let item_path = format!("{}[{}]", path, i);
                compare_json_values(actual_item, expected_item, &item_path)?;
            }
            Ok(())
        }

        (Value::Object(a), Value::Object(e)) => {
            let all_keys: std::collections::HashSet<_> = a.keys().chain(e.keys()).collect();

            for key in all_keys {
                let field_path = if path.is_empty() {
                    key.to_string()
                } else {
                    format!("{}.{}", path, key)
                };

                match (a.get(key), e.get(key)) {
                    (Some(actual_val), Some(expected_val)) => {
                        compare_json_values(actual_val, expected_val, &field_path)?;
                    }
                    (None, Some(Value::Null)) => continue,
                    (None, Some(_)) => {
                        return Err(format!("Missing field in actual: {}", field_path));
                    }
                    (Some(_), None) => {
                        return Err(format!("Extra field in actual: {}", field_path));
                    }
                    (None, None) => unreachable!(),
                }
            }
            Ok(())
        }

        _ => Err(format!(
            "Value mismatch at {}: actual={:?}, expected={:?}",
            path, actual, expected
        )),
    }
}
