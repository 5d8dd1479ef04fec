use serde_json::{json, Value};
use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    println!("{}", render_success(output_format, message, data)?);
    Ok(())
}

fn render_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<String> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(Value::Object(extra)), Some(target)) = (data, response.as_object_mut()) {
                target.extend(extra);
            }

            Ok(serde_json::to_string_pretty(&response)?)
        }
        OutputFormat::Text => Ok(format!("✓ {}", message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_output_merges_data() {
        let out = render_success(&OutputFormat::Json, "Database seeded", Some(json!({"planets": 3}))).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["planets"], 3);
    }

    #[test]
    fn text_output_is_one_line() {
        let out = render_success(&OutputFormat::Text, "Database created", None).unwrap();
        assert_eq!(out, "✓ Database created");
    }
}
