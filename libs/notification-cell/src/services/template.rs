/// Replaces every `{key}` token in the template with its paired value.
/// Tokens without a pair are left in place so operators can spot a typo
/// in their template instead of silently losing the field.
pub fn render(template: &str, values: &[(&str, String)]) -> String {
    let mut message = template.to_string();
    for (key, value) in values {
        message = message.replace(&format!("{{{}}}", key), value);
    }
    message
}
