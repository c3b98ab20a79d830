use serde_json::json;

/// Successful text-generation payload as returned by the hosted inference API.
pub fn generated_text_fixture(text: &str) -> String {
    return json!([{ "generated_text": text }]).to_string();
}

/// Error payload returned while a model is loading or the token is rejected.
pub fn inference_error_fixture(error: &str) -> String {
    return json!({ "error": error, "estimated_time": 20.0 }).to_string();
}

pub fn multiline_output_fixture() -> &'static str {
    return r#"
def factorial(n):
    """Return n! recursively."""
    if n <= 1:
        return 1
    return n * factorial(n - 1)


print(factorial(5))
"#
    .trim_start();
}
