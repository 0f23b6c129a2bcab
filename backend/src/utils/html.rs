// src/utils/html.rs

/// Escapes text for insertion into HTML element content or a quoted attribute.
pub fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Like `escape`, with newlines turned into `<br>` so code prompts keep their shape.
pub fn escape_multiline(input: &str) -> String {
    escape(input).replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape(r#"<a href="x">'Tom' & Jerry</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;Tom&#x27; &amp; Jerry&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_multiline() {
        assert_eq!(
            escape_multiline("code:\n\nconsole.log(typeof null);"),
            "code:<br><br>console.log(typeof null);"
        );
    }
}
