/// Render the Go source file declaring `var <variable> = [...]string { ... }`.
/// The layout matches what the Go package has always checked in: a blank
/// line after the package clause, four space indents, a trailing comma on
/// every entry and no newline after the closing brace.
pub fn render_go_source(package: &str, variable: &str, titles: &[String]) -> String {
    let mut source = String::new();
    source.push_str(&format!("package {}\n\n", package));
    source.push_str(&format!("var {} = [...]string {{\n", variable));
    for title in titles {
        source.push_str(&format!("    {},\n", go_string_literal(title)));
    }
    source.push('}');
    source
}

/// Quote `s` as a Go interpreted string literal.
pub fn go_string_literal(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                quoted.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
