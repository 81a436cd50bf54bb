// codegen/src/utils.rs

//! Identifier transformation shared by every emitter.

/// Words that cannot appear as plain Rust identifiers.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers either.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Capitalize the first letter of a string
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Lower-case the first letter of a string
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Convert snake_case to PascalCase (the exported convention).
///
/// Every `_`-delimited segment gets its first character upper-cased and the
/// segments are joined without a separator. The rest of each segment is kept
/// as-is, so `sendMessage` becomes `SendMessage`.
///
/// # Examples
/// ```
/// use codegen::utils::snake_to_pascal_case;
/// assert_eq!(snake_to_pascal_case("chat_id"), "ChatId");
/// assert_eq!(snake_to_pascal_case("sendMessage"), "SendMessage");
/// assert_eq!(snake_to_pascal_case(""), "");
/// ```
pub fn snake_to_pascal_case(s: &str) -> String { s.split('_').map(capitalize).collect() }

/// Convert snake_case to camelCase (the local convention).
///
/// # Examples
/// ```
/// use codegen::utils::snake_to_camel_case;
/// assert_eq!(snake_to_camel_case("reply_to_message_id"), "replyToMessageId");
/// assert_eq!(snake_to_camel_case("text"), "text");
/// ```
pub fn snake_to_camel_case(s: &str) -> String { decapitalize(&snake_to_pascal_case(s)) }

/// Convert a camelCase or PascalCase name to snake_case.
///
/// Runs of capitals are treated as one word (`getHTTPStatus` → `get_http_status`).
pub fn camel_to_snake_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).and_then(|p| chars.get(p));
            let next = chars.get(i + 1);
            let starts_word = match prev {
                None => false,
                Some(p) if *p == '_' => false,
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) => p.is_uppercase() && next.is_some_and(|n| n.is_lowercase()),
            };
            if starts_word {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// Rust function name for a schema method name (`sendMessage` → `send_message`).
pub fn method_to_fn_name(method: &str) -> String {
    sanitize_external_identifier(&camel_to_snake_case(method))
}

/// Sanitizes external identifiers (schema field and parameter names) to be valid Rust identifiers
pub fn sanitize_external_identifier(name: &str) -> String {
    if NON_RAW_KEYWORDS.contains(&name) {
        return format!("{name}_");
    }
    if RUST_KEYWORDS.contains(&name) {
        return format!("r#{name}");
    }

    // Replace hyphens with underscores and remove other invalid characters
    let sanitized: String = name
        .replace('-', "_")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();

    match sanitized.chars().next() {
        None => "_unnamed".to_string(),
        Some(first) if first.is_ascii_digit() => format!("_{sanitized}"),
        Some(_) if sanitized == "_" => "_unnamed".to_string(),
        Some(_) => sanitized,
    }
}
