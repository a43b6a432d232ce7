use uuid::Uuid;

/// Storage key for a new blob: `<uuid-v4>_<sanitized original name>`.
///
/// The random component carries the whole uniqueness guarantee; no lookup
/// against the store is made. The sanitized suffix keeps keys readable in
/// bucket listings without letting user input shape the key space.
pub fn generate_object_key(original_name: &str) -> String {
    format!("{}_{}", Uuid::new_v4(), sanitize_file_name(original_name))
}

/// Replace every character outside `[A-Za-z0-9.-]` with `_`.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
