use crate::registry::StyleRegistry;

/// Render every declaration inside a single `:root` block.
///
/// Colors are separated by a blank line, declarations keep shade order.
pub fn render_stylesheet(registry: &StyleRegistry) -> String {
    let body = registry
        .iter()
        .filter(|(_, set)| !set.is_empty())
        .map(|(_, set)| {
            set.values()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("\n  ")
        })
        .collect::<Vec<_>>()
        .join("\n\n  ");

    if body.is_empty() {
        ":root {\n}\n".to_string()
    } else {
        format!(":root {{\n  {}\n}}\n", body)
    }
}
