/// Formats an image reference for the index.
///
/// Remote images become a standard markdown embed with `name` as alt text;
/// anything else is embedded as a vault attachment and `name` is not used.
///
/// # Examples
/// ```
/// use recipedex::image::format_image;
///
/// assert_eq!(format_image("Chef Ana", "https://example.com/ana.jpg", true),
///            "![Chef Ana](https://example.com/ana.jpg)");
/// assert_eq!(format_image("Pancakes", "pancakes.jpg", false), "![[pancakes.jpg]]");
/// ```
pub fn format_image(name: &str, url: &str, is_remote: bool) -> String {
    if is_remote {
        format!("![{name}]({url})")
    } else {
        format!("![[{url}]]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_embed_ignores_the_name() {
        assert_eq!(format_image("A", "x.png", false), format_image("B", "x.png", false));
    }

    #[test]
    fn empty_url_still_produces_an_embed() {
        assert_eq!(format_image("Pancakes", "", false), "![[]]");
        assert_eq!(format_image("Pancakes", "", true), "![Pancakes]()");
    }
}
