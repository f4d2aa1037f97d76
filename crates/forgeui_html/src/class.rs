//! Utility-class joining.

/// Joins CSS class fragments into a single `class` value.
///
/// Each fragment may itself contain several space-separated classes. Empty
/// fragments are skipped and repeated classes are dropped, keeping the
/// first occurrence.
///
/// ```
/// use forgeui_html::class_names;
///
/// assert_eq!(class_names(["flex  gap-2", "", "flex items-center"]), "flex gap-2 items-center");
/// ```
#[must_use]
pub fn class_names<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: Vec<String> = Vec::new();
    for fragment in fragments {
        for class in fragment.as_ref().split_whitespace() {
            if !seen.iter().any(|c| c == class) {
                seen.push(class.to_string());
            }
        }
    }
    seen.join(" ")
}
