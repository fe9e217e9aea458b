/// Build the normalized text that keyword and experience scans run against.
///
/// Fields are joined with a single space and case-folded. Empty fields still
/// contribute their separator so the result is stable for a given field count.
pub fn search_text(fields: &[&str]) -> String {
    fields.join(" ").to_lowercase()
}
