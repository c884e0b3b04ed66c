//! Per-zone output-variable naming.

/// Build the parallel name lists for one zone's output variables.
///
/// Returns owned copies of the short names and the fully-qualified names of
/// the form `<zone_id>_<short_name>`, both in input order. No deduplication
/// is performed; the caller must ensure short names are unique within a zone.
pub fn build_variable_names(
    zone_id: &str,
    short_names: &[impl AsRef<str>],
) -> (Vec<String>, Vec<String>) {
    let short = short_names
        .iter()
        .map(|name| name.as_ref().to_owned())
        .collect();
    let qualified = short_names
        .iter()
        .map(|name| format!("{zone_id}_{}", name.as_ref()))
        .collect();
    (short, qualified)
}
