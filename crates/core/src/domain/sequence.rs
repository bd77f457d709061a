// Prefixed board identifiers ("RES-001", "PREP-010")

/// Next identifier for `prefix`: one past the highest numeric suffix in use.
///
/// Identifiers that do not carry the prefix are ignored, so deleted or
/// foreign ids never cause a collision.
pub fn next_id<'a, I>(prefix: &str, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let marker = format!("{}-", prefix);
    let highest = existing
        .into_iter()
        .filter_map(|id| id.strip_prefix(&marker))
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{}{:03}", marker, highest + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_skips_gaps() {
        assert_eq!(next_id("RES", ["RES-001", "RES-004"]), "RES-005");
        assert_eq!(next_id("RES", Vec::<&str>::new()), "RES-001");
    }

    #[test]
    fn test_next_id_ignores_foreign_ids() {
        assert_eq!(next_id("ORD", ["TASK-009", "ORD-002", "ORD-x"]), "ORD-003");
    }
}
