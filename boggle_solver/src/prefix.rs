/// Whether `cell` matches the leading characters of `remaining`. Both are
/// expected to already be uppercase.
pub fn is_prefix(cell: &str, remaining: &str) -> bool {
  remaining.starts_with(cell)
}
