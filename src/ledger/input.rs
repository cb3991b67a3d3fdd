//! Sanitising of free-form amount input.

/// Parses user-typed amount text the way the entry form does.
///
/// Currency symbols, whitespace, grouping commas and other stray characters
/// are dropped, then the longest numeric prefix is read. Anything unreadable
/// becomes `0.0`, which the log then rejects. A minus anywhere before the
/// first digit (`-5`, `$-5`, `- 5`) makes the result negative so the log
/// rejects it instead of recording a positive amount.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let negative = trimmed
        .chars()
        .take_while(|ch| !ch.is_ascii_digit())
        .any(|ch| ch == '-');
    let cleaned: String = trimmed
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();

    let mut end = 0;
    let mut seen_dot = false;
    for (idx, ch) in cleaned.char_indices() {
        if ch == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = idx + ch.len_utf8();
    }

    let value = cleaned[..end].parse::<f64>().unwrap_or(0.0);
    if negative {
        -value
    } else {
        value
    }
}
