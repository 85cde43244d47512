//! Page-number parsing and page arithmetic for the project listing.

/// Fixed number of projects returned per page.
pub const PAGE_SIZE: i64 = 8;

/// Parse a raw `page` query value leniently.
///
/// The leading integer prefix of the trimmed input is used (`"3abc"` is page
/// 3). Absent, non-numeric, zero, and negative values all fall back to page 1.
pub fn parse_page(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 1;
    };
    let trimmed = raw.trim();

    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<i64>() {
        Ok(n) if sign * n > 0 => n,
        _ => 1,
    }
}

/// Number of rows to skip for a 1-based `page`.
pub fn offset_for(page: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(PAGE_SIZE)
}

/// Total number of pages needed to show `total` rows (`ceil(total / PAGE_SIZE)`).
pub fn total_pages(total: i64) -> i64 {
    if total <= 0 {
        0
    } else {
        (total + PAGE_SIZE - 1) / PAGE_SIZE
    }
}
