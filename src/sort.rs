//! Natural file-name ordering.
//!
//! Scanners number their output files without zero padding, so a plain
//! lexical sort puts `Scan10.pdf` before `Scan9.pdf`. Natural ordering
//! splits each name into alternating non-digit and digit runs, compares
//! digit runs by numeric value and non-digit runs case-insensitively.

use std::cmp::Ordering;

/// One run of a string: either consecutive ASCII digits or everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Digits(&'a str),
    Text(&'a str),
}

/// Split off the leading run of `s`, returning the run and the remainder.
fn next_segment(s: &str) -> Option<(Segment<'_>, &str)> {
    let first = s.chars().next()?;
    let is_digit = first.is_ascii_digit();
    let end = s
        .char_indices()
        .find(|(_, c)| c.is_ascii_digit() != is_digit)
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let (run, rest) = s.split_at(end);
    let segment = if is_digit {
        Segment::Digits(run)
    } else {
        Segment::Text(run)
    };
    Some((segment, rest))
}

/// Compare two digit runs by numeric value.
///
/// Leading zeros are ignored, so `009` and `9` compare equal. Comparing the
/// stripped runs by length first avoids parsing, which keeps arbitrarily
/// long digit runs well-defined.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare two non-digit runs case-insensitively.
fn cmp_text_runs(a: &str, b: &str) -> Ordering {
    let left = a.chars().flat_map(char::to_lowercase);
    let right = b.chars().flat_map(char::to_lowercase);
    left.cmp(right)
}

/// Compare two strings in natural order.
///
/// Digit runs compare numerically, non-digit runs compare
/// case-insensitively, and an exhausted string orders first. When the two
/// sides disagree about the kind of run at a position, the digit run orders
/// first. Strings without digits degrade to plain case-insensitive lexical
/// order.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use scanweave::sort::natural_cmp;
///
/// assert_eq!(natural_cmp("Scan9.pdf", "Scan10.pdf"), Ordering::Less);
/// assert_eq!(natural_cmp("Scan009.pdf", "Scan9.pdf"), Ordering::Equal);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a;
    let mut right = b;

    loop {
        match (next_segment(left), next_segment(right)) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some((l, l_rest)), Some((r, r_rest))) => {
                let ordering = match (l, r) {
                    (Segment::Digits(x), Segment::Digits(y)) => cmp_digit_runs(x, y),
                    (Segment::Text(x), Segment::Text(y)) => cmp_text_runs(x, y),
                    (Segment::Digits(_), Segment::Text(_)) => Ordering::Less,
                    (Segment::Text(_), Segment::Digits(_)) => Ordering::Greater,
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
                left = l_rest;
                right = r_rest;
            }
        }
    }
}

/// Sort a slice of strings in natural order.
///
/// The underlying sort is stable, so items with equal keys (for example
/// names that differ only in digit padding) keep their original relative
/// order.
pub fn natural_sort<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
}
