use alloc::format;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

/// Cardinal plural category of an integer count in `language`.
///
/// `language` is a primary language subtag (`"sl"`, `"ru"`). Languages
/// without their own rules use the one/other split. Negative counts are
/// always `Other`.
pub fn plural_category(language: &str, count: i64) -> PluralCategory {
    let Ok(count) = u64::try_from(count) else {
        return PluralCategory::Other;
    };
    let mod10 = count % 10;
    let mod100 = count % 100;
    match language {
        "id" | "ig" | "yo" | "ja" | "ko" | "zh" => PluralCategory::Other,
        "fa" => {
            if count <= 1 {
                PluralCategory::One
            } else {
                PluralCategory::Other
            }
        }
        "ru" | "uk" => {
            if mod10 == 1 && mod100 != 11 {
                PluralCategory::One
            } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                PluralCategory::Few
            } else {
                PluralCategory::Many
            }
        }
        "sl" => match mod100 {
            1 => PluralCategory::One,
            2 => PluralCategory::Two,
            3 | 4 => PluralCategory::Few,
            _ => PluralCategory::Other,
        },
        _ => {
            if count == 1 {
                PluralCategory::One
            } else {
                PluralCategory::Other
            }
        }
    }
}

/// Reads a count from a rule argument the way a loose integer parse does:
/// leading whitespace is skipped, a sign is kept and parsing stops at the
/// first non-digit, so `"5px"` is 5 and `"-1"` is -1.
pub fn parse_count(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = unsigned
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }
    let digits = &unsigned[..end];
    // saturate absurdly long digit runs instead of failing
    let count = if negative {
        format!("-{digits}").parse().unwrap_or(i64::MIN)
    } else {
        digits.parse().unwrap_or(i64::MAX)
    };
    Some(count)
}
