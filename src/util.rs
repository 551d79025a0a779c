use std::cell::RefCell;

thread_local! {
    static CASEFOLD_BUFFER: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Compares two hosts ignoring case, without allocating for ASCII input.
///
/// `b` is expected to come from configuration; only `a` is case-folded into
/// the thread-local buffer when it carries non-ASCII uppercase characters.
pub(crate) fn equals_ignore_case(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    let b_lowered = lowercase_if_needed(b);
    let b_ref = b_lowered.as_deref().unwrap_or(b);

    CASEFOLD_BUFFER.with(|buffer| {
        let mut buffer = buffer.borrow_mut();
        if lowercase_unicode_into(a, &mut buffer) {
            buffer.as_str() == b_ref
        } else {
            a == b_ref
        }
    })
}

fn lowercase_if_needed(value: &str) -> Option<String> {
    if value.chars().any(char::is_uppercase) {
        Some(value.to_lowercase())
    } else {
        None
    }
}

/// Writes the lowercase form of `value` into `buffer`, returning `false`
/// untouched when `value` has no uppercase characters.
pub(crate) fn lowercase_unicode_into(value: &str, buffer: &mut String) -> bool {
    buffer.clear();

    for (idx, ch) in value.char_indices() {
        if ch.is_uppercase() {
            buffer.reserve(value.len());
            buffer.push_str(&value[..idx]);
            buffer.extend(ch.to_lowercase());

            let tail_start = idx + ch.len_utf8();
            for tail_ch in value[tail_start..].chars() {
                if tail_ch.is_uppercase() {
                    buffer.extend(tail_ch.to_lowercase());
                } else {
                    buffer.push(tail_ch);
                }
            }

            return true;
        }
    }

    false
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
