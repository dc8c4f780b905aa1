use std::cmp::Ordering;
use std::iter::Peekable;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compares two display names the way a file browser lists them.
///
/// Letters compare case-insensitively with accents ignored, so `Écrits`
/// sits beside `ecrits` rather than after `Zoo`. Runs of ASCII digits
/// compare by numeric value, so `item2` sorts before `item10`. Names that
/// tie under those rules fall back to plain byte order to keep the result
/// total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_cmp_folded(a, b).then_with(|| a.cmp(b))
}

/// Decomposes, drops combining marks and lowercases.
fn folded(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn natural_cmp_folded(a: &str, b: &str) -> Ordering {
    let mut left = folded(a).peekable();
    let mut right = folded(b).peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_run = take_digits(&mut left);
                let r_run = take_digits(&mut right);
                match cmp_digit_runs(&l_run, &r_run) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
            (Some(l), Some(r)) => {
                left.next();
                right.next();
                match l.cmp(&r) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<impl Iterator<Item = char>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

/// Longer significant runs are bigger; equal values with more leading
/// zeros sort later.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a_sig = a.trim_start_matches('0');
    let b_sig = b.trim_start_matches('0');
    a_sig
        .len()
        .cmp(&b_sig.len())
        .then_with(|| a_sig.cmp(b_sig))
        .then_with(|| a.len().cmp(&b.len()))
}
