//! Wildcard matching of one logical value against another
//!
//! An unquoted `*` matches any run of characters, including none. An
//! unquoted `?` matches a single character or nothing; since the grammar
//! only allows `?` in runs at either end, a run of n marks matches up to n
//! characters there.

use cpename_core::{LogicalValue, Token};

/// Whether the wildcard `pattern` matches every character of `text`
///
/// `text` must be free of wildcards; its tokens are compared as literals.
pub fn matches(pattern: &LogicalValue, text: &LogicalValue, ignore_case: bool) -> bool {
    let pattern = pattern.tokens();
    let text: Vec<char> = text
        .tokens()
        .into_iter()
        .filter_map(|t| match t {
            Token::Char(c) => Some(c),
            _ => None,
        })
        .collect();

    // prev[j]: the first i-1 pattern tokens match text[..j]
    let mut prev = vec![false; text.len() + 1];
    prev[0] = true;
    let mut row = vec![false; text.len() + 1];

    for token in &pattern {
        for j in 0..=text.len() {
            row[j] = match token {
                Token::Char(c) => {
                    j > 0 && prev[j - 1] && chars_equal(*c, text[j - 1], ignore_case)
                }
                Token::AnyOne => prev[j] || (j > 0 && prev[j - 1]),
                Token::AnyRun => prev[j] || (j > 0 && row[j - 1]),
            };
        }
        std::mem::swap(&mut prev, &mut row);
    }

    prev[text.len()]
}

/// Token-wise equality, quoting-insensitive
pub fn equivalent(a: &LogicalValue, b: &LogicalValue, ignore_case: bool) -> bool {
    let a = a.tokens();
    let b = b.tokens();
    a.len() == b.len()
        && a.iter().zip(&b).all(|pair| match pair {
            (Token::Char(x), Token::Char(y)) => chars_equal(*x, *y, ignore_case),
            (x, y) => x == y,
        })
}

fn chars_equal(a: char, b: char, ignore_case: bool) -> bool {
    if ignore_case {
        a.eq_ignore_ascii_case(&b)
    } else {
        a == b
    }
}
