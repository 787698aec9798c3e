//! Version string tokenizer
//!
//! Scans a version left to right and produces the root list of [`Item`]s:
//! - `.` separates siblings in the current list
//! - `-` after a number, directly followed by a digit, opens a nested list (`1-1`)
//! - a switch between letters and digits splits tokens (`ea2` is `ea`, `2`)
//! - `*` is a wildcard
//!
//! Any input is accepted; characters that are not understood end up in qualifiers.
//!
//! Only ASCII `0-9` are digits, so non-ASCII digits such as `１` stay qualifier text.
//! Whitespace follows the JVM definition: no-break spaces are ordinary characters and the
//! `U+001C..=U+001F` separators split tokens.

use num_bigint::BigUint;
use tracing::trace;

use crate::version::item::{self, Item};

/// Tokenize a version string (after snapshot extraction) into its root item list
pub fn parse(version: &str) -> Vec<Item> {
    let text = version.to_lowercase();
    let items = Tokenizer::new(&text).run();
    trace!("Parsed '{}' into {} items", version, items.len());
    items
}

fn is_separator_space(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{001C}'..='\u{001F}' => true,
        c => c.is_whitespace(),
    }
}

struct Tokenizer<'a> {
    text: &'a str,
    root: Vec<Item>,
    /// Lists opened by `-N`, innermost last; each is the last child of the one before it
    nested: Vec<Vec<Item>>,
    /// Whether the most recent token character was a digit
    in_digits: bool,
    /// Byte offset where the pending token starts
    start: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            root: Vec::new(),
            nested: Vec::new(),
            in_digits: false,
            start: 0,
        }
    }

    fn run(mut self) -> Vec<Item> {
        let text = self.text;
        let mut chars = text.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            let after = i + c.len_utf8();

            match c {
                '.' | '-' => {
                    self.end_token(i);
                    self.start = after;

                    if c == '-' && self.in_digits {
                        // 1.0-* == 1-*
                        item::normalize(self.current());

                        // only 1-1 opens a sub-list, 1.1 stays flat
                        if chars.peek().is_some_and(|(_, next)| next.is_ascii_digit()) {
                            self.nested.push(Vec::new());
                        }
                    }
                }
                '*' => {
                    self.current().push(Item::Wildcard);
                    self.start = after;
                }
                c if c.is_ascii_digit() => {
                    if !self.in_digits && i > self.start {
                        let token = &text[self.start..i];
                        self.current().push(Item::qualifier(token, true));
                        self.start = i;
                    }
                    self.in_digits = true;
                }
                c if is_separator_space(c) => {
                    if i > self.start {
                        let token = &text[self.start..i];
                        let item = if self.in_digits {
                            Item::integer(token)
                        } else {
                            Item::qualifier(token, true)
                        };
                        self.current().push(item);
                        self.start = i;
                    }
                    self.in_digits = false;
                }
                _ => {
                    if self.in_digits && i > self.start {
                        let token = &text[self.start..i];
                        self.current().push(Item::integer(token));
                        self.start = i;
                    }
                    self.in_digits = false;
                }
            }
        }

        if text.len() > self.start {
            let item = self.token_item(&text[self.start..]);
            self.current().push(item);
        }

        self.finish()
    }

    /// Flush the token ending at a delimiter; an empty token counts as zero
    fn end_token(&mut self, end: usize) {
        let item = if end == self.start {
            Item::Integer(BigUint::default())
        } else {
            self.token_item(&self.text[self.start..end])
        };
        self.current().push(item);
    }

    fn token_item(&self, token: &str) -> Item {
        if self.in_digits {
            Item::integer(token)
        } else {
            Item::qualifier(token, false)
        }
    }

    fn current(&mut self) -> &mut Vec<Item> {
        self.nested.last_mut().unwrap_or(&mut self.root)
    }

    /// Close nested lists innermost first, normalizing each before it joins its parent
    fn finish(mut self) -> Vec<Item> {
        while let Some(mut list) = self.nested.pop() {
            item::normalize(&mut list);
            self.current().push(Item::List(list));
        }
        item::normalize(&mut self.root);
        self.root
    }
}
