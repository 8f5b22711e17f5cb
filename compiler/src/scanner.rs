use std::{iter::Peekable, str::Chars};

use crate::pos::BytePos;

/// Forward-only character cursor over the source text.
pub struct Scanner<'a> {
    pub pos: BytePos,
    pub line: usize,
    buf: Peekable<Chars<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(buf: &'a str) -> Scanner<'a> {
        Scanner {
            pos: BytePos::default(),
            line: 1,
            buf: buf.chars().peekable(),
        }
    }

    pub fn next(&mut self) -> Option<char> {
        let next = self.buf.next();
        if let Some(c) = next {
            self.pos = self.pos.shift(c);
            if c == '\n' {
                self.line += 1;
            }
        }

        next
    }

    pub fn peek(&mut self) -> Option<char> {
        self.buf.peek().copied()
    }

    pub fn consume_while<F>(&mut self, f: F) -> String
    where
        F: Fn(char) -> bool,
    {
        let mut chars = String::new();
        while let Some(ch) = self.peek() {
            if !f(ch) {
                break;
            }

            self.next();
            chars.push(ch);
        }

        chars
    }

    #[cfg(test)]
    fn assert_next(&mut self, pos: u32, c: Option<char>) {
        assert_eq!(self.pos.0, pos);
        assert_eq!(self.peek(), c);
        assert_eq!(self.next(), c);
    }
}
