use std::fmt::Display;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BytePos(pub u32);

impl BytePos {
    pub fn shift(self, ch: char) -> Self {
        BytePos(self.0.saturating_add(ch.len_utf8() as u32))
    }
}

/// Source range of a token. `end` is exclusive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: BytePos,
    pub end: BytePos,
    pub line: usize,
}

impl Span {
    pub const fn new(start: BytePos, end: BytePos, line: usize) -> Span {
        Span { start, end, line }
    }

    pub const fn empty() -> Span {
        Span {
            start: BytePos(0),
            end: BytePos(0),
            line: 0,
        }
    }

    pub fn len(&self) -> usize {
        (self.end.0 - self.start.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ln {}, byte {}", self.line, self.start.0)
    }
}
