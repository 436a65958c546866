#[derive(Debug, Clone, Copy)]
pub struct SourceChar {
    pub value: char,
    pub offset: usize,
    pub line: u32,
}

impl SourceChar {
    pub fn next_offset(&self) -> usize {
        self.offset + self.value.len_utf8()
    }
}
