#[derive(Debug, Default)]
pub struct LineBuffer {
    line_buff: String,
    doc_lines: Vec<String>,
}

impl LineBuffer {
    pub fn add(&mut self, value: &str) -> &mut Self {
        self.line_buff.push_str(value);
        self
    }

    pub fn spaces(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.line_buff.push(' ');
        }
        self
    }

    pub fn end_line(&mut self) -> &mut Self {
        while self.line_buff.ends_with(|c: char| c.is_whitespace()) {
            self.line_buff.pop();
        }
        self.doc_lines.push(std::mem::take(&mut self.line_buff));
        self
    }

    pub fn into_string(mut self) -> String {
        if !self.line_buff.is_empty() {
            self.end_line();
        }
        self.doc_lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_join_with_newlines() {
        let mut buffer = LineBuffer::default();
        buffer.spaces(2).add("a").end_line();
        buffer.add("b").end_line();
        assert_eq!(buffer.into_string(), "  a\nb");
    }

    #[test]
    fn trailing_whitespace_is_trimmed() {
        let mut buffer = LineBuffer::default();
        buffer.add("x  ").end_line();
        assert_eq!(buffer.into_string(), "x");
    }

    #[test]
    fn empty_lines_survive() {
        let mut buffer = LineBuffer::default();
        buffer.add("a").end_line();
        buffer.end_line();
        buffer.add("b").end_line();
        assert_eq!(buffer.into_string(), "a\n\nb");
    }
}
