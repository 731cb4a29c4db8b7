//! Indentation-aware text buffer the backends render into.

/// Accumulates generated source text.
///
/// Indentation is inserted lazily at the first write of each line, so
/// blank lines never carry trailing whitespace.
pub struct CodeWriter {
    output: String,
    indent_level: u32,
    indent_str: &'static str,
    new_line: &'static str,
    at_line_start: bool,
}

impl CodeWriter {
    pub fn new(indent_str: &'static str) -> Self {
        Self {
            output: String::with_capacity(2048),
            indent_level: 0,
            indent_str,
            new_line: "\n",
            at_line_start: true,
        }
    }

    /// Append text to the current line.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            for _ in 0..self.indent_level {
                self.output.push_str(self.indent_str);
            }
            self.at_line_start = false;
        }
        self.output.push_str(text);
    }

    /// Write `text` and terminate the line.
    pub fn write_line(&mut self, text: &str) {
        self.write(text);
        self.newline();
    }

    pub fn newline(&mut self) {
        self.output.push_str(self.new_line);
        self.at_line_start = true;
    }

    /// Write `items` separated by `sep`, without a trailing separator.
    pub fn write_separated<I, S>(&mut self, items: I, sep: &str)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.write(sep);
            }
            self.write(item.as_ref());
        }
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn finish(self) -> String {
        self.output
    }
}
