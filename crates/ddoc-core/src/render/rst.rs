use std::fmt::Write;

/// Indent unit for nested directive content (reStructuredText convention).
pub(crate) const INDENT: &str = "   ";

/// Line-oriented buffer for reStructuredText output.
///
/// Tracks whether the previous line was blank so separators never double
/// up, which keeps the recursive renderer free of blank-line bookkeeping.
#[derive(Debug, Default)]
pub struct RstWriter {
    buf: String,
    last_blank: bool,
}

impl RstWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self {
            buf: String::new(),
            last_blank: true,
        }
    }

    /// Writes one line at the given indent. An empty `text` is a blank line.
    pub fn line(&mut self, indent: &str, text: &str) {
        if text.is_empty() {
            self.blank();
            return;
        }
        let _ = writeln!(&mut self.buf, "{indent}{text}");
        self.last_blank = false;
    }

    /// Writes a single separating blank line, collapsing repeats.
    pub fn blank(&mut self) {
        if !self.last_blank {
            self.buf.push('\n');
            self.last_blank = true;
        }
    }

    /// Writes a multi-line block with every line at the given indent.
    ///
    /// Lines are reproduced verbatim, blank lines included; nothing is
    /// collapsed. Code extracted by byte range must round-trip exactly.
    pub fn block(&mut self, indent: &str, text: &str) {
        for line in text.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                self.buf.push('\n');
                self.last_blank = true;
            } else {
                let _ = writeln!(&mut self.buf, "{indent}{line}");
                self.last_blank = false;
            }
        }
    }

    /// Consumes the writer, returning the accumulated text without a
    /// trailing separator line.
    pub fn finish(mut self) -> String {
        while self.buf.ends_with("\n\n") {
            self.buf.pop();
        }
        self.buf
    }
}

/// Normalizes raw documentation text for embedding under a directive.
///
/// Strips the common leading whitespace shared by all non-empty lines
/// after the first, and drops leading and trailing blank lines, the same
/// treatment docstring text receives before re-indentation.
pub fn prepare_docstring(doc: &str) -> Vec<String> {
    let lines: Vec<&str> = doc.lines().collect();

    let margin = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        if index == 0 {
            out.push(line.trim().to_string());
        } else {
            // Strip whole whitespace chars only, up to the margin; the
            // margin is a byte count and whitespace can be multibyte.
            let mut strip = 0;
            for (offset, ch) in line.char_indices() {
                if !ch.is_whitespace() || offset + ch.len_utf8() > margin {
                    break;
                }
                strip = offset + ch.len_utf8();
            }
            out.push(line[strip..].trim_end().to_string());
        }
    }

    while out.first().is_some_and(|line| line.is_empty()) {
        out.remove(0);
    }
    while out.last().is_some_and(|line| line.is_empty()) {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_collapse() {
        let mut writer = RstWriter::new();
        writer.line("", "a");
        writer.blank();
        writer.blank();
        writer.line("", "b");
        assert_eq!(writer.finish(), "a\n\nb\n");
    }

    #[test]
    fn docstring_margin_is_stripped() {
        let lines = prepare_docstring("Summary.\n\n    Indented detail.\n    More.\n");
        assert_eq!(lines, vec!["Summary.", "", "Indented detail.", "More."]);
    }

    #[test]
    fn docstring_trailing_blanks_dropped() {
        let lines = prepare_docstring("\n\nOnly line.\n\n\n");
        assert_eq!(lines, vec!["Only line."]);
    }

    #[test]
    fn docstring_with_multibyte_whitespace_does_not_split_chars() {
        // The one-space margin from the second line must not cut into the
        // ideographic space opening the third.
        let lines = prepare_docstring("Summary.\n x\n\u{3000}y\n");
        assert_eq!(lines, vec!["Summary.", "x", "\u{3000}y"]);

        let lines = prepare_docstring("Summary.\n\u{a0}\u{a0}indented\n");
        assert_eq!(lines, vec!["Summary.", "indented"]);
    }

    #[test]
    fn block_preserves_consecutive_blank_lines() {
        let mut writer = RstWriter::new();
        writer.block("   ", "fn a();\n\n\nfn b();");
        assert_eq!(writer.finish(), "   fn a();\n\n\n   fn b();\n");
    }
}
