/// Joins the two sides of a modified line in its composite content.
pub const MODIFIED_SEPARATOR: &str = " → ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Unchanged,
    Added,
    Removed,
    Modified,
}

impl LineKind {
    /// Prefix used by the unified view and the exported diff text.
    pub fn prefix(self) -> &'static str {
        match self {
            LineKind::Unchanged => "  ",
            LineKind::Added => "+ ",
            LineKind::Removed => "- ",
            LineKind::Modified => "~ ",
        }
    }
}

/// One row of comparison output.
///
/// Line numbers are 1-based. Which of them is present depends on the kind:
/// `Unchanged` and `Modified` carry both, `Removed` only the left one and
/// `Added` only the right one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    kind: LineKind,
    left_line_num: Option<usize>,
    right_line_num: Option<usize>,
    content: String,
    // Byte offset of MODIFIED_SEPARATOR inside `content`, for Modified only.
    split_at: Option<usize>,
}

impl LineRecord {
    pub fn unchanged(content: &str, left_line_num: usize, right_line_num: usize) -> Self {
        Self {
            kind: LineKind::Unchanged,
            left_line_num: Some(left_line_num),
            right_line_num: Some(right_line_num),
            content: content.to_string(),
            split_at: None,
        }
    }

    pub fn added(content: &str, right_line_num: usize) -> Self {
        Self {
            kind: LineKind::Added,
            left_line_num: None,
            right_line_num: Some(right_line_num),
            content: content.to_string(),
            split_at: None,
        }
    }

    pub fn removed(content: &str, left_line_num: usize) -> Self {
        Self {
            kind: LineKind::Removed,
            left_line_num: Some(left_line_num),
            right_line_num: None,
            content: content.to_string(),
            split_at: None,
        }
    }

    pub fn modified(left: &str, right: &str, line_num: usize) -> Self {
        let mut content =
            String::with_capacity(left.len() + MODIFIED_SEPARATOR.len() + right.len());
        content.push_str(left);
        content.push_str(MODIFIED_SEPARATOR);
        content.push_str(right);

        Self {
            kind: LineKind::Modified,
            left_line_num: Some(line_num),
            right_line_num: Some(line_num),
            content,
            split_at: Some(left.len()),
        }
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn left_line_num(&self) -> Option<usize> {
        self.left_line_num
    }

    pub fn right_line_num(&self) -> Option<usize> {
        self.right_line_num
    }

    /// The shared text, the single side's text, or `left → right` for a
    /// modified line.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Text of the left side, if this record has one.
    pub fn left_text(&self) -> Option<&str> {
        match self.kind {
            LineKind::Unchanged | LineKind::Removed => Some(&self.content),
            LineKind::Modified => self.split_at.map(|at| &self.content[..at]),
            LineKind::Added => None,
        }
    }

    /// Text of the right side, if this record has one.
    pub fn right_text(&self) -> Option<&str> {
        match self.kind {
            LineKind::Unchanged | LineKind::Added => Some(&self.content),
            LineKind::Modified => self
                .split_at
                .map(|at| &self.content[at + MODIFIED_SEPARATOR.len()..]),
            LineKind::Removed => None,
        }
    }
}
