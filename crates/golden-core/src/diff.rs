//! Line-level diff between a golden file and its generated counterpart

use std::fmt::Write as _;

use similar::{Algorithm, DiffOp, DiffTag};

/// Lines of unchanged context shown around each hunk
pub const CONTEXT_LINES: usize = 3;

/// Result of comparing two buffers line by line
///
/// Buffers are split on `\n` and compared as raw bytes, so a trailing
/// newline produces a final empty line and a missing one shows up as a
/// difference. Lines are decoded lossily as UTF-8 only when rendered.
#[derive(Debug, Clone)]
pub struct LineDiff {
    golden: Vec<Vec<u8>>,
    generated: Vec<Vec<u8>>,
    ops: Vec<DiffOp>,
}

impl LineDiff {
    pub fn compute(golden: &[u8], generated: &[u8]) -> Self {
        let golden = split_lines(golden);
        let generated = split_lines(generated);
        let ops = similar::capture_diff_slices(Algorithm::Myers, &golden, &generated);
        Self {
            golden,
            generated,
            ops,
        }
    }

    /// True when both buffers have identical line sequences
    pub fn is_equal(&self) -> bool {
        self.ops.iter().all(|op| op.tag() == DiffTag::Equal)
    }

    /// Number of golden lines removed plus generated lines added
    pub fn changed_lines(&self) -> usize {
        self.ops
            .iter()
            .map(|op| match op.tag() {
                DiffTag::Equal => 0,
                _ => op.old_range().len() + op.new_range().len(),
            })
            .sum()
    }

    /// Render as unified diff hunks, `-` for golden and `+` for generated
    pub fn unified(&self) -> String {
        let mut out = String::new();
        for group in similar::group_diff_ops(self.ops.clone(), CONTEXT_LINES) {
            let (Some(first), Some(last)) = (group.first(), group.last()) else {
                continue;
            };
            let old = first.old_range().start..last.old_range().end;
            let new = first.new_range().start..last.new_range().end;
            let _ = writeln!(
                out,
                "@@ -{} +{} @@",
                hunk_range(old.start, old.len()),
                hunk_range(new.start, new.len())
            );

            for op in &group {
                let (tag, old_range, new_range) = op.as_tag_tuple();
                match tag {
                    DiffTag::Equal => self.push_lines(&mut out, ' ', &self.golden[old_range]),
                    DiffTag::Delete => self.push_lines(&mut out, '-', &self.golden[old_range]),
                    DiffTag::Insert => {
                        self.push_lines(&mut out, '+', &self.generated[new_range])
                    }
                    DiffTag::Replace => {
                        self.push_lines(&mut out, '-', &self.golden[old_range]);
                        self.push_lines(&mut out, '+', &self.generated[new_range]);
                    }
                }
            }
        }
        out
    }

    fn push_lines(&self, out: &mut String, sign: char, lines: &[Vec<u8>]) {
        for line in lines {
            out.push(sign);
            out.push_str(&String::from_utf8_lossy(line));
            out.push('\n');
        }
    }
}

fn split_lines(bytes: &[u8]) -> Vec<Vec<u8>> {
    bytes.split(|&b| b == b'\n').map(<[u8]>::to_vec).collect()
}

fn hunk_range(start: usize, len: usize) -> String {
    if len == 0 {
        format!("{start},0")
    } else if len == 1 {
        format!("{}", start + 1)
    } else {
        format!("{},{}", start + 1, len)
    }
}
