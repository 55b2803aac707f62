use std::io::{self, Write};
use std::path::Path;

use crate::compare::{ComparisonOutcome, Verdict};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub matched: usize,
    pub mismatched: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Match => self.matched += 1,
            Verdict::Mismatch => self.mismatched += 1,
            Verdict::Skipped => self.skipped += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.matched + self.mismatched + self.skipped
    }
}

// Messages follow the old examples/run.py wording.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Reporter { out }
    }

    pub fn script_written(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "Output written to {}", path.display())
    }

    pub fn outcome(&mut self, example: &str, outcome: &ComparisonOutcome) -> io::Result<()> {
        match outcome.verdict {
            Verdict::Match => {
                writeln!(self.out, "{example}.lua output matches expected output")
            }
            Verdict::Mismatch => {
                writeln!(self.out, "{example}.lua output does not match expected output")?;
                writeln!(self.out, "Expected:")?;
                writeln!(self.out, "{}", outcome.expected.as_deref().unwrap_or_default())?;
                writeln!(self.out, "Actual:")?;
                writeln!(self.out, "{}", outcome.actual)
            }
            Verdict::Skipped => writeln!(
                self.out,
                "No output.txt file found for {example}, won't compare output"
            ),
        }
    }

    pub fn summary(&mut self, summary: &Summary) -> io::Result<()> {
        writeln!(
            self.out,
            "{} examples: {} matched, {} mismatched, {} skipped",
            summary.total(),
            summary.matched,
            summary.mismatched,
            summary.skipped
        )
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
