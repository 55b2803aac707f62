#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch,
    /// No `output.txt`, so nothing was compared.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonOutcome {
    pub verdict: Verdict,
    pub expected: Option<String>,
    pub actual: String,
}

/// Compare run output with the recorded fixture, ignoring leading and trailing
/// whitespace only.
pub fn compare(actual: &str, expected: Option<&str>) -> ComparisonOutcome {
    let verdict = match expected {
        None => Verdict::Skipped,
        Some(exp) if exp.trim() == actual.trim() => Verdict::Match,
        Some(_) => Verdict::Mismatch,
    };
    ComparisonOutcome {
        verdict,
        expected: expected.map(str::to_string),
        actual: actual.to_string(),
    }
}
