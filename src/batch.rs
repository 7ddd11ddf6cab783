//! Line-oriented batch driver
//!
//! Reads repeated (size, A, B, C) test cases until a sentinel size of
//! zero or end of input, runs the verifier on each, and writes one
//! result block per case: `No`, or `Yes` followed by the 1-based
//! (row, col) of the bad element.

use crate::codec;
use crate::error::{ParseError, Result};
use crate::matrix::BitMatrix;
use crate::verify::{self, VerifierConfig};
use log::debug;
use rand::Rng;
use std::io::{BufRead, Write};

/// One parsed test case, consumed exactly once by the verifier
#[derive(Debug, Clone)]
pub struct TestCase {
    pub size: usize,
    pub a: BitMatrix,
    pub b: BitMatrix,
    pub c: BitMatrix,
}

/// Incremental reader for the test-case format
pub struct CaseReader<R> {
    reader: R,
    line: usize,
}

impl<R: BufRead> CaseReader<R> {
    pub fn new(reader: R) -> Self {
        CaseReader { reader, line: 0 }
    }

    /// Parse the next test case.
    ///
    /// Returns `Ok(None)` on the `0` sentinel or on a clean end of
    /// input; a case cut off mid-way is a [`ParseError::TruncatedCase`].
    pub fn next_case(&mut self) -> Result<Option<TestCase>> {
        let Some(line) = self.next_line()? else {
            return Ok(None);
        };

        let size: usize = line.trim().parse().map_err(|_| ParseError::InvalidSize {
            line: self.line,
            value: line.trim().to_string(),
        })?;

        if size == 0 {
            return Ok(None);
        }

        let a = self.matrix_line(size, "matrix A")?;
        let b = self.matrix_line(size, "matrix B")?;
        let c = self.matrix_line(size, "matrix C")?;

        Ok(Some(TestCase { size, a, b, c }))
    }

    fn matrix_line(&mut self, size: usize, expected: &'static str) -> Result<BitMatrix> {
        let line = self.next_line()?.ok_or(ParseError::TruncatedCase {
            line: self.line,
            expected,
        })?;
        codec::parse_matrix(&line, size)
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }
}

/// Process every test case from `input`, writing one result block per
/// case to `output`. Returns the number of cases processed.
///
/// The generator is advanced sequentially across cases, so the full
/// run is reproducible for a fixed seed.
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: VerifierConfig,
    rng: &mut impl Rng,
) -> Result<usize> {
    let mut cases = CaseReader::new(input);
    let mut processed = 0;

    while let Some(case) = cases.next_case()? {
        processed += 1;
        debug!("case {}: size {}", processed, case.size);

        match verify::find_defect(&case.a, &case.b, &case.c, config, rng) {
            None => writeln!(output, "No")?,
            Some(defect) => {
                writeln!(output, "Yes")?;
                writeln!(output, "{} {}", defect.row + 1, defect.col + 1)?;
            }
        }
    }

    Ok(processed)
}
