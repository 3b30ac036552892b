//! Console Output
//!
//! Human-readable rendering of search progress and the final run report.

use std::fmt;
use std::io::{self, Write};

use platform::crypto::to_base64;

use crate::application::run_pipeline::PipelineOutput;
use crate::domain::entities::PowSolution;
use crate::domain::observer::SearchObserver;
use crate::domain::services::digest_hex;
use crate::domain::value_objects::Difficulty;

/// Observer that prints progress and solutions to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver;

impl SearchObserver for ConsoleObserver {
    fn on_start(&self, difficulty: Difficulty) {
        println!("Searching for a hash with {} leading zeros...", difficulty);
    }

    fn on_progress(&self, _difficulty: Difficulty, attempts: u64) {
        println!("Tried {} attempts...", attempts);
    }

    fn on_found(&self, solution: &PowSolution) {
        print!("{}", SolutionBlock(solution));
    }
}

/// The block printed when a search finishes
#[derive(Debug, Clone, Copy)]
pub struct SolutionBlock<'a>(pub &'a PowSolution);

impl fmt::Display for SolutionBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let solution = self.0;
        writeln!(f)?;
        writeln!(
            f,
            "=== Found a hash with {} leading zeros ===",
            solution.difficulty
        )?;
        writeln!(f, "Elapsed: {:?}", solution.elapsed)?;
        writeln!(f, "Hash input: {}", solution.message.as_str())?;
        writeln!(f, "Hash value: {}", solution.digest_hex())?;
        writeln!(f, "Attempts: {}", solution.attempts())?;
        writeln!(f, "================================")?;
        writeln!(f)
    }
}

/// Write key pair, signing summary and verification status
pub fn write_report<W: Write>(out: &mut W, output: &PipelineOutput) -> io::Result<()> {
    let signed = output.signed_solution();

    writeln!(out, "Generated private key:")?;
    writeln!(out, "{}", output.key_pair.private_pem())?;
    writeln!(out, "Generated public key:")?;
    writeln!(out, "{}", output.key_pair.public_pem())?;

    writeln!(out)?;
    writeln!(out, "=== RSA signature ===")?;
    writeln!(out, "Original data: {}", signed.message.as_str())?;
    writeln!(out, "Data digest: {}", digest_hex(&output.signature.digest))?;
    writeln!(out, "Signature length: {} bytes", output.signature.len())?;
    writeln!(out, "Signature (base64): {}", to_base64(&output.signature.bytes))?;
    if output.verified {
        writeln!(out, "✅ Signature verified!")?;
    } else {
        writeln!(out, "❌ Signature verification failed")?;
    }
    writeln!(out, "========================")
}
