//! Report DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::RunId;
use platform::crypto::to_base64;
use serde::Serialize;

use crate::application::run_pipeline::PipelineOutput;
use crate::domain::entities::PowSolution;
use crate::domain::services::digest_hex;

/// JSON report for a whole pipeline run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub run_id: RunId,
    pub solutions: Vec<SolutionReport>,
    pub key_pair: KeyPairReport,
    pub signature: SignatureReport,
    pub verified: bool,
    pub finished_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionReport {
    pub difficulty: u8,
    pub nonce: u64,
    pub message: String,
    pub digest_hex: String,
    pub attempts: u64,
    pub elapsed_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPairReport {
    pub bits: usize,
    pub private_key_pem: String,
    pub public_key_pem: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureReport {
    pub message: String,
    pub digest_hex: String,
    pub signature_len: usize,
    pub signature_b64: String,
}

impl From<&PowSolution> for SolutionReport {
    fn from(solution: &PowSolution) -> Self {
        Self {
            difficulty: solution.difficulty.zeros(),
            nonce: solution.message.nonce(),
            message: solution.message.as_str().to_string(),
            digest_hex: solution.digest_hex(),
            attempts: solution.attempts(),
            elapsed_ms: solution.elapsed.as_secs_f64() * 1000.0,
        }
    }
}

impl From<&PipelineOutput> for RunReport {
    fn from(output: &PipelineOutput) -> Self {
        Self {
            run_id: output.run_id,
            solutions: output.solutions.iter().map(SolutionReport::from).collect(),
            key_pair: KeyPairReport {
                bits: output.key_pair.bits(),
                private_key_pem: output.key_pair.private_pem().to_string(),
                public_key_pem: output.key_pair.public_pem().to_string(),
            },
            signature: SignatureReport {
                message: output.signed_solution().message.as_str().to_string(),
                digest_hex: digest_hex(&output.signature.digest),
                signature_len: output.signature.len(),
                signature_b64: to_base64(&output.signature.bytes),
            },
            verified: output.verified,
            finished_at: Utc::now(),
        }
    }
}
