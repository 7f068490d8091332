mod submit;
mod test;

use crate::{
    clients::{language_name, JudgeResult, JudgeSubmission, JudgeTrait},
    error::{self, Result},
    StateTrait,
};
use axum::{routing::post, Router};
use entity::submissions::Verdict;
use serde::{Deserialize, Serialize};

/// Routes for code execution
///
/// POST /execute-code       (judge + persist a submission)
/// POST /execute-code/test  (judge only)
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", post(submit::submit_code::<S>))
        .route("/test", post(test::test_code::<S>))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    test_case: usize,
    passed: bool,
    stdout: Option<String>,
    expected: String,
    stderr: Option<String>,
    compile_output: Option<String>,
    status: String,
    time: Option<String>,
    memory: Option<f64>,
}

/// Judge0 status ids above "Wrong Answer" are time limits, compile errors
/// and runtime errors.
fn verdict_of(results: &[JudgeResult]) -> Verdict {
    if results.iter().all(JudgeResult::accepted) {
        Verdict::Accepted
    } else if results.iter().any(|result| result.status.id > 4) {
        Verdict::Error
    } else {
        Verdict::WrongAnswer
    }
}

/// Forwards one batch to the judge and shapes the per-case outcome. Used by
/// both the ad-hoc test endpoint and the persisting submit endpoint.
async fn judge<S: StateTrait>(
    state: &S,
    source_code: &str,
    language_id: i64,
    stdin: Vec<String>,
    expected_outputs: Vec<String>,
) -> Result<(Vec<CaseResult>, Verdict)> {
    if language_name(language_id).is_none() {
        return Err(error::UNSUPPORTED_LANGUAGE);
    }

    if stdin.is_empty() || stdin.len() != expected_outputs.len() {
        return Err(error::TESTCASE_MISMATCH);
    }

    let submissions = stdin
        .iter()
        .zip(&expected_outputs)
        .map(|(stdin, expected)| JudgeSubmission {
            source_code: source_code.to_owned(),
            language_id,
            stdin: stdin.clone(),
            expected_output: expected.clone(),
        })
        .collect();

    let results = state.judge().run(submissions).await?;
    let verdict = verdict_of(&results);

    let cases = results
        .into_iter()
        .zip(expected_outputs)
        .enumerate()
        .map(|(i, (result, expected))| CaseResult {
            test_case: i + 1,
            passed: result.accepted(),
            stdout: result.stdout,
            expected,
            stderr: result.stderr,
            compile_output: result.compile_output,
            status: result.status.description,
            time: result.time,
            memory: result.memory,
        })
        .collect();

    Ok((cases, verdict))
}
