//! Rule evaluator - runs every section and derives score and verdict.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::blacklist::{global_blacklist, Blacklist};
use crate::sections::{
    blacklist_section, case_mix_section, digit_section, length_section, special_section,
    SectionResult,
};
use crate::types::{EvaluationResult, Finding, Verdict};

/// Evaluates `password` against the rule set and the process-wide blacklist.
///
/// Never fails; the empty string simply scores 0.
pub fn evaluate(password: &SecretString) -> EvaluationResult {
    evaluate_with(password, global_blacklist())
}

/// Evaluates `password` against an explicit blacklist.
///
/// Every rule runs so that all deficiencies are reported. A blacklist hit
/// then forces the score to 0 whatever the rules awarded.
pub fn evaluate_with(password: &SecretString, blacklist: &Blacklist) -> EvaluationResult {
    let mut findings = Vec::new();
    let mut score: u8 = 0;

    // Orchestrator: execute sections in rule order
    let sections: [(&str, fn(&SecretString) -> SectionResult); 4] = [
        ("length", length_section),
        ("case_mix", case_mix_section),
        ("digit", digit_section),
        ("special", special_section),
    ];

    for (_section_name, section_fn) in sections {
        match section_fn(password) {
            Some(finding) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("section {} failed", _section_name);
                findings.push(finding);
            }
            None => score += 1,
        }
    }

    if let Some(veto) = blacklist_section(password, blacklist) {
        #[cfg(feature = "tracing")]
        tracing::debug!("blacklist veto: score {} forced to 0", score);
        score = 0;
        findings.push(veto);
    }

    let verdict = Verdict::from_score(score);
    findings.push(Finding::verdict(verdict));

    EvaluationResult {
        score,
        findings,
        verdict,
    }
}

/// Evaluates and sends the result through `tx`.
///
/// Nothing is sent when `token` is cancelled before the evaluation
/// completes, so a newer keystroke can supersede a stale request.
/// If the receiver has been dropped the result is discarded.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<EvaluationResult>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled before start");
        return;
    }

    let evaluation = evaluate(password);

    if token.is_cancelled() {
        return;
    }

    if let Err(e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::SPECIAL;
    use crate::types::{FindingKind, PasswordPolicy, Polarity, MAX_SCORE};
    use secrecy::ExposeSecret;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn eval(s: &str) -> EvaluationResult {
        evaluate_with(&secret(s), &Blacklist::builtin())
    }

    #[test]
    fn test_evaluate_empty_password() {
        let evaluation = eval("");

        assert_eq!(evaluation.score, 0);
        assert_eq!(evaluation.verdict, Verdict::Weak);
        assert_eq!(evaluation.findings.len(), 5);
        assert_eq!(evaluation.rule_findings().count(), 4);
        assert!(!evaluation.is_blacklisted());
        assert_eq!(evaluation.progress(), 0.0);
    }

    #[test]
    fn test_evaluate_strong_password() {
        let evaluation = eval("Passw0rd!");

        assert_eq!(evaluation.score, MAX_SCORE);
        assert_eq!(evaluation.verdict, Verdict::Strong);
        assert_eq!(evaluation.findings, vec![Finding::verdict(Verdict::Strong)]);
        assert_eq!(evaluation.findings[0].polarity, Polarity::Confirmation);
        assert_eq!(evaluation.progress(), 1.0);
    }

    #[test]
    fn test_evaluate_blacklisted_password() {
        let evaluation = eval("password");

        assert_eq!(evaluation.score, 0);
        assert_eq!(evaluation.verdict, Verdict::Weak);
        assert!(evaluation.has(FindingKind::TooCommon));
    }

    #[test]
    fn test_blacklist_veto_is_absolute() {
        let blacklist = Blacklist::from_entries(["Tr0ub4dor&3"]);
        let evaluation = evaluate_with(&secret("tR0UB4DOR&3"), &blacklist);

        // Passes every rule on its own
        assert_eq!(evaluation.rule_findings().count(), 1);
        assert_eq!(evaluation.score, 0);
        assert_eq!(evaluation.verdict, Verdict::Weak);
        assert_eq!(
            evaluation.findings,
            vec![
                Finding::deficiency(FindingKind::TooCommon),
                Finding::verdict(Verdict::Weak),
            ]
        );
    }

    #[test]
    fn test_evaluate_moderate_password() {
        let evaluation = eval("Password1");

        assert_eq!(evaluation.score, 3);
        assert_eq!(evaluation.verdict, Verdict::Moderate);
        assert_eq!(
            evaluation.findings,
            vec![
                Finding::deficiency(FindingKind::MissingSpecial),
                Finding::verdict(Verdict::Moderate),
            ]
        );
    }

    #[test]
    fn test_deficiencies_include_non_strong_verdict() {
        let evaluation = eval("Password1");

        let deficiencies: Vec<_> = evaluation.deficiencies().map(|f| f.kind).collect();
        let rule_findings: Vec<_> = evaluation.rule_findings().map(|f| f.kind).collect();

        assert_eq!(
            deficiencies,
            vec![
                FindingKind::MissingSpecial,
                FindingKind::Verdict(Verdict::Moderate),
            ]
        );
        assert_eq!(rule_findings, vec![FindingKind::MissingSpecial]);
    }

    #[test]
    fn test_strong_result_has_no_deficiencies() {
        let evaluation = eval("Passw0rd!");
        assert_eq!(evaluation.deficiencies().count(), 0);
    }

    #[test]
    fn test_concurrent_evaluate_and_generate() {
        let inputs = ["", "password", "Passw0rd!", "Password1", "abc"];
        let expected: Vec<_> = inputs.iter().map(|s| evaluate(&secret(s))).collect();
        let policy = PasswordPolicy::new(14).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(move || {
                    let results: Vec<_> = inputs.iter().map(|s| evaluate(&secret(s))).collect();
                    let generated: Vec<_> = (0..20)
                        .map(|_| crate::generator::generate(&policy).unwrap())
                        .collect();
                    (results, generated)
                })
            })
            .collect();

        for handle in handles {
            let (results, generated) = handle.join().expect("worker panicked");
            assert_eq!(results, expected);
            for pwd in generated {
                assert_eq!(pwd.expose_secret().chars().count(), 14);
            }
        }
    }

    #[test]
    fn test_findings_follow_rule_order() {
        let evaluation = eval("abc");
        let kinds: Vec<_> = evaluation.findings.iter().map(|f| f.kind).collect();

        assert_eq!(
            kinds,
            vec![
                FindingKind::TooShort,
                FindingKind::MissingCaseMix,
                FindingKind::MissingDigit,
                FindingKind::MissingSpecial,
                FindingKind::Verdict(Verdict::Weak),
            ]
        );
    }

    #[test]
    fn test_short_passwords_never_get_length_credit() {
        let samples = ["a", "Ab1!", "Ab1!Ab1", "aaaaaaa", "P@ssw0r", "\u{1F600}\u{1F600}"];
        for s in samples {
            let evaluation = eval(s);
            assert!(evaluation.has(FindingKind::TooShort), "{s}");
            assert!(evaluation.score < MAX_SCORE, "{s}");
        }
    }

    #[test]
    fn test_blacklisted_entries_always_score_zero() {
        for entry in crate::blacklist::BUILTIN_COMMON_PASSWORDS {
            for variant in [entry.to_string(), entry.to_uppercase()] {
                let evaluation = eval(&variant);
                assert_eq!(evaluation.score, 0, "{variant}");
                assert_eq!(evaluation.verdict, Verdict::Weak, "{variant}");
                assert!(evaluation.is_blacklisted(), "{variant}");
            }
        }
    }

    #[test]
    fn test_verdict_is_always_last_and_unique() {
        for s in ["", "password", "Passw0rd!", "Password1", "xY7$"] {
            let evaluation = eval(s);
            let verdicts = evaluation.findings.iter().filter(|f| f.is_verdict()).count();
            assert_eq!(verdicts, 1, "{s}");
            assert!(evaluation.findings.last().unwrap().is_verdict(), "{s}");
            assert_eq!(
                evaluation.findings.last().unwrap().kind,
                FindingKind::Verdict(evaluation.verdict)
            );
        }
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let pwd = secret("Hello World 42");
        assert_eq!(evaluate(&pwd), evaluate(&pwd));
    }

    #[test]
    fn test_each_special_char_counts() {
        for c in SPECIAL.chars() {
            let evaluation = eval(&format!("Abcdefg1{c}"));
            assert_eq!(evaluation.score, MAX_SCORE, "{c}");
        }
    }

    #[test]
    fn test_global_evaluate_uses_builtin_entries() {
        let evaluation = evaluate(&secret("WELCOME"));
        assert!(evaluation.is_blacklisted());
        assert_eq!(evaluation.score, 0);
    }
}
