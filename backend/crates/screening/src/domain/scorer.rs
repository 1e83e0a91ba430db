//! Email Risk Scorer
//!
//! Pure, offline classification of candidate email addresses. One pass,
//! no I/O, no shared state: every input string maps to an
//! [`EmailVerdict`], never to an error.
//!
//! ## 設計方針
//! - 参照テーブル（使い捨てドメイン・信頼ドメイン・疑わしいパターン）は
//!   コードではなく設定（[`RiskPolicy`]）として持つ
//! - 閾値もプロファイルごとに差し替え可能（lenient / strict）
//! - スコアは 0〜100 に飽和クランプされる
//!
//! ## Scoring order
//! 1. Empty input - hard stop at 100
//! 2. Structural shape check (`local@domain.tld`)
//! 3. Disposable-domain list - hard stop at 100
//! 4. First matching suspicious pattern (never stacks)
//! 5. Trusted-domain bonus / obscure-domain penalty
//! 6. Local-part length, digit density, repeated punctuation,
//!    domain well-formedness (strict profile)
//! 7. Threshold decision: reject / advisory / clean

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::value_object::risk::{EmailVerdict, RiskScore};

/// Shape check: something@something.something, no whitespace
static FORMAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid format regex"));

/// Run of 3+ separator characters (strict profile)
static SPECIAL_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.+_-]{3,}").expect("valid separator-run regex"));

// ============================================================================
// Default reference tables
// ============================================================================

/// Known disposable/temporary-email providers (hard reject)
const DISPOSABLE_DOMAINS: &[&str] = &[
    "10minutemail.com",
    "guerrillamail.com",
    "mailinator.com",
    "tempmail.org",
    "temp-mail.org",
    "yopmail.com",
    "throwaway.email",
    "getnada.com",
    "maildrop.cc",
    "33mail.com",
    "trashmail.com",
    "dispostable.com",
    "spamgourmet.com",
    "sharklasers.com",
    "guerrillamailblock.com",
    "pokemail.net",
    "spam4.me",
    "bccto.me",
    "chacuo.net",
    "cookmail.info",
    "email60.com",
    "emailias.com",
    "hide.biz.st",
    "mytrashmail.com",
    "shieldedmail.com",
    "spamavert.com",
    "tempinbox.com",
    "tempmailaddress.com",
    "tempymail.com",
    "thankyou2010.com",
    "trbvm.com",
    "wegwerfmail.de",
    "zehnminutenmail.de",
];

/// Additional disposable providers carried by the strict profile
const DISPOSABLE_DOMAINS_STRICT_EXTRA: &[&str] = &[
    "mohmal.com",
    "minuteinbox.com",
    "armyspy.com",
    "cuvox.de",
    "dayrep.com",
    "einrot.com",
    "fleckens.hu",
    "gustr.com",
    "jourrapide.com",
    "rhyta.com",
    "superrito.com",
    "teleworm.us",
];

/// Major, long-established consumer providers (score bonus)
const TRUSTED_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
    "protonmail.com",
    "aol.com",
    "live.com",
    "msn.com",
    "mail.com",
    "zoho.com",
    "yandex.com",
    "fastmail.com",
];

/// Reserved placeholder words for the local-part pattern table
const PLACEHOLDER_WORDS: &[&str] = &[
    "test", "fake", "spam", "temp", "demo", "admin", "null", "noreply",
];

const SUSPICIOUS_PATTERN_MESSAGE: &str = "Email pattern appears suspicious";

// ============================================================================
// Pattern table
// ============================================================================

/// One entry in the ordered suspicious-pattern table
#[derive(Debug, Clone)]
pub struct SuspiciousPattern {
    pub pattern: Regex,
    pub penalty: u8,
    pub message: String,
}

impl SuspiciousPattern {
    pub fn new(pattern: &str, penalty: u8, message: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            penalty,
            message: message.to_string(),
        })
    }
}

/// Build the default ordered pattern table
///
/// Order matters: evaluation stops at the first hit.
fn default_patterns(penalty: u8, digits_only_min: u8, multi_plus: bool) -> Vec<SuspiciousPattern> {
    let mut patterns = Vec::new();

    let mut push = |raw: &str| {
        // Pattern literals are compile-time constants; a failure here is a bug
        patterns.push(
            SuspiciousPattern::new(raw, penalty, SUSPICIOUS_PATTERN_MESSAGE)
                .expect("valid built-in pattern"),
        );
    };

    // Short alphabetic prefix followed by a long digit run
    push(r"^[a-z]+\d{4,}@");
    // Reserved placeholder words, optionally followed by digits
    for word in PLACEHOLDER_WORDS {
        push(&format!(r"^{}\d*@", word));
    }
    // Digits-only local part
    push(&format!(r"^\d{{{},}}@", digits_only_min));
    // 1-2 letter local part
    push(r"^[a-z]{1,2}@");
    // Two or more literal plus separators
    if multi_plus {
        push(r"^.+\+.+\+.+@");
    }

    patterns
}

// ============================================================================
// Policy
// ============================================================================

/// All knobs of the scorer: thresholds, weights, and reference tables
///
/// `default()` is the lenient profile (reject at 70, keep scoring after a
/// format failure). `strict()` is the server profile (reject at 60,
/// short-circuit on format failure, heavier penalties, larger
/// disposable list). Both are plain data and can be replaced wholesale
/// from a JSON file without touching the scorer.
#[derive(Debug, Clone)]
pub struct RiskPolicy {
    /// Score at or above which the address is rejected
    pub reject_threshold: u8,
    /// Score at or above which an advisory warning is attached
    pub advisory_threshold: u8,
    /// Stop scoring (at 100) when the shape check fails
    pub short_circuit_on_format_error: bool,
    /// Penalty for failing the shape check (when not short-circuiting)
    pub format_penalty: u8,
    /// Penalty for a domain outside the trusted list
    pub obscure_domain_penalty: u8,
    /// Bonus subtracted for a trusted domain
    pub trusted_domain_bonus: u8,
    /// Local part shorter than `min_local_chars`
    pub short_local_penalty: u8,
    /// Local part longer than `max_local_chars`
    pub long_local_penalty: u8,
    pub min_local_chars: usize,
    pub max_local_chars: usize,
    /// Digit count exceeding `digit_density_ratio` x local length
    pub digit_density_penalty: u8,
    pub digit_density_ratio: f64,
    /// `..` or `++` anywhere in the address (lenient profile)
    pub repeated_special_penalty: Option<u8>,
    /// Run of 3+ of `. + _ -` (strict profile)
    pub special_run_penalty: Option<u8>,
    /// Domain without a dot or shorter than 4 chars (strict profile)
    pub malformed_domain_penalty: Option<u8>,
    pub disposable_domains: HashSet<String>,
    pub trusted_domains: HashSet<String>,
    pub suspicious_patterns: Vec<SuspiciousPattern>,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            reject_threshold: 70,
            advisory_threshold: 40,
            short_circuit_on_format_error: false,
            format_penalty: 50,
            obscure_domain_penalty: 10,
            trusted_domain_bonus: 20,
            short_local_penalty: 20,
            long_local_penalty: 15,
            min_local_chars: 3,
            max_local_chars: 30,
            digit_density_penalty: 15,
            digit_density_ratio: 0.7,
            repeated_special_penalty: Some(20),
            special_run_penalty: None,
            malformed_domain_penalty: None,
            disposable_domains: DISPOSABLE_DOMAINS.iter().map(|s| s.to_string()).collect(),
            trusted_domains: TRUSTED_DOMAINS.iter().map(|s| s.to_string()).collect(),
            suspicious_patterns: default_patterns(30, 10, false),
        }
    }
}

impl RiskPolicy {
    /// Strict profile: lower reject threshold, short-circuit on format
    /// failure, heavier penalties, extended disposable list
    pub fn strict() -> Self {
        let disposable_domains = DISPOSABLE_DOMAINS
            .iter()
            .chain(DISPOSABLE_DOMAINS_STRICT_EXTRA)
            .map(|s| s.to_string())
            .collect();

        Self {
            reject_threshold: 60,
            short_circuit_on_format_error: true,
            digit_density_penalty: 20,
            repeated_special_penalty: None,
            special_run_penalty: Some(25),
            malformed_domain_penalty: Some(30),
            disposable_domains,
            suspicious_patterns: default_patterns(40, 8, true),
            ..Self::default()
        }
    }

    /// Load a policy from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, PolicyLoadError> {
        let file: RiskPolicyFile = serde_json::from_str(json)?;
        file.into_policy()
    }
}

/// Policy file parsing/compilation errors
#[derive(Debug, Error)]
pub enum PolicyLoadError {
    #[error("Failed to parse policy file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown policy profile: {0}")]
    UnknownProfile(String),

    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// JSON shape of an externally maintained policy
///
/// Every field is optional; absent fields keep the base profile's value.
/// Tables replace the base table wholesale when present.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RiskPolicyFile {
    /// Base profile: "default" (lenient) or "strict"
    pub profile: Option<String>,
    pub reject_threshold: Option<u8>,
    pub advisory_threshold: Option<u8>,
    pub short_circuit_on_format_error: Option<bool>,
    pub disposable_domains: Option<Vec<String>>,
    pub trusted_domains: Option<Vec<String>>,
    pub suspicious_patterns: Option<Vec<PatternSpec>>,
}

/// One pattern+penalty+message triple in a policy file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSpec {
    pub pattern: String,
    pub penalty: u8,
    pub message: String,
}

impl RiskPolicyFile {
    pub fn into_policy(self) -> Result<RiskPolicy, PolicyLoadError> {
        let mut policy = match self.profile.as_deref() {
            None | Some("default") => RiskPolicy::default(),
            Some("strict") => RiskPolicy::strict(),
            Some(other) => return Err(PolicyLoadError::UnknownProfile(other.to_string())),
        };

        if let Some(threshold) = self.reject_threshold {
            policy.reject_threshold = threshold;
        }
        if let Some(threshold) = self.advisory_threshold {
            policy.advisory_threshold = threshold;
        }
        if let Some(short_circuit) = self.short_circuit_on_format_error {
            policy.short_circuit_on_format_error = short_circuit;
        }
        if let Some(domains) = self.disposable_domains {
            policy.disposable_domains = domains.into_iter().collect();
        }
        if let Some(domains) = self.trusted_domains {
            policy.trusted_domains = domains.into_iter().collect();
        }
        if let Some(specs) = self.suspicious_patterns {
            let mut patterns = Vec::with_capacity(specs.len());
            for spec in specs {
                let compiled = SuspiciousPattern::new(&spec.pattern, spec.penalty, &spec.message)
                    .map_err(|source| PolicyLoadError::InvalidPattern {
                        pattern: spec.pattern.clone(),
                        source,
                    })?;
                patterns.push(compiled);
            }
            policy.suspicious_patterns = patterns;
        }

        Ok(policy)
    }
}

// ============================================================================
// Scorer
// ============================================================================

/// Stateless evaluation of one email address against a [`RiskPolicy`]
///
/// Safe to call concurrently; holds nothing but a policy reference.
pub struct EmailRiskScorer<'a> {
    policy: &'a RiskPolicy,
}

impl<'a> EmailRiskScorer<'a> {
    pub fn new(policy: &'a RiskPolicy) -> Self {
        Self { policy }
    }

    /// Classify a candidate address
    ///
    /// Never panics and never errors: malformed input produces an
    /// invalid verdict, not an exception. Input is lowercased and
    /// trimmed before any check, so verdicts are stable across
    /// whitespace/casing variants.
    pub fn evaluate(&self, email: &str) -> EmailVerdict {
        let policy = self.policy;
        let mut verdict = EmailVerdict::accept();
        let normalized = email.trim().to_lowercase();

        if normalized.is_empty() {
            verdict.reject("Email is required");
            verdict.risk_score = RiskScore::MAX;
            return verdict;
        }

        if !FORMAT_RE.is_match(&normalized) {
            verdict.reject("Invalid email format");
            if policy.short_circuit_on_format_error {
                verdict.risk_score = RiskScore::MAX;
                return verdict;
            }
            // Lenient profile keeps scoring so the caller still gets the
            // full diagnostic picture for the parts that do parse
            verdict.risk_score.add(policy.format_penalty);
        }

        // Domain is everything after the last @
        let Some((local, domain)) = split_address(&normalized) else {
            verdict.reject("Invalid email domain");
            verdict.risk_score = RiskScore::MAX;
            return verdict;
        };

        if policy.disposable_domains.contains(domain) {
            verdict.reject("Disposable email addresses are not allowed");
            verdict.risk_score = RiskScore::MAX;
            return verdict;
        }

        // First hit only; multiple matches never stack
        for suspicious in &policy.suspicious_patterns {
            if suspicious.pattern.is_match(&normalized) {
                verdict.risk_score.add(suspicious.penalty);
                verdict.warn(suspicious.message.clone());
                break;
            }
        }

        if policy.trusted_domains.contains(domain) {
            verdict.risk_score.subtract(policy.trusted_domain_bonus);
        } else {
            verdict.risk_score.add(policy.obscure_domain_penalty);
        }

        let local_chars = local.chars().count();
        if local_chars < policy.min_local_chars {
            verdict.risk_score.add(policy.short_local_penalty);
            verdict.warn("Email username is very short");
        } else if local_chars > policy.max_local_chars {
            verdict.risk_score.add(policy.long_local_penalty);
            verdict.warn("Unusually long email username");
        }

        // Digit density is measured over the whole address but scaled by
        // the local-part length, matching the original heuristic
        let digit_count = normalized.chars().filter(char::is_ascii_digit).count();
        if digit_count as f64 > local_chars as f64 * policy.digit_density_ratio {
            verdict.risk_score.add(policy.digit_density_penalty);
            verdict.warn("Email contains unusually many numbers");
        }

        if let Some(penalty) = policy.repeated_special_penalty {
            if normalized.contains("..") || normalized.contains("++") {
                verdict.risk_score.add(penalty);
                verdict.warn("Email contains suspicious character patterns");
            }
        }
        if let Some(penalty) = policy.special_run_penalty {
            if SPECIAL_RUN_RE.is_match(&normalized) {
                verdict.risk_score.add(penalty);
                verdict.warn("Email contains suspicious character patterns");
            }
        }

        if let Some(penalty) = policy.malformed_domain_penalty {
            if !domain.contains('.') || domain.len() < 4 {
                verdict.risk_score.add(penalty);
                verdict.warn("Domain appears invalid");
            }
        }

        if verdict.risk_score.value() >= policy.reject_threshold {
            verdict.reject("Email appears to be fake or suspicious");
        } else if verdict.risk_score.value() >= policy.advisory_threshold {
            verdict.warn("Email may be risky - please verify carefully");
        }

        verdict
    }
}

/// Split on the last `@`; `None` when the domain segment is missing
fn split_address(email: &str) -> Option<(&str, &str)> {
    match email.rsplit_once('@') {
        Some((local, domain)) if !domain.is_empty() => Some((local, domain)),
        _ => None,
    }
}
