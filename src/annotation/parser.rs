use crate::annotation::WanIds;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

static BN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"BN_\d{7}").unwrap());
static BL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"BL\d{13}").unwrap());
static SPO: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"SPO-[A-Za-z0-9]{10}-[A-Za-z0-9]{3}").unwrap());
static ICCID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"ICCID\s*=*\s*(\d{20})").unwrap());
static ARQ_IP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"ARQ/IP/\d{5}").unwrap());
static CAS_IP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"CAS/IP/\d{5}").unwrap());
static GROUPED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{3}/\d{8}-\d").unwrap());
static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

const STANDALONE_DIGITS: usize = 7;

/// Which identifier patterns are recognised in device notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParserProfile {
    /// Every provider pattern, followed by standalone 7-digit runs.
    #[default]
    Full,
    /// Standalone 7-digit runs only.
    DigitsOnly,
}

/// Extracts WAN identifiers from free-text notes.
///
/// Patterns are scanned one after the other and their matches concatenated, so a
/// `BL` code always gets a lower label than an `ICCID`, regardless of where they
/// appear in the text. Standalone 7-digit runs come last and are only dropped when
/// the same digits were already collected as a `BN_` code; overlaps with any other
/// pattern are kept.
pub fn extract_wan_ids(notes: Option<&str>, profile: ParserProfile) -> WanIds {
    let Some(notes) = notes.filter(|notes| !notes.is_empty()) else {
        return WanIds::default();
    };

    let mut ids = Vec::new();

    if profile == ParserProfile::Full {
        ids.extend(find_all(&BN, notes));
        ids.extend(find_all(&BL, notes));
        ids.extend(find_all(&SPO, notes));
        ids.extend(ICCID.captures_iter(notes).map(|captures| captures[1].to_string()));
        ids.extend(find_all(&ARQ_IP, notes));
        ids.extend(find_all(&CAS_IP, notes));
        ids.extend(find_all(&GROUPED, notes));
    }

    let standalone = standalone_digit_runs(notes)
        .filter(|digits| !ids.iter().any(|id| id.strip_prefix("BN_") == Some(*digits)))
        .map(str::to_string)
        .collect::<Vec<_>>();
    ids.extend(standalone);

    WanIds::new(ids)
}

fn find_all<'a>(regex: &'a Regex, notes: &'a str) -> impl Iterator<Item = String> + 'a {
    regex.find_iter(notes).map(|m| m.as_str().to_string())
}

// Maximal digit runs are exactly the runs with no digit on either side.
fn standalone_digit_runs(notes: &str) -> impl Iterator<Item = &str> {
    DIGIT_RUN
        .find_iter(notes)
        .map(|m| m.as_str())
        .filter(|run| run.chars().count() == STANDALONE_DIGITS)
}
