//! CSV Parser Module
//! Turns the published sheet text into team records.
//!
//! Expected layout: `TEAM,FIRST,SECOND,THIRD,POINTS`. Only the team name
//! (column 0) and the points total (column 4) are read. Quoting and escaping
//! are not supported.
//!
//! Points cells accept decimal and exponent forms (`12`, `+5`, `1e3`, `.5`)
//! as well as unsigned `0x`, `0o` and `0b` integers. Infinity and NaN
//! spellings score 0.

/// Column holding the team name.
const TEAM_COL: usize = 0;
/// Column holding the points total.
const POINTS_COL: usize = 4;

/// One parsed leaderboard entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRecord {
    pub team: String,
    pub score: f64,
}

/// Parse CSV text into team records, skipping the header line.
///
/// Rows with an empty first field are dropped. A missing, empty or
/// non-numeric points field scores 0.
pub fn parse_csv(text: &str) -> Vec<TeamRecord> {
    text.trim()
        .split('\n')
        .skip(1)
        .filter_map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let cols: Vec<&str> = line.split(',').collect();

            let team = cols.get(TEAM_COL).map(|s| s.trim()).unwrap_or_default();
            if team.is_empty() {
                return None;
            }

            Some(TeamRecord {
                team: team.to_string(),
                score: parse_score(cols.get(POINTS_COL).copied()),
            })
        })
        .collect()
}

/// Numeric parse of a points cell; anything that is not a finite number is 0.
fn parse_score(cell: Option<&str>) -> f64 {
    cell.map(str::trim)
        .and_then(|s| parse_radix_int(s).or_else(|| s.parse::<f64>().ok()))
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// `0x1A`, `0o17`, `0b101` and their upper-case prefixes. No sign allowed.
fn parse_radix_int(s: &str) -> Option<f64> {
    let prefix = s.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
    .or(Some(f64::NAN))
}
