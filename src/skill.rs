use feruca::Collator;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// One competency and its proficiency percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: f64,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: f64) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    /// Accept an entry only if `name` is a string and `level` is a number.
    /// Extra fields are ignored; anything else yields `None`.
    pub fn from_value(entry: &Value) -> Option<Self> {
        let name = entry.get("name")?.as_str()?;
        let level = entry.get("level")?.as_f64()?;
        Some(Self::new(name, level))
    }

    /// Class attached to the label element: `skill-<lowercased name>`
    pub fn class_name(&self) -> String {
        format!("skill-{}", self.name.to_lowercase())
    }

    /// `72%`, `72.5%`
    pub fn percent(&self) -> String {
        format!("{}%", format_level(self.level))
    }
}

/// Print a level the way a JavaScript number prints: no fractional part
/// for integral values, exponent form below 1e-6 and from 1e21 up.
pub fn format_level(level: f64) -> String {
    if level == 0.0 {
        // covers -0
        return "0".to_string();
    }
    if level.is_nan() {
        return "NaN".to_string();
    }
    if level.is_infinite() {
        let sign = if level < 0.0 { "-" } else { "" };
        return format!("{}Infinity", sign);
    }

    let magnitude = level.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{:e}", level);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        };
    }

    format!("{}", level)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Level,
}

impl SortKey {
    pub fn as_str(&self) -> &str {
        match self {
            SortKey::Name => "name",
            SortKey::Level => "level",
        }
    }

    /// Translate a button's data attribute. Anything other than `"name"`,
    /// a missing attribute included, sorts by level.
    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr {
            Some("name") => SortKey::Name,
            _ => SortKey::Level,
        }
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_attr(Some(s)))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}

/// Locale-aware name ordering using the Unicode Collation Algorithm with
/// the CLDR root tailoring ("Élixir" < "Go", "go" < "Go").
pub struct NameCollator {
    collator: Collator,
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

impl NameCollator {
    pub fn new() -> Self {
        Self {
            collator: Collator::default(),
        }
    }

    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        self.collator
            .collate(a, b)
            .then_with(|| compare_names_caseless(a, b))
    }
}

/// One-off comparison; sorting should reuse a `NameCollator`.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NameCollator::new().compare(a, b)
}

/// Tie break for names the collator ranks equal: case-insensitive first,
/// lowercase before uppercase, then code points.
fn compare_names_caseless(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if primary != Ordering::Equal {
        return primary;
    }

    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            match (ca.is_lowercase(), cb.is_lowercase()) {
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                _ => {}
            }
        }
    }

    a.cmp(b)
}

pub fn compare_levels(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_accepts_valid_entry() {
        let skill = Skill::from_value(&json!({"name": "Rust", "level": 80})).unwrap();
        assert_eq!(skill, Skill::new("Rust", 80.0));
    }

    #[test]
    fn test_from_value_ignores_extra_fields() {
        let skill =
            Skill::from_value(&json!({"name": "Go", "level": 40, "years": 3})).unwrap();
        assert_eq!(skill.name, "Go");
        assert_eq!(skill.level, 40.0);
    }

    #[test]
    fn test_from_value_rejects_wrong_types() {
        assert!(Skill::from_value(&json!({"name": 5, "level": 10})).is_none());
        assert!(Skill::from_value(&json!({"name": "Go", "level": "10"})).is_none());
        assert!(Skill::from_value(&json!({"name": "Go"})).is_none());
        assert!(Skill::from_value(&json!({"level": 10})).is_none());
        assert!(Skill::from_value(&json!(null)).is_none());
        assert!(Skill::from_value(&json!("Go")).is_none());
        assert!(Skill::from_value(&json!([1, 2])).is_none());
    }

    #[test]
    fn test_class_name_lowercases() {
        assert_eq!(Skill::new("C++", 72.0).class_name(), "skill-c++");
        assert_eq!(Skill::new("JavaScript", 1.0).class_name(), "skill-javascript");
    }

    #[test]
    fn test_format_level() {
        assert_eq!(format_level(72.0), "72");
        assert_eq!(format_level(72.5), "72.5");
        assert_eq!(format_level(0.0), "0");
        assert_eq!(format_level(-3.0), "-3");
        assert_eq!(format_level(-0.0), "0");
        assert_eq!(format_level(0.000001), "0.000001");
        assert_eq!(format_level(1e20), "100000000000000000000");
        assert_eq!(Skill::new("x", 100.0).percent(), "100%");
    }

    #[test]
    fn test_sort_key_from_attr_falls_back_to_level() {
        assert_eq!(SortKey::from_attr(Some("name")), SortKey::Name);
        assert_eq!(SortKey::from_attr(Some("level")), SortKey::Level);
        assert_eq!(SortKey::from_attr(Some("NAME")), SortKey::Level);
        assert_eq!(SortKey::from_attr(Some("")), SortKey::Level);
        assert_eq!(SortKey::from_attr(None), SortKey::Level);
        assert_eq!("bogus".parse::<SortKey>().unwrap(), SortKey::Level);
    }

    #[test]
    fn test_direction_toggle() {
        let dir = SortDirection::default();
        assert_eq!(dir, SortDirection::Ascending);
        assert_eq!(dir.toggled(), SortDirection::Descending);
        assert_eq!(dir.toggled().toggled(), SortDirection::Ascending);
        assert_eq!(
            SortDirection::Descending.apply(Ordering::Less),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_names_case_insensitive_first() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Banana", "apple"), Ordering::Greater);
        assert_eq!(compare_names("go", "Go"), Ordering::Less);
        assert_eq!(compare_names("Go", "Go"), Ordering::Equal);
        assert_eq!(compare_names("C", "C++"), Ordering::Less);
    }

    #[test]
    fn test_compare_names_accented() {
        let mut collator = NameCollator::new();
        assert_eq!(collator.compare("Élixir", "Go"), Ordering::Less);
        assert_eq!(collator.compare("Zig", "Élixir"), Ordering::Greater);
        assert_eq!(collator.compare("resume", "résumé"), Ordering::Less);
        assert_eq!(collator.compare("résumé", "rust"), Ordering::Less);
    }

    #[test]
    fn test_format_level_exponent_form() {
        assert_eq!(format_level(1e-7), "1e-7");
        assert_eq!(format_level(1.5e-7), "1.5e-7");
        assert_eq!(format_level(1e21), "1e+21");
        assert_eq!(format_level(-2.5e22), "-2.5e+22");
        assert_eq!(format_level(f64::INFINITY), "Infinity");
        assert_eq!(format_level(f64::NEG_INFINITY), "-Infinity");
    }
}
