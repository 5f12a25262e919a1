//! Typed lookup behavior, including fallbacks.

use pretty_assertions::assert_eq;
use revid_config::{ConfigKey, OptionEnum, OptionLookup, OptionTable};
use rstest::rstest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mode {
    #[default]
    None,
    Fast,
    Thorough,
}

impl OptionEnum for Mode {
    const MEMBERS: &'static [Self] = &[Self::None, Self::Fast, Self::Thorough];

    fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Fast => "Fast",
            Self::Thorough => "Thorough",
        }
    }

    fn discriminant(self) -> i32 {
        self as i32
    }
}

#[test]
fn test_string_default_when_missing() {
    let table = OptionTable::parse("Other = 1");
    assert_eq!(table.get_string_or("MISSING", "default"), "default");
}

#[test]
fn test_string_default_with_absent_table() {
    let table: Option<&OptionTable> = None;
    assert_eq!(table.get_string_or("MISSING", "default"), "default");
    assert_eq!(table.try_get_int("MISSING"), None);
    assert_eq!(table.get_enum_or("MISSING", Mode::Fast), Mode::Fast);
}

#[test]
fn test_present_table_through_option() {
    let parsed = OptionTable::parse("Prefix = v");
    let table = Some(&parsed);
    assert_eq!(table.get_string_or(ConfigKey::Prefix, ""), "v");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t")]
fn test_blank_key_is_not_found(#[case] key: &str) {
    let table = OptionTable::parse("A = 1");
    assert_eq!(table.try_get_string(key), None);
    assert_eq!(table.get_string_or(key, "d"), "d");
}

#[test]
fn test_string_value_is_verbatim() {
    let table = OptionTable::parse("Suffix =   -rc.1+Meta");
    assert_eq!(table.get_string_or(ConfigKey::Suffix, ""), "-rc.1+Meta");
}

#[rstest]
#[case("a, b, c", vec!["a", "b", "c"])]
#[case("a,b", vec!["a,b"])]
#[case("a, b,,c", vec!["a", "b,,c"])]
#[case("a, , b", vec!["a", "b"])]
#[case("v*, , x", vec!["v*", "x"])]
#[case("single", vec!["single"])]
#[case("", vec![])]
fn test_list_splits_on_comma_space_only(#[case] raw: &str, #[case] expected: Vec<&str>) {
    let table = OptionTable::parse(&format!("MatchPatterns = {raw}"));
    let list = table.try_get_list(ConfigKey::MatchPatterns).unwrap();
    assert_eq!(list, expected);
}

#[test]
fn test_list_default_when_missing() {
    let table = OptionTable::parse("");
    assert_eq!(table.try_get_list(ConfigKey::ExcludePatterns), None);
    assert_eq!(
        table.get_list_or(ConfigKey::ExcludePatterns, vec!["x".to_string()]),
        vec!["x".to_string()]
    );
}

#[rstest]
#[case("42", Some(42))]
#[case("-7", Some(-7))]
#[case("+3", Some(3))]
#[case(" 12 ", Some(12))]
#[case("2147483647", Some(i32::MAX))]
#[case("2147483648", None)]
#[case("1.5", None)]
#[case("0x10", None)]
#[case("ten", None)]
#[case("", None)]
fn test_int_parsing(#[case] raw: &str, #[case] expected: Option<i32>) {
    let table = OptionTable::parse(&format!("CandidateAmount = {raw}"));
    assert_eq!(table.try_get_int(ConfigKey::CandidateAmount), expected);
    assert_eq!(
        table.get_int_or(ConfigKey::CandidateAmount, -1),
        expected.unwrap_or(-1)
    );
}

#[rstest]
#[case("Fast", Some(Mode::Fast))]
#[case("thorough", Some(Mode::Thorough))]
#[case("2", Some(Mode::Thorough))]
#[case("None", None)]
#[case("0", None)]
#[case("7", None)]
#[case("Slow", None)]
fn test_enum_parsing(#[case] raw: &str, #[case] expected: Option<Mode>) {
    let table = OptionTable::parse(&format!("Mode = {raw}"));
    assert_eq!(table.try_get_enum::<Mode>("mode"), expected);
    assert_eq!(
        table.get_enum_or("mode", Mode::Fast),
        expected.unwrap_or(Mode::Fast)
    );
}

#[test]
fn test_end_to_end_configuration_scenario() {
    let text = "MajorVersion = 2\nMinorVersion=5\n; comment\nGitReferenceType = Tags\n";
    let table = OptionTable::parse(text);

    assert_eq!(table.try_get_string(ConfigKey::MajorVersion), Some("2"));
    assert_eq!(table.get_int_or(ConfigKey::MajorVersion, 0), 2);
    assert_eq!(table.try_get_string(ConfigKey::MinorVersion), Some("5"));
    assert_eq!(table.try_get_string(ConfigKey::GitReferenceType), Some("Tags"));
}
