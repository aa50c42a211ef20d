use super::{parse_descriptor, season_glyph, sort_periods, ParseError, PeriodDescriptor};

fn parsed(file_name: &str) -> PeriodDescriptor {
    parse_descriptor(file_name).expect("parse descriptor")
}

#[test]
fn parses_conventional_filename() {
    let period = parsed("2025_4_fall.json");
    assert_eq!(
        period,
        PeriodDescriptor {
            key: "2025_4_fall".to_string(),
            year: 2025,
            season: "FALL".to_string(),
            label: "2025年 秋".to_string(),
        }
    );
}

#[test]
fn known_season_codes_map_to_glyphs() {
    assert_eq!(season_glyph("winter"), "冬");
    assert_eq!(season_glyph("spring"), "春");
    assert_eq!(season_glyph("summer"), "夏");
    assert_eq!(season_glyph("fall"), "秋");
}

#[test]
fn unknown_season_code_is_rendered_raw() {
    let period = parsed("2023_9_autumn.json");
    assert_eq!(period.season, "AUTUMN");
    assert_eq!(period.label, "2023年 autumn");

    // Lookup is on the code as written, so capitalized codes are not translated.
    let period = parsed("2023_1_Winter.json");
    assert_eq!(period.season, "WINTER");
    assert_eq!(period.label, "2023年 Winter");
}

#[test]
fn extra_segments_are_ignored() {
    let period = parsed("2024_2_spring_backup.json");
    assert_eq!(period.key, "2024_2_spring_backup");
    assert_eq!(period.season, "SPRING");
    assert_eq!(period.label, "2024年 春");
}

#[test]
fn malformed_names_are_reported() {
    assert_eq!(parse_descriptor(".json"), Err(ParseError::EmptyKey));
    assert_eq!(
        parse_descriptor("2025_fall.json"),
        Err(ParseError::MissingSegments { found: 2 })
    );
    assert_eq!(
        parse_descriptor("latest_1_fall.json"),
        Err(ParseError::InvalidYear {
            segment: "latest".to_string()
        })
    );
}

#[test]
fn empty_season_segment_still_yields_a_period() {
    let period = parsed("2025_1_.json");
    assert_eq!(period.key, "2025_1_");
    assert_eq!(period.season, "");
    assert_eq!(period.label, "2025年 ");
}

#[test]
fn year_wider_than_32_bits_parses() {
    let period = parsed("12345678901_1_fall.json");
    assert_eq!(period.year, 12_345_678_901);
    assert_eq!(period.label, "12345678901年 秋");
}

#[test]
fn sorts_by_year_descending_then_season_ascending() {
    let mut periods = vec![
        parsed("2024_2_spring.json"),
        parsed("2025_1_winter.json"),
        parsed("2025_4_fall.json"),
        parsed("2025_3_summer.json"),
    ];
    sort_periods(&mut periods);
    let keys: Vec<&str> = periods.iter().map(|period| period.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["2025_4_fall", "2025_3_summer", "2025_1_winter", "2024_2_spring"]
    );
}

#[test]
fn residual_ties_keep_input_order() {
    let mut periods = vec![parsed("2025_2_fall.json"), parsed("2025_1_fall.json")];
    sort_periods(&mut periods);
    assert_eq!(periods[0].key, "2025_2_fall");
    assert_eq!(periods[1].key, "2025_1_fall");
}
