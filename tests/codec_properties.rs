use ms_codec::units::{DAY, HOUR, MINUTE, SECOND, WEEK, YEAR};
use ms_codec::{
    Converted, FormatError, FormatOptions, Options, ParseOptions, UNIT_SPELLINGS, Value, convert,
    ShowKey, format, parse, unit_table,
};

#[test]
fn single_terms_equal_value_times_multiplier() {
    let values = [0.0, 1.0, 2.5, -3.25, 0.5, 42.0];
    for &(spelling, unit) in UNIT_SPELLINGS {
        for value in values {
            let text = format!("{value}{spelling}");
            let parsed = parse(&text, &ParseOptions::default())
                .unwrap_or_else(|err| panic!("{text}: {err}"));
            assert_eq!(parsed, value * unit.millis() as f64, "{text}");
        }
    }
}

#[test]
fn documented_parse_examples() {
    let single = ParseOptions::default();
    assert!(parse("", &single).is_err());
    assert!(parse("abc", &single).is_err());
    assert_eq!(parse("100", &single), Ok(100.0));

    let unique = ParseOptions::unique();
    assert!(parse("2y3y", &unique).is_err());
    assert!(parse("4m3min", &unique).is_err());
    assert_eq!(
        parse("4h3m2d", &unique),
        Ok((4 * HOUR + 3 * MINUTE + 2 * DAY) as f64)
    );
}

#[test]
fn compound_order_does_not_change_the_total() {
    let opts = ParseOptions::compound();
    assert_eq!(parse("1h30m", &opts), parse("30m1h", &opts));
    assert_eq!(parse("1w 2d 3s", &opts), parse("3s 1w 2d", &opts));
    assert_eq!(
        parse("1w 2d 3s", &opts),
        Ok((WEEK + 2 * DAY + 3 * SECOND) as f64)
    );
}

#[test]
fn documented_format_examples() {
    let defaults = FormatOptions::default();
    assert_eq!(format(0.0, &defaults).unwrap(), "0ms");
    let verbose = FormatOptions {
        verbose: true,
        ..FormatOptions::default()
    };
    assert_eq!(format(0.0, &verbose).unwrap(), "0 milliseconds");
    assert_eq!(format(3_661_000.0, &defaults).unwrap(), "1h 1m 1s");

    let colon = FormatOptions {
        colonify: true,
        ..FormatOptions::default()
    };
    let ms = (5 * HOUR + MINUTE + 45 * SECOND + 240) as f64;
    assert_eq!(format(ms, &colon).unwrap(), "5:01:45.240");
}

#[test]
fn compact_returns_a_single_token() {
    let compact = FormatOptions {
        compact: true,
        ..FormatOptions::default()
    };
    for ms in [1.0, 999.0, 61_000.0, 3_661_000.0, (3 * YEAR) as f64] {
        let text = format(ms, &compact).unwrap();
        assert_eq!(text.split_whitespace().count(), 1, "{ms} -> {text}");
    }
}

#[test]
fn colon_with_compact_always_fails() {
    let opts = FormatOptions {
        colonify: true,
        compact: true,
        ..FormatOptions::default()
    };
    for ms in [0.0, 1.0, -5.0, 1e12] {
        assert_eq!(format(ms, &opts), Err(FormatError::ColonConflict));
    }
}

#[test]
fn repeated_calls_agree() {
    let opts = FormatOptions {
        units: Some(2),
        ..FormatOptions::default()
    };
    assert_eq!(format(93_784_005.0, &opts), format(93_784_005.0, &opts));
    let parse_opts = ParseOptions::compound();
    assert_eq!(parse("1d 2h", &parse_opts), parse("1d 2h", &parse_opts));
}

#[test]
fn formatted_output_parses_back_to_the_same_count() {
    let parse_opts = ParseOptions::unique();
    for ms in [1.0, 1_500.0, 3_661_000.0, 93_784_005.0] {
        let text = format(ms, &FormatOptions::default()).unwrap();
        assert_eq!(parse(&text, &parse_opts), Ok(ms), "{text}");
    }
}

#[test]
fn convert_dispatches_on_value_kind() {
    let options = Options::default();
    assert_eq!(
        convert(&Value::from("1.5s"), &options),
        Ok(Converted::Millis(1500.0))
    );
    assert_eq!(
        convert(&Value::from(1500_i64), &options),
        Ok(Converted::Text("1s 500ms".to_string()))
    );
    let err = convert(&Value::Millis(f64::INFINITY), &options).unwrap_err();
    assert_eq!(err.message(), "Value is not a string or number. value=null");
}

#[test]
fn unit_table_is_exposed_read_only() {
    let table = unit_table();
    assert_eq!(table["years"], YEAR);
    assert_eq!(table["msec"], 1);
    assert!(table.values().all(|&ms| ms > 0));
}

fn field_limit(suffix: &str) -> Option<f64> {
    match suffix {
        "ms" => Some(1000.0),
        "s" => Some(60.0),
        "m" => Some(60.0),
        "h" => Some(24.0),
        "d" => Some(365.0),
        "y" => None,
        other => panic!("unexpected suffix {other:?}"),
    }
}

#[test]
fn rendered_fields_stay_below_their_modulus() {
    let inputs = [
        0.6,
        999.6,
        1999.7,
        59_999.0,
        59_999.9,
        119_999.0,
        3_599_999.9,
        (DAY - 1) as f64,
        (365 * DAY) as f64 - 0.4,
        -59_999.9,
    ];
    let variants = [
        FormatOptions::default(),
        FormatOptions {
            omit: vec![ShowKey::Millis],
            ..FormatOptions::default()
        },
        FormatOptions {
            omit: vec![ShowKey::Millis, ShowKey::Seconds],
            seconds_digits: 3,
            ms_digits: 2,
            ..FormatOptions::default()
        },
    ];

    for opts in &variants {
        for ms in inputs {
            let text = format(ms, opts).unwrap();
            for token in text.split(' ') {
                let split = token
                    .find(|c: char| c.is_ascii_alphabetic())
                    .unwrap_or_else(|| panic!("{ms} -> {text}: no suffix in {token:?}"));
                let (number, suffix) = token.split_at(split);
                let value: f64 = number.parse().expect("numeric field");
                if let Some(limit) = field_limit(suffix) {
                    assert!(value.abs() < limit, "{ms} -> {text} with {opts:?}");
                }
            }
        }
    }
}
