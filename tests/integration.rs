use qtty::{Second, Seconds};
use tempspan::{
    day, hour, microsecond, millisecond, minute, second, week, FormatMode, FormatOptions,
    Interval, IntervalError, Unit,
};

/// Value of one `row` unit expressed in each column unit.
fn truth_table() -> [[f64; 7]; 7] {
    const US: [f64; 7] = [
        1.0,
        1_000.0,
        1_000.0 * 1_000.0,
        60.0 * 1_000.0 * 1_000.0,
        60.0 * 60.0 * 1_000.0 * 1_000.0,
        24.0 * 60.0 * 60.0 * 1_000.0 * 1_000.0,
        7.0 * 24.0 * 60.0 * 60.0 * 1_000.0 * 1_000.0,
    ];
    let mut table = [[0.0; 7]; 7];
    for (row, from) in US.iter().enumerate() {
        for (col, to) in US.iter().enumerate() {
            table[row][col] = if row >= col { from / to } else { 1.0 / (to / from) };
        }
    }
    table
}

fn convert_all(interval: Interval) -> [Interval; 7] {
    [
        interval.to_microseconds(),
        interval.to_milliseconds(),
        interval.to_seconds(),
        interval.to_minutes(),
        interval.to_hours(),
        interval.to_days(),
        interval.to_weeks(),
    ]
}

#[test]
fn conversion_truth_table_is_exact() {
    let table = truth_table();
    for (row, unit) in Unit::ALL.into_iter().enumerate() {
        let one = Interval::new(unit, 1.0).unwrap();
        for (col, converted) in convert_all(one).into_iter().enumerate() {
            assert_eq!(converted.unit(), Unit::ALL[col]);
            assert_eq!(
                converted.value(),
                table[row][col],
                "{} -> {:?}",
                one,
                Unit::ALL[col]
            );
        }
    }
}

#[test]
fn documented_conversions() {
    assert_eq!(second(1.0).unwrap().to_minutes().value(), 1.0 / 60.0);
    assert_eq!(day(1.0).unwrap().to_weeks().value(), 1.0 / 7.0);
    assert_eq!(week(1.0).unwrap().to_days().value(), 7.0);
    assert_eq!(hour(1.0).unwrap().to_microseconds().value(), 3_600_000_000.0);
}

#[test]
fn roundtrip_through_every_unit() {
    for from in Unit::ALL {
        for to in Unit::ALL {
            for v in [0.0, 1.0, -3.5, 123_456.789, 1e-3] {
                let back = Interval::new(from, v).unwrap().to(to).to(from);
                assert!(
                    (back.value() - v).abs() <= 1e-12 * v.abs().max(1.0),
                    "{v} {from:?} -> {to:?} -> {from:?} = {}",
                    back.value()
                );
            }
        }
    }
}

#[test]
fn nan_is_rejected_everywhere() {
    assert_eq!(
        microsecond(f64::NAN),
        Err(IntervalError::NotANumber {
            unit: Unit::Microsecond
        })
    );
    assert!(millisecond(f64::NAN).is_err());
    assert!(second(f64::NAN).is_err());
    assert!(minute(f64::NAN).is_err());
    assert!(hour(f64::NAN).is_err());
    assert!(day(f64::NAN).is_err());
    assert!(week(f64::NAN).is_err());

    let err = week(f64::NAN).unwrap_err();
    assert_eq!(err.to_string(), "Cannot create a Week interval from NaN");
}

#[test]
fn infinities_are_accepted() {
    assert_eq!(second(f64::INFINITY).unwrap().value(), f64::INFINITY);
    assert_eq!(second(f64::NEG_INFINITY).unwrap().value(), f64::NEG_INFINITY);
}

#[test]
fn default_value_is_zero() {
    assert_eq!(minute(None).unwrap().value(), 0.0);
    assert_eq!(week(None).unwrap(), Interval::zero(Unit::Week));
}

#[test]
fn map_is_pure() {
    let original = second(5.0).unwrap();
    let mapped = original.map(|x| x + 1.0).unwrap();
    assert_eq!(mapped.value(), 6.0);
    assert_eq!(mapped.unit(), Unit::Second);
    assert_eq!(original.value(), 5.0);
}

#[test]
fn map_chains_with_other_intervals() {
    let base = hour(1.0).unwrap();
    let extra = minute(90.0).unwrap().to_hours();
    let total = base
        .map(|h| h + extra)
        .and_then(|i| i.map(|h| h * 2.0))
        .unwrap();
    assert_eq!(total.value(), 5.0);
    assert_eq!(total.to_string(), "5 hour");
}

#[test]
fn formatting() {
    let three = minute(3.0).unwrap();
    assert_eq!(three.to_string(), "3 minute");
    assert_eq!(format!("{three}"), "3 minute");
    assert_eq!(three.format(&FormatOptions::abbreviated()), "3min");
    assert_eq!(
        three.format(&FormatOptions::default().with_separator("-")),
        "3-minute"
    );
    assert_eq!(
        microsecond(250.0)
            .unwrap()
            .format(&FormatOptions::default().with_mode(FormatMode::Abbreviated)),
        "250µs"
    );
    assert_eq!(
        millisecond(1.0).unwrap().to_weeks().to_string(),
        "1.6534391534391535e-9 week"
    );
}

#[test]
fn numeric_coercion() {
    let two = hour(2.0).unwrap();
    assert_eq!(two.value(), 2.0);
    assert_eq!(f64::from(two), 2.0);
    assert_eq!(two + 1.0, 3.0);
    assert!(two < 2.5);
}

#[test]
fn type_tag() {
    assert_eq!(week(1.0).unwrap().tag(), "Week");
    assert_eq!(Unit::Minute.tag(), "Minute");
}

#[test]
fn interop_with_qtty_and_chrono() {
    let interval = day(0.5).unwrap();
    assert_eq!(interval.to_qtty_seconds(), Seconds::new(43_200.0));
    assert_eq!(interval.to_qtty_days().to::<Second>(), Seconds::new(43_200.0));
    assert_eq!(interval.to_chrono().unwrap(), chrono::Duration::hours(12));
}

#[cfg(feature = "serde")]
#[test]
fn serde_interval_uses_unit_tag() {
    let interval = week(2.0).unwrap();
    let json = serde_json::to_string(&interval).unwrap();
    assert!(json.contains("\"Week\""));
    let back: Interval = serde_json::from_str(&json).unwrap();
    assert_eq!(back, interval);
}
