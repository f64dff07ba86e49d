//! Meow scenarios through the facade.

use tabby::prelude::*;

#[test]
fn test_counted_bulk_meow() {
    let mut counters = vec![
        MeowCounter::new(Kitty::from(Cat::new("Barsik").unwrap())),
        MeowCounter::new(Kitty::from(Cat::new("Murzik").unwrap())),
        MeowCounter::new(Kitty::from(RobotCat::new("AI-Cat").unwrap())),
    ];

    let mut out: Vec<u8> = Vec::new();
    make_all_meow(&mut counters, &mut out).unwrap();
    make_all_meow(&mut counters, &mut out).unwrap();

    let counts: Vec<u32> = counters.iter().map(MeowCounter::meow_count).collect();
    assert_eq!(counts, vec![2, 2, 2]);
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 6);
}

#[test]
fn test_meow_errors_render() {
    let err = Cat::new("").unwrap_err();
    assert_eq!(err.to_string(), "cat name cannot be empty or whitespace");

    let mut cat = Cat::new("Barsik").unwrap();
    let err = cat.meow_times(0, &mut Vec::<u8>::new()).unwrap_err();
    assert_eq!(err.to_string(), "meow count must be positive, got 0");
}
