#![no_main]
use jsonmend::{parse_smart, Parser, ParserOptions};
use libfuzzer_sys::fuzz_target;

// The reader must terminate on any input and keep its outcome bookkeeping
// consistent; strict mode must report at most one error.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    let outcome = parse_smart(text, ParserOptions::default());
    assert_eq!(outcome.ok, outcome.errors.is_empty());
    assert_eq!(outcome.error_count, outcome.errors.len());
    assert!(outcome.results.len() <= 1);
    assert!(!outcome.multiple);

    let strict = parse_smart(
        text,
        ParserOptions {
            strict: true,
            ..Default::default()
        },
    );
    assert!(strict.errors.len() <= 1);
    if strict.ok {
        assert!(outcome.ok);
    }

    let report = Parser::new(text, ParserOptions::default()).parse();
    assert_eq!(report.ok, report.errors.is_empty());
});
