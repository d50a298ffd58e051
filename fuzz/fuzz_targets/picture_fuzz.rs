//! Picture-clause fuzz target: feed arbitrary bytes to the clause parser.
//! The parser must not panic; it returns Ok(PictureSpec) or a FormatSpecError.
//! Build with: cargo fuzz run picture_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    let s = match std::str::from_utf8(data) {
        Ok(x) => x,
        Err(_) => return,
    };
    if let Ok(spec) = edipict::PictureSpec::parse(s) {
        // Round trip must hold for everything the parser accepts.
        let rendered = spec.to_string();
        let reparsed = edipict::PictureSpec::parse(&rendered).expect("round trip");
        assert_eq!(reparsed, spec);
    }
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run picture_fuzz");
}
