#![no_main]
use libfuzzer_sys::fuzz_target;
use tern_ntriples::NTriplesParser;

fuzz_target!(|data: &[u8]| {
    if let Ok(parser) = NTriplesParser::new(data) {
        let _ = parser.parse();
    }
});
