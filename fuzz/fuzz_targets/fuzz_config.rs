#![no_main]

//! Configuration parser fuzzer.
//!
//! Any byte string must either parse into a usable unit table or fail with
//! a clean error. Panics and malformed resolutions are the bugs.

use libfuzzer_sys::fuzz_target;
use parapet::config::{GameConfig, UnitRole, UnitTypeTable};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(config) = GameConfig::from_json(json) else {
        return;
    };

    if let Ok(table) = UnitTypeTable::resolve(&config) {
        // A resolved table must answer every role lookup.
        for role in UnitRole::ALL {
            assert!(!table.id(role).is_empty());
            assert!(table.cost(role) > 0.0);
        }
    }
});
