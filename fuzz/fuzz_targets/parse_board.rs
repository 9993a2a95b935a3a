#![no_main]
use kibitz::chess::game::Game;
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(game) = Game::from_placement(s) {
            let placement = game.to_string();
            let reparsed = Game::from_placement(&placement)
                .expect("printed placement should be parsed back");
            assert_eq!(reparsed.to_string(), placement);
        }
    }
});
