#![no_main]
use kibitz::chess::board::Highlight;
use kibitz::chess::core::{Square, BOARD_SIZE, BOARD_WIDTH};
use kibitz::chess::game::Game;
use kibitz::interface::render::Canvas;
use kibitz::interface::session::{Event, InteractionState, Session};
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fn square(byte: u8) -> Square {
    let index = byte % BOARD_SIZE;
    Square::new(index % BOARD_WIDTH, index / BOARD_WIDTH)
}

fuzz_target!(|data: &[u8]| {
    let mut session = Session::new(Game::starting(), Canvas::new());
    for &byte in data {
        let event = if byte & 0x80 == 0 {
            Event::Hover(square(byte))
        } else {
            Event::Click(square(byte))
        };
        session.handle(event);

        let game = session.game();
        for (id, piece) in game.pieces() {
            assert_eq!(game.board().occupant(piece.position()), Some(id));
        }
        assert_eq!(
            Square::iter()
                .filter(|&square| game.board().occupant(square).is_some())
                .count(),
            game.pieces().count()
        );
        if session.state() == InteractionState::Idle {
            assert!(Square::iter().all(|square| game.board().highlight(square) == Highlight::None));
        }
    }
});
