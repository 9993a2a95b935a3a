use kibitz::chess::board::Highlight;
use kibitz::chess::core::{PieceKind, Square, Team};
use kibitz::chess::game::Game;
use kibitz::interface::highlight;
use kibitz::interface::render::{Canvas, Visual};
use kibitz::interface::session::{Event, InteractionState, Session};
use pretty_assertions::assert_eq;

fn at(square: &str) -> Square {
    Square::try_from(square).unwrap_or_else(|e| panic!("invalid square {square}: {e}"))
}

fn highlighted(session: &Session<Canvas>, highlight: Highlight) -> Vec<Square> {
    Square::iter()
        .filter(|&square| session.game().board().highlight(square) == highlight)
        .collect()
}

#[test]
fn pawn_loses_double_step_after_moving() {
    let mut session = Session::new(Game::starting(), Canvas::new());
    let pawn = session.game().board().occupant(Square::new(4, 6)).unwrap();

    session.handle(Event::Click(Square::new(4, 6)));
    assert_eq!(session.state(), InteractionState::PieceSelected(pawn));
    assert_eq!(
        highlighted(&session, Highlight::Movable),
        vec![Square::new(4, 4), Square::new(4, 5)]
    );
    assert_eq!(
        session.renderer().squares_with(Visual::Movable),
        vec![Square::new(4, 4), Square::new(4, 5)]
    );

    session.handle(Event::Click(Square::new(4, 4)));
    assert_eq!(session.state(), InteractionState::Idle);
    assert_eq!(session.game().piece(pawn).position(), Square::new(4, 4));
    assert!(session.game().piece(pawn).has_moved());

    session.handle(Event::Click(Square::new(4, 4)));
    assert_eq!(
        highlighted(&session, Highlight::Movable),
        vec![Square::new(4, 3)]
    );
}

#[test]
fn rook_ray_stops_at_enemy() {
    let mut game = Game::empty();
    let rook = game.place(Team::White, PieceKind::Rook, Square::new(0, 7));
    let victim = game.place(Team::Black, PieceKind::Knight, Square::new(0, 3));
    let mut session = Session::new(game, Canvas::new());

    session.handle(Event::Click(Square::new(0, 7)));
    let file: Vec<_> = highlighted(&session, Highlight::Movable)
        .into_iter()
        .filter(|square| square.x() == 0)
        .collect();
    assert_eq!(
        file,
        vec![Square::new(0, 4), Square::new(0, 5), Square::new(0, 6)]
    );
    assert_eq!(
        highlighted(&session, Highlight::Attackable),
        vec![Square::new(0, 3)]
    );
    assert_eq!(
        session.renderer().squares_with(Visual::Attackable),
        vec![Square::new(0, 3)]
    );
    for y in 0..3 {
        assert_eq!(
            session.game().board().highlight(Square::new(0, y)),
            Highlight::None
        );
    }

    // Capturing removes the knight from the game entirely.
    session.handle(Event::Click(Square::new(0, 3)));
    assert_eq!(session.game().board().occupant(Square::new(0, 3)), Some(rook));
    assert_eq!(session.game().board().occupant(Square::new(0, 7)), None);
    assert_eq!(session.game().pieces().count(), 1);
    assert!(session.game().pieces().all(|(id, _)| id != victim));
    assert_eq!(session.game().find(Team::Black, PieceKind::Knight, 0), None);
    assert_eq!(session.game().count(Team::Black), 0);
}

#[test]
fn pawn_captures_diagonally() {
    let mut session = Session::new(
        Game::from_placement("4k3/8/8/3p4/4P3/8/8/4K3").unwrap(),
        Canvas::new(),
    );
    session.handle(Event::Hover(at("e4")));
    assert_eq!(
        session.renderer().squares_with(Visual::PreviewAttackable),
        vec![at("d5")]
    );
    assert_eq!(
        session.renderer().squares_with(Visual::PreviewMovable),
        vec![at("e5")]
    );
    assert!(highlighted(&session, Highlight::Attackable).is_empty());

    session.handle(Event::Click(at("e4")));
    session.handle(Event::Click(at("d5")));
    assert_eq!(
        session.game().to_string(),
        "4k3/8/8/3P4/8/8/8/4K3"
    );
}

#[test]
fn every_move_updates_board_and_piece() {
    // Black knight d5, white bishop f3, black king a8, white rook h1.
    const PLACEMENT: &str = "k7/8/8/3n4/8/5B2/8/7R";
    let kinds = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];
    let setup = |team, kind, origin| {
        let mut game = Game::from_placement(PLACEMENT).unwrap();
        let id = game.place(team, kind, origin);
        (game, id)
    };
    let mut moves = 0;
    let mut pawn_double_steps = 0;
    for team in [Team::White, Team::Black] {
        for kind in kinds {
            for origin in Square::iter() {
                if Game::from_placement(PLACEMENT).unwrap().piece_at(origin).is_some() {
                    continue;
                }
                let destinations = {
                    let (game, id) = setup(team, kind, origin);
                    highlight::targets(&game, id)
                };
                for target in destinations {
                    let (game, id) = setup(team, kind, origin);
                    let mut session = Session::new(game, Canvas::new());
                    let before = session.game().pieces().count();

                    session.handle(Event::Hover(origin));
                    session.handle(Event::Click(origin));
                    assert_eq!(
                        session.game().board().highlight(target.square),
                        target.highlight,
                        "{team} {kind} {origin} -> {}",
                        target.square
                    );
                    session.handle(Event::Click(target.square));

                    let game = session.game();
                    assert_eq!(session.state(), InteractionState::Idle);
                    assert_eq!(game.board().occupant(origin), None);
                    assert_eq!(game.board().occupant(target.square), Some(id));
                    assert_eq!(game.piece(id).position(), target.square);
                    let captured = usize::from(target.highlight == Highlight::Attackable);
                    assert_eq!(game.pieces().count(), before - captured);
                    assert!(game
                        .pieces()
                        .all(|(other, piece)| other == id || piece.position() != target.square));
                    assert!(Square::iter()
                        .all(|square| game.board().highlight(square) == Highlight::None));
                    if kind == PieceKind::Pawn {
                        assert!(game.piece(id).has_moved());
                        if origin.y() == team.pawn_row()
                            && origin.y().abs_diff(target.square.y()) == 2
                        {
                            pawn_double_steps += 1;
                        }
                    }
                    moves += 1;
                }
            }
        }
    }
    assert!(moves > 6000, "only {moves} moves were executed");
    // f2 is blocked by the bishop on f3 and d7 by the knight on d5.
    assert_eq!(pawn_double_steps, 14);
}

#[test]
fn clearing_restores_checkerboard() {
    let mut session = Session::new(Game::starting(), Canvas::new());
    session.handle(Event::Click(at("g1")));
    session.clear_highlights();
    let once = session.renderer().clone();
    session.clear_highlights();
    assert_eq!(session.renderer(), &once);
    for square in Square::iter() {
        let expected = if (square.x() + square.y()) % 2 == 0 {
            Visual::Dark
        } else {
            Visual::Light
        };
        assert_eq!(session.renderer().visual(square), expected);
        assert_eq!(session.renderer().highlight(square), Highlight::None);
        assert_eq!(session.game().board().highlight(square), Highlight::None);
    }
}

#[test]
fn sessions_are_independent() {
    let mut first = Session::new(Game::starting(), Canvas::new());
    let second = Session::new(Game::starting(), Canvas::new());
    first.handle(Event::Click(at("e2")));
    first.handle(Event::Click(at("e4")));
    assert_ne!(first.game().to_string(), second.game().to_string());
    assert_eq!(second.state(), InteractionState::Idle);
    assert!(second.game().piece_at(at("e2")).is_some());
}
