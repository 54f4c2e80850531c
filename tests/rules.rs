use kuba::{
    Board, Coordinate, Direction, GameStatus, MarbleKind, MoveRejected, PlayerColor, RuleEngine,
};

const WHITE: &str = "PlayerA";
const BLACK: &str = "PlayerB";

fn new_game() -> RuleEngine {
    RuleEngine::new((WHITE, PlayerColor::White), (BLACK, PlayerColor::Black)).unwrap()
}

fn at(row: u8, col: u8) -> Coordinate {
    Coordinate::new(row, col)
}

#[test]
fn opening_edge_push_is_accepted_but_inner_push_is_blocked() {
    let mut game = new_game();

    assert_eq!(
        game.make_move(WHITE, at(0, 1), Direction::Right),
        Err(MoveRejected::MarbleNotAccessible)
    );
    assert_eq!(game.current_turn(), None);

    game.make_move(WHITE, at(0, 0), Direction::Right).unwrap();
    assert_eq!(game.marble_at(at(0, 0)).unwrap(), MarbleKind::Empty);
    assert_eq!(game.marble_at(at(0, 2)).unwrap(), MarbleKind::White);
    assert_eq!(game.current_turn(), Some(BLACK));
}

#[test]
fn opening_push_toward_own_edge_is_self_elimination() {
    let mut game = new_game();

    assert_eq!(
        game.make_move(WHITE, at(1, 1), Direction::Forward),
        Err(MoveRejected::SelfElimination)
    );
    assert_eq!(
        game.make_move(BLACK, at(5, 1), Direction::Back),
        Err(MoveRejected::SelfElimination)
    );
}

#[test]
fn pushing_the_red_row_off_the_edge_scores_one() {
    let mut game = new_game();

    // White walks a marble down column 0 to the empty (3, 0) while black
    // shuffles along its back row.
    game.make_move(WHITE, at(0, 0), Direction::Back).unwrap();
    game.make_move(BLACK, at(6, 0), Direction::Right).unwrap();
    game.make_move(WHITE, at(1, 0), Direction::Back).unwrap();
    game.make_move(BLACK, at(6, 1), Direction::Right).unwrap();
    assert_eq!(game.marble_at(at(3, 0)).unwrap(), MarbleKind::White);

    // First push closes the gap on the right edge, second one ejects a red.
    game.make_move(WHITE, at(3, 0), Direction::Right).unwrap();
    game.make_move(BLACK, at(6, 2), Direction::Right).unwrap();
    assert_eq!(game.captured(WHITE), Some(0));
    assert_eq!(game.marble_census().red, 13);

    game.make_move(WHITE, at(3, 1), Direction::Right).unwrap();

    assert_eq!(game.captured(WHITE), Some(1));
    assert_eq!(game.captured(BLACK), Some(0));
    assert_eq!(game.marble_census().red, 12);
    assert_eq!(
        game.board().rows().nth(3).unwrap(),
        &[
            MarbleKind::Empty,
            MarbleKind::Empty,
            MarbleKind::White,
            MarbleKind::Red,
            MarbleKind::Red,
            MarbleKind::Red,
            MarbleKind::Red,
        ]
    );
    let last = game.last_push().unwrap();
    assert_eq!(last.terminal, at(3, 6));
    assert_eq!(last.ejected, Some(MarbleKind::Red));
    assert_eq!(game.winner(), None);
}

#[test]
fn ejecting_an_opponent_marble_scores_nothing() {
    let board: Board = "
        . . . . . . .
        . . . . . . .
        . . W B B B B
        . . . . . . .
        . . . . . . .
        . . . . . . .
        . . . . . B .
    "
    .parse()
    .unwrap();
    let mut game =
        RuleEngine::from_position((WHITE, PlayerColor::White), (BLACK, PlayerColor::Black), board)
            .unwrap();

    game.make_move(BLACK, at(6, 5), Direction::Left).unwrap();
    game.make_move(WHITE, at(2, 2), Direction::Right).unwrap();
    let last = game.last_push().unwrap();
    assert_eq!(last.terminal, at(2, 6));
    assert_eq!(last.ejected, Some(MarbleKind::Black));

    let census = game.marble_census();
    assert_eq!((census.white, census.black), (1, 4));
    assert_eq!(game.captured(WHITE), Some(0));
}

#[test]
fn ownership_is_checked_before_ko() {
    let board: Board = "
        . . . . . . .
        . . . . . . .
        . . . . . . .
        . . . W B R R
        . . . . . . .
        . . . . . . .
        B . . . . . .
    "
    .parse()
    .unwrap();
    let mut game =
        RuleEngine::from_position((WHITE, PlayerColor::White), (BLACK, PlayerColor::Black), board)
            .unwrap();

    game.make_move(WHITE, at(3, 3), Direction::Right).unwrap();
    assert_eq!(game.captured(WHITE), Some(1));
    assert_eq!(game.marble_at(at(3, 6)).unwrap(), MarbleKind::Red);

    // (3, 6) now holds a red, so black cannot push it at all.
    assert_eq!(
        game.make_move(BLACK, at(3, 6), Direction::Left),
        Err(MoveRejected::NotYourMarble)
    );
}

#[test]
fn ko_applies_only_to_the_previous_ply() {
    let board: Board = "
        . . . . . . .
        . . . . . . .
        . . . . . . .
        . . W B . . .
        . . . . . . .
        . . . . . . .
        W . . . . . B
    "
    .parse()
    .unwrap();
    let mut game =
        RuleEngine::from_position((WHITE, PlayerColor::White), (BLACK, PlayerColor::Black), board)
            .unwrap();

    game.make_move(WHITE, at(3, 2), Direction::Right).unwrap();
    assert_eq!(
        game.make_move(BLACK, at(3, 4), Direction::Left),
        Err(MoveRejected::KoViolation)
    );

    game.make_move(BLACK, at(6, 6), Direction::Left).unwrap();
    game.make_move(WHITE, at(6, 0), Direction::Right).unwrap();
    game.make_move(BLACK, at(3, 4), Direction::Left).unwrap();

    assert_eq!(game.marble_at(at(3, 2)).unwrap(), MarbleKind::White);
    assert_eq!(game.marble_at(at(3, 3)).unwrap(), MarbleKind::Black);
}

#[test]
fn finished_game_refuses_every_move() {
    let board: Board = "
        W . . . . . .
        . . . . . . .
        . . . . . . .
        . . . . . W B
        . . . . . . .
        . . . . . . .
        . . . . . . .
    "
    .parse()
    .unwrap();
    let mut game =
        RuleEngine::from_position((WHITE, PlayerColor::White), (BLACK, PlayerColor::Black), board)
            .unwrap();

    game.make_move(WHITE, at(3, 5), Direction::Right).unwrap();
    assert_eq!(game.winner(), Some(WHITE));
    assert_eq!(game.status(), GameStatus::Won);
    assert!(game.is_over());

    let before = game.clone();
    assert_eq!(
        game.make_move(WHITE, at(0, 0), Direction::Right),
        Err(MoveRejected::GameAlreadyWon)
    );
    assert_eq!(
        game.make_move("nobody", at(9, 9), Direction::Left),
        Err(MoveRejected::GameAlreadyWon)
    );
    assert_eq!(game, before);
}
