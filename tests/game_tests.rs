use flotilla::{
    CellSet, Coord, Game, Gunner, Orientation, Phase, PlacementError, ShotError, ShotOutcome,
    Side, FLEET, NUM_SHIPS, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn coord(row: u8, col: u8) -> Coord {
    Coord::new(row, col).unwrap()
}

/// Fires a fixed sequence of coordinates, making computer turns
/// deterministic in tests.
struct ScriptedGunner {
    shots: Vec<Coord>,
    next: usize,
}

impl ScriptedGunner {
    fn new(shots: Vec<Coord>) -> Self {
        Self { shots, next: 0 }
    }
}

impl Gunner for ScriptedGunner {
    fn choose_shot(&mut self, _fired: &CellSet, _rng: &mut SmallRng) -> Coord {
        let shot = self.shots[self.next];
        self.next += 1;
        shot
    }
}

/// Player fleet on alternating rows: rows 0, 2, 4, 6 starting at column 0.
/// Rows 8 and 9 stay empty for scripted misses.
fn place_player_fleet(game: &mut Game) {
    for (i, kind) in FLEET.iter().enumerate() {
        game.place_ship(*kind, coord(2 * i as u8, 0), Orientation::Horizontal)
            .unwrap();
    }
}

#[test]
fn test_new_game_setup() {
    let mut rng = SmallRng::seed_from_u64(11);
    let game = Game::new(&mut rng);
    assert_eq!(game.phase(), Phase::Placement);
    assert_eq!(game.turn(), None);
    assert!(!game.is_finished());
    assert_eq!(game.winner(), None);
    // the computer fleet goes down silently at game start
    assert!(game.computer_board().fleet_complete());
    assert_eq!(game.computer_board().ship_map().len(), TOTAL_SHIP_CELLS);
    assert!(game.player_board().ship_map().is_empty());
    assert_eq!(game.remaining_kinds().len(), NUM_SHIPS);
}

#[test]
fn test_battle_starts_with_the_final_placement() {
    let mut rng = SmallRng::seed_from_u64(12);
    let mut game = Game::new(&mut rng);
    for (i, kind) in FLEET.iter().enumerate() {
        assert_eq!(game.phase(), Phase::Placement);
        game.place_ship(*kind, coord(2 * i as u8, 0), Orientation::Horizontal)
            .unwrap();
    }
    assert_eq!(game.phase(), Phase::Battle(Side::Player));
    assert_eq!(game.turn(), Some(Side::Player));
}

#[test]
fn test_failed_placement_keeps_the_phase() {
    let mut rng = SmallRng::seed_from_u64(13);
    let mut game = Game::new(&mut rng);
    assert_eq!(
        game.place_ship(FLEET[0], coord(0, 6), Orientation::Horizontal)
            .unwrap_err(),
        PlacementError::OutOfBounds
    );
    assert_eq!(game.phase(), Phase::Placement);
    assert_eq!(game.remaining_kinds().len(), NUM_SHIPS);
}

#[test]
fn test_placement_after_battle_begins_fails() {
    let mut rng = SmallRng::seed_from_u64(14);
    let mut game = Game::new(&mut rng);
    place_player_fleet(&mut game);
    assert_eq!(
        game.place_ship(FLEET[0], coord(8, 0), Orientation::Horizontal)
            .unwrap_err(),
        PlacementError::DuplicateKind
    );
}

#[test]
fn test_shots_rejected_outside_battle() {
    let mut rng = SmallRng::seed_from_u64(15);
    let mut game = Game::new(&mut rng);
    assert_eq!(
        game.fire_shot(coord(0, 0)).unwrap_err(),
        ShotError::NotInBattle
    );
    let mut gunner = ScriptedGunner::new(vec![coord(9, 9)]);
    assert_eq!(
        game.computer_turn(&mut gunner, &mut rng).unwrap_err(),
        ShotError::NotInBattle
    );
}

#[test]
fn test_hit_does_not_grant_an_extra_shot() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut game = Game::new(&mut rng);
    place_player_fleet(&mut game);

    // aim at a known computer ship cell: the hit still passes the turn
    let target = game.computer_board().ship_map().iter().next().unwrap();
    let outcome = game.fire_shot(target).unwrap();
    assert!(outcome.is_hit());
    assert_eq!(game.turn(), Some(Side::Computer));
    assert_eq!(game.fire_shot(coord(9, 9)).unwrap_err(), ShotError::OutOfTurn);

    // once the computer replies, the player is back on
    let mut gunner = ScriptedGunner::new(vec![coord(9, 9)]);
    let (reply, reply_outcome) = game.computer_turn(&mut gunner, &mut rng).unwrap();
    assert_eq!(reply, coord(9, 9));
    assert_eq!(reply_outcome, ShotOutcome::Miss);
    assert_eq!(game.turn(), Some(Side::Player));
}

#[test]
fn test_miss_also_passes_the_turn() {
    let mut rng = SmallRng::seed_from_u64(16);
    let mut game = Game::new(&mut rng);
    place_player_fleet(&mut game);

    // find open water on the computer board
    let miss_cell = (0..100)
        .map(|i| coord(i / 10, i % 10))
        .find(|c| !game.computer_board().ship_map().contains(*c))
        .unwrap();
    assert_eq!(game.fire_shot(miss_cell).unwrap(), ShotOutcome::Miss);
    assert_eq!(game.turn(), Some(Side::Computer));
}

#[test]
fn test_already_fired_consumes_nothing() {
    let mut rng = SmallRng::seed_from_u64(17);
    let mut game = Game::new(&mut rng);
    place_player_fleet(&mut game);

    game.fire_shot(coord(5, 5)).unwrap();
    let mut gunner = ScriptedGunner::new(vec![coord(9, 9)]);
    game.computer_turn(&mut gunner, &mut rng).unwrap();

    let fired_before = game.computer_board().fired();
    assert_eq!(
        game.fire_shot(coord(5, 5)).unwrap_err(),
        ShotError::AlreadyFired
    );
    assert_eq!(game.computer_board().fired(), fired_before);
    assert_eq!(game.turn(), Some(Side::Player));
}

#[test]
fn test_player_victory_finishes_in_the_same_step() {
    let mut rng = SmallRng::seed_from_u64(21);
    let mut game = Game::new(&mut rng);
    place_player_fleet(&mut game);

    // the player runs down every computer ship cell; the computer puts its
    // replies into the empty bottom rows
    let targets: Vec<Coord> = game.computer_board().ship_map().iter().collect();
    let mut script = Vec::new();
    for c in 0..10 {
        script.push(coord(8, c));
    }
    for c in 0..4 {
        script.push(coord(9, c));
    }
    let mut gunner = ScriptedGunner::new(script);

    let mut last = None;
    for target in targets {
        last = Some(game.fire_shot(target).unwrap());
        if game.is_finished() {
            break;
        }
        game.computer_turn(&mut gunner, &mut rng).unwrap();
    }

    assert!(matches!(last, Some(ShotOutcome::FleetDestroyed(_))));
    assert_eq!(game.phase(), Phase::Finished(Side::Player));
    assert_eq!(game.winner(), Some(Side::Player));
    assert_eq!(game.remaining_ship_count(Side::Computer), 0);
    // terminal until a fresh game replaces this one
    assert_eq!(
        game.fire_shot(coord(9, 9)).unwrap_err(),
        ShotError::NotInBattle
    );
}

#[test]
fn test_computer_victory() {
    let mut rng = SmallRng::seed_from_u64(22);
    let mut game = Game::new(&mut rng);
    place_player_fleet(&mut game);

    // the computer runs down the player fleet while the player fires into
    // open water on the computer board
    let player_cells: Vec<Coord> = game.player_board().ship_map().iter().collect();
    let mut gunner = ScriptedGunner::new(player_cells);
    let computer_map = game.computer_board().ship_map();
    let mut water = (0..100)
        .map(|i| coord(i / 10, i % 10))
        .filter(move |c| !computer_map.contains(*c));

    while !game.is_finished() {
        let shot = water.next().unwrap();
        assert_eq!(game.fire_shot(shot).unwrap(), ShotOutcome::Miss);
        let (_, outcome) = game.computer_turn(&mut gunner, &mut rng).unwrap();
        assert!(outcome.is_hit());
    }

    assert_eq!(game.winner(), Some(Side::Computer));
    assert_eq!(game.remaining_ship_count(Side::Player), 0);
    assert!(game.remaining_ship_count(Side::Computer) > 0);
}
