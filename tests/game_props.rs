use flotilla::{Coord, Game, Gunner, Orientation, RandomGunner, Side, FLEET};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Place the player fleet the same way the computer's goes down: rejection
/// sampling through the public placement operation.
fn place_player_fleet_randomly(game: &mut Game, rng: &mut SmallRng) {
    for kind in FLEET {
        loop {
            let origin = Coord::random(rng);
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if game.place_ship(kind, origin, orientation).is_ok() {
                break;
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any fully random game runs to completion within the turn bound and
    /// ends the moment one fleet is gone.
    #[test]
    fn random_games_terminate_with_a_winner(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::new(&mut rng);
        place_player_fleet_randomly(&mut game, &mut rng);

        let mut player_gunner = RandomGunner::new();
        let mut computer_gunner = RandomGunner::new();
        let mut turns = 0;
        while !game.is_finished() {
            turns += 1;
            // both sides fire at most 100 shots each
            prop_assert!(turns <= 200, "game took too many turns");
            match game.turn() {
                Some(Side::Player) => {
                    let fired = game.computer_board().fired();
                    let shot = player_gunner.choose_shot(&fired, &mut rng);
                    game.fire_shot(shot).unwrap();
                }
                Some(Side::Computer) => {
                    game.computer_turn(&mut computer_gunner, &mut rng).unwrap();
                }
                None => prop_assert!(false, "battle lost its turn marker"),
            }
        }

        let winner = game.winner().unwrap();
        prop_assert_eq!(game.remaining_ship_count(winner.opponent()), 0);
        prop_assert!(game.remaining_ship_count(winner) > 0);
    }

    /// Turn alternation is strict: the side to move flips after every
    /// resolved shot until the game ends.
    #[test]
    fn turns_alternate_strictly(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::new(&mut rng);
        place_player_fleet_randomly(&mut game, &mut rng);

        let mut player_gunner = RandomGunner::new();
        let mut computer_gunner = RandomGunner::new();
        let mut expected = Side::Player;
        while !game.is_finished() {
            prop_assert_eq!(game.turn(), Some(expected));
            match expected {
                Side::Player => {
                    let fired = game.computer_board().fired();
                    let shot = player_gunner.choose_shot(&fired, &mut rng);
                    game.fire_shot(shot).unwrap();
                }
                Side::Computer => {
                    game.computer_turn(&mut computer_gunner, &mut rng).unwrap();
                }
            }
            expected = expected.opponent();
        }
    }
}
