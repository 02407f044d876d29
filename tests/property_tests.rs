//! Property tests: conservation and termination over arbitrary seeds.

use std::sync::Arc;

use proptest::prelude::*;

use trump_duel::{
    AttributePolicy, Catalog, DealMode, EngineConfig, GameEngine, GameRng, GameStatus, MemoryStore,
    Side, UniformAttribute,
};

/// Upper bound on resolutions; real games finish in a few hundred.
const MAX_RESOLUTIONS: usize = 100_000;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_conservation_and_termination(
        seed in any::<u64>(),
        picker_seed in any::<u64>(),
        timeout_every in 0u32..6,
    ) {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let config = EngineConfig::default().with_seed(seed);
        let engine = GameEngine::new(catalog, MemoryStore::new(), config);
        let id = engine.create_game(DealMode::RandomPack).unwrap().game_id;

        let mut picker = GameRng::new(picker_seed);
        let mut game = engine.get_game(id).unwrap();
        let mut user_turns = 0u32;
        let mut resolutions = 0;

        while game.status == GameStatus::Playing {
            prop_assert!(resolutions < MAX_RESOLUTIONS, "game did not finish");

            let before_round = game.round_number;
            let report = match game.current_turn {
                Side::User => {
                    user_turns += 1;
                    if timeout_every > 0 && user_turns % timeout_every == 0 {
                        engine.resolve_timeout(id).unwrap()
                    } else {
                        let attribute = UniformAttribute.choose(&game, &mut picker);
                        engine.resolve_user_turn(id, attribute).unwrap()
                    }
                }
                Side::System => engine.resolve_system_turn(id).unwrap(),
            };
            game = report.game_state;
            resolutions += 1;

            // Conservation
            prop_assert_eq!(game.total_cards(), 20);

            // Round counter only moves on decisive rounds
            match report.outcome.winner() {
                Some(winner) => {
                    prop_assert_eq!(game.round_number, before_round + 1);
                    prop_assert_eq!(game.current_turn, winner);
                }
                None => {
                    prop_assert_eq!(game.round_number, before_round);
                    prop_assert_eq!(game.current_turn, Side::System);
                }
            }
        }

        let winner = game.winner.unwrap();
        prop_assert_eq!(game.deck(winner.opponent()).len(), 0);
        prop_assert_eq!(game.deck(winner).len(), 20);
    }

    #[test]
    fn prop_chosen_set_wrong_size_rejected(len in 0usize..30) {
        prop_assume!(len != 10);
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let config = EngineConfig::default().with_seed(1);
        let engine = GameEngine::new(catalog, MemoryStore::new(), config);
        let ids = engine.catalog().iter().take(len).map(|c| c.id).collect();

        prop_assert!(engine.create_game(DealMode::ChosenSet(ids)).is_err());
        prop_assert!(engine.store().is_empty().unwrap());
    }
}
