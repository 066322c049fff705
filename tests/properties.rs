//! Property tests for scoring, the third-card rule and settlement.

use baccarat::{
    Bet, BetSide, Card, Deck, Hand, Outcome, Rank, Side, Suit, TIE_PAYOUT, maybe_draw_third,
    resolve,
};
use proptest::prelude::*;

fn any_card() -> impl Strategy<Value = Card> {
    (0..Rank::ALL.len(), 0..Suit::ALL.len())
        .prop_map(|(rank, suit)| Card::new(Rank::ALL[rank], Suit::ALL[suit]))
}

fn any_side() -> impl Strategy<Value = BetSide> {
    prop_oneof![
        Just(BetSide::Player),
        Just(BetSide::Banker),
        Just(BetSide::Tie)
    ]
}

proptest! {
    #[test]
    fn score_is_value_sum_mod_ten(cards in prop::collection::vec(any_card(), 2..=3)) {
        let hand = Hand::with_cards(Side::Player, cards.clone());
        let total: u32 = cards.iter().map(|c| u32::from(c.value())).sum();

        prop_assert!(hand.score() <= 9);
        prop_assert_eq!(u32::from(hand.score()), total % 10);
    }

    #[test]
    fn third_card_drawn_exactly_on_five_or_less(
        first in any_card(),
        second in any_card(),
        extra in any_card()
    ) {
        let mut hand = Hand::with_cards(Side::Banker, vec![first, second]);
        let initial = hand.score();
        let mut deck = Deck::stacked(&[extra]);

        let decision = maybe_draw_third(&mut hand, &mut deck).unwrap();

        prop_assert_eq!(decision.initial_score, initial);
        if initial <= 5 {
            prop_assert_eq!(hand.len(), 3);
            prop_assert_eq!(hand.cards()[2], extra);
            prop_assert!(deck.is_empty());
        } else {
            prop_assert_eq!(hand.len(), 2);
            prop_assert_eq!(deck.len(), 1);
        }
    }

    #[test]
    fn settlement_moves_only_the_stake(
        side in any_side(),
        player in 0u8..=9,
        banker in 0u8..=9,
        balance in 1usize..1_000_000,
        stake_seed in 1usize..1_000_000
    ) {
        let stake = stake_seed % balance + 1;
        let bet = Bet::new(side, stake);
        let resolution = resolve(bet, player, banker, balance);

        prop_assert_eq!(resolution, resolve(bet, player, banker, balance));
        match resolution.outcome {
            Outcome::Win if side == BetSide::Tie => {
                prop_assert_eq!(resolution.balance, balance + stake * TIE_PAYOUT);
            }
            Outcome::Win => prop_assert_eq!(resolution.balance, balance + stake),
            Outcome::Loss => prop_assert_eq!(resolution.balance, balance - stake),
            Outcome::Push => {
                prop_assert_ne!(side, BetSide::Tie);
                prop_assert_eq!(player, banker);
                prop_assert_eq!(resolution.balance, balance);
            }
        }
    }
}
