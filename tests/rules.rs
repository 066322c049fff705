//! Deck, scoring, third-card and settlement tests.

use std::collections::HashSet;

use baccarat::{
    Bet, BetSide, Card, DECK_SIZE, Deck, DeckError, Hand, InputError, Outcome, Rank, Resolution,
    Side, Suit, build_deck, maybe_draw_third, parse_stake, render, resolve, score,
    should_draw_third, winner,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn hand(side: Side, ranks: &[Rank]) -> Hand {
    Hand::with_cards(
        side,
        ranks.iter().map(|&rank| card(rank, Suit::Spades)).collect(),
    )
}

#[test]
fn build_deck_has_every_card_once() {
    let deck = build_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            assert!(unique.contains(&card(rank, suit)));
        }
    }
}

#[test]
fn shuffled_deck_is_a_permutation() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let deck = Deck::shuffled(&mut rng);
    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn stacked_deck_deals_in_order() {
    let draws = [
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::King, Suit::Diamonds),
    ];
    let mut deck = Deck::stacked(&draws);

    assert_eq!(deck.draw(2).unwrap(), draws[..2].to_vec());
    assert_eq!(deck.draw_one().unwrap(), draws[2]);
    assert!(deck.is_empty());
}

#[test]
fn draw_more_than_remaining_takes_nothing() {
    let mut deck = Deck::stacked(&[card(Rank::Ace, Suit::Hearts)]);
    assert_eq!(
        deck.draw(2).unwrap_err(),
        DeckError::Exhausted {
            requested: 2,
            remaining: 1
        }
    );
    assert_eq!(deck.len(), 1);

    deck.draw_one().unwrap();
    assert_eq!(
        deck.draw_one().unwrap_err(),
        DeckError::Exhausted {
            requested: 1,
            remaining: 0
        }
    );
}

#[test]
fn card_values() {
    assert_eq!(card(Rank::Ace, Suit::Hearts).value(), 1);
    assert_eq!(card(Rank::Seven, Suit::Hearts).value(), 7);
    assert_eq!(card(Rank::Ten, Suit::Hearts).value(), 10);
    assert_eq!(card(Rank::Jack, Suit::Hearts).value(), 10);
    assert_eq!(card(Rank::Queen, Suit::Hearts).value(), 10);
    assert_eq!(card(Rank::King, Suit::Hearts).value(), 10);
}

#[test]
fn scores_wrap_modulo_ten() {
    assert_eq!(hand(Side::Player, &[Rank::Ace, Rank::Nine]).score(), 0);
    assert_eq!(hand(Side::Player, &[Rank::Seven, Rank::Eight]).score(), 5);
    assert_eq!(
        hand(Side::Banker, &[Rank::King, Rank::Queen, Rank::Five]).score(),
        5
    );
    assert_eq!(
        hand(Side::Banker, &[Rank::Nine, Rank::Nine, Rank::Nine]).score(),
        7
    );
    assert_eq!(score(&[]), 0);
}

#[test]
fn low_two_card_hand_draws_third() {
    let mut player = hand(Side::Player, &[Rank::Two, Rank::Three]);
    let mut deck = Deck::stacked(&[card(Rank::Four, Suit::Clubs)]);

    assert!(should_draw_third(&player));
    let decision = maybe_draw_third(&mut player, &mut deck).unwrap();

    assert!(decision.drew_third());
    assert_eq!(decision.initial_score, 5);
    assert_eq!(decision.third_card, Some(card(Rank::Four, Suit::Clubs)));
    assert_eq!(player.len(), 3);
    assert_eq!(player.score(), 9);
    assert!(deck.is_empty());
}

#[test]
fn six_or_more_stands() {
    for ranks in [
        [Rank::Six, Rank::King],
        [Rank::Three, Rank::Four],
        [Rank::Ace, Rank::Seven],
        [Rank::Four, Rank::Five],
    ] {
        let mut banker = hand(Side::Banker, &ranks);
        let mut deck = Deck::stacked(&[card(Rank::Ace, Suit::Clubs)]);
        let decision = maybe_draw_third(&mut banker, &mut deck).unwrap();

        assert!(!decision.drew_third());
        assert_eq!(banker.len(), 2);
        assert_eq!(deck.len(), 1);
    }
}

#[test]
fn third_card_rule_ignores_three_card_hands() {
    let mut player = hand(Side::Player, &[Rank::Ace, Rank::Ace, Rank::Ace]);
    let mut deck = Deck::stacked(&[card(Rank::Ace, Suit::Clubs)]);

    assert!(!should_draw_third(&player));
    let decision = maybe_draw_third(&mut player, &mut deck).unwrap();
    assert!(!decision.drew_third());
    assert_eq!(player.len(), 3);
}

#[test]
fn third_card_on_empty_deck_leaves_hand() {
    let mut player = hand(Side::Player, &[Rank::Ace, Rank::Two]);
    let mut deck = Deck::stacked(&[]);

    assert!(maybe_draw_third(&mut player, &mut deck).is_err());
    assert_eq!(player.len(), 2);
}

#[test]
fn resolve_examples() {
    assert_eq!(
        resolve(Bet::new(BetSide::Tie, 10), 7, 7, 100),
        Resolution {
            balance: 180,
            outcome: Outcome::Win
        }
    );
    assert_eq!(
        resolve(Bet::new(BetSide::Player, 50), 8, 3, 1000),
        Resolution {
            balance: 1050,
            outcome: Outcome::Win
        }
    );
    assert_eq!(
        resolve(Bet::new(BetSide::Banker, 20), 9, 2, 500),
        Resolution {
            balance: 480,
            outcome: Outcome::Loss
        }
    );
    assert_eq!(
        resolve(Bet::new(BetSide::Player, 30), 5, 5, 200),
        Resolution {
            balance: 200,
            outcome: Outcome::Push
        }
    );
}

#[test]
fn banker_mirrors_player() {
    assert_eq!(
        resolve(Bet::new(BetSide::Banker, 40), 2, 6, 100).outcome,
        Outcome::Win
    );
    assert_eq!(resolve(Bet::new(BetSide::Banker, 40), 2, 6, 100).balance, 140);
    assert_eq!(
        resolve(Bet::new(BetSide::Player, 40), 2, 6, 100).outcome,
        Outcome::Loss
    );
    assert_eq!(
        resolve(Bet::new(BetSide::Banker, 40), 4, 4, 100).outcome,
        Outcome::Push
    );
}

#[test]
fn tie_bet_never_pushes() {
    let resolution = resolve(Bet::new(BetSide::Tie, 25), 9, 8, 100);
    assert_eq!(resolution.outcome, Outcome::Loss);
    assert_eq!(resolution.balance, 75);
}

#[test]
fn resolve_is_repeatable() {
    let bet = Bet::new(BetSide::Player, 70);
    assert_eq!(resolve(bet, 4, 1, 300), resolve(bet, 4, 1, 300));
}

#[test]
fn winner_by_score() {
    assert_eq!(winner(7, 3), Some(Side::Player));
    assert_eq!(winner(0, 9), Some(Side::Banker));
    assert_eq!(winner(6, 6), None);
}

#[test]
fn bet_side_parsing() {
    assert_eq!("1".parse::<BetSide>(), Ok(BetSide::Player));
    assert_eq!(" 2 ".parse::<BetSide>(), Ok(BetSide::Banker));
    assert_eq!("3".parse::<BetSide>(), Ok(BetSide::Tie));
    assert_eq!("4".parse::<BetSide>(), Err(InputError::UnknownBetCode(4)));
    assert_eq!("0".parse::<BetSide>(), Err(InputError::UnknownBetCode(0)));
    assert_eq!("tie".parse::<BetSide>(), Err(InputError::NotANumber));
    assert_eq!("-1".parse::<BetSide>(), Err(InputError::NotANumber));

    for side in BetSide::ALL {
        assert_eq!(BetSide::from_code(side.code()), Ok(side));
    }
}

#[test]
fn stake_parsing() {
    assert_eq!(parse_stake("50"), Ok(50));
    assert_eq!(parse_stake(" 7\n"), Ok(7));
    assert_eq!(parse_stake("abc"), Err(InputError::NotANumber));
    assert_eq!(parse_stake("-5"), Err(InputError::NotANumber));
    assert_eq!(parse_stake("2.5"), Err(InputError::NotANumber));
}

#[test]
fn card_rendering() {
    assert_eq!(render::plain_card(card(Rank::Ace, Suit::Spades)), " A♠");
    assert_eq!(render::plain_card(card(Rank::Ten, Suit::Hearts)), "10♥");

    let red = render::card(card(Rank::Queen, Suit::Diamonds));
    assert_eq!(red, "\u{1b}[47;31m Q♦ \u{1b}[0m");
    let black = render::card(card(Rank::Five, Suit::Clubs));
    assert!(black.starts_with("\u{1b}[47;30m"));

    assert_eq!(render::hand(&Hand::new(Side::Player)), "(empty)");
    assert_eq!(render::deck_overview().split("\n\n").count(), Suit::ALL.len());
}
