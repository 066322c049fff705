//! Terminal baccarat against the house.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use baccarat::{
    Bet, BetSide, BetError, FileLeaderboardStore, HandSummary, LeaderboardStore, Outcome,
    RoundError, RoundResult, Session, SessionOptions, SessionState, THIRD_CARD_THRESHOLD,
    TIE_PAYOUT, parse_stake, render,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("WELCOME TO BACCARAT! THIS IS THE DECK IN PLAY:\n");
    println!("{}\n", render::deck_overview());

    let Some(name) = prompt_name() else {
        return;
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut session = Session::new(name, SessionOptions::default(), seed);

    while session.state() != SessionState::GameOver {
        println!("Your balance: {}", session.balance());

        let Some(bet) = prompt_bet(&session) else {
            session.quit();
            break;
        };

        if let Err(err) = session.place_bet(bet) {
            println!("{err}");
            continue;
        }

        let round = match session.play_round() {
            Ok(round) => round,
            Err(err @ RoundError::Deck(_)) => {
                println!("{err}. The shoe has been rebuilt, please bet again.");
                continue;
            }
            Err(err) => {
                println!("Round error: {err}");
                session.quit();
                break;
            }
        };

        print_round(&round);

        if session.balance() == 0 {
            println!("Balance exhausted. Game over.");
        }
        let keep_playing = session.balance() > 0 && prompt_yes_no("Keep playing? (y/n): ");

        match session.end_round(keep_playing) {
            Ok(SessionState::GameOver) if session.balance() > 0 => {
                println!("Thanks for playing! Final balance: {}", session.balance());
            }
            Ok(_) => {}
            Err(err) => {
                println!("Round error: {err}");
                session.quit();
            }
        }
    }

    finish(&mut session);
}

fn finish(session: &mut Session) {
    let mut store = FileLeaderboardStore::default();
    match session.finish(&mut store) {
        Ok(score) => {
            println!(
                "{}: final balance {}, best this session {}, rounds {}",
                score.name, score.balance, score.high_water_mark, score.rounds_played
            );
        }
        Err(err) => {
            println!("Could not update the leaderboard: {err}");
            return;
        }
    }

    match store.load() {
        Ok(board) => {
            println!("\nLEADERBOARD");
            print!("{board}");
        }
        Err(err) => println!("Could not read the leaderboard: {err}"),
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn prompt_name() -> Option<String> {
    loop {
        let name = prompt_line("Enter your name: ")?;
        if name.is_empty() {
            println!("Please enter a name.");
            continue;
        }
        return Some(name);
    }
}

/// Asks for a stake, then a side. Returns `None` when input ends.
fn prompt_bet(session: &Session) -> Option<Bet> {
    let stake = loop {
        let input = prompt_line("Enter your stake: ")?;
        let stake = match parse_stake(&input) {
            Ok(stake) => stake,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        match session.validate_stake(stake) {
            Ok(()) => break stake,
            Err(BetError::InsufficientBalance { .. }) => {
                println!("Insufficient balance. Try a smaller stake.");
            }
            Err(err) => println!("{err}"),
        }
    };

    let menu = BetSide::ALL
        .iter()
        .map(|side| format!("{}-{}", side.code(), side.name()))
        .collect::<Vec<_>>()
        .join(", ");
    loop {
        let input = prompt_line(&format!("{menu}: "))?;
        match input.parse::<BetSide>() {
            Ok(side) => return Some(Bet::new(side, stake)),
            Err(err) => println!("{err}"),
        }
    }
}

fn prompt_yes_no(prompt: &str) -> bool {
    prompt_line(prompt).is_some_and(|answer| {
        matches!(answer.to_lowercase().as_str(), "y" | "yes" | "s" | "sim")
    })
}

fn print_hand(summary: &HandSummary) {
    let side = summary.hand.side().name();
    println!("\n{side} cards:");
    println!("{}", render::hand(&summary.hand));
    if let Some(card) = summary.draw.third_card {
        println!(
            "{side} drew a third card because the opening total ({}) is {THIRD_CARD_THRESHOLD} or less: {}",
            summary.draw.initial_score,
            render::card(card)
        );
    }
}

fn print_round(round: &RoundResult) {
    print_hand(&round.player);
    print_hand(&round.banker);
    println!(
        "\nPLAYER score: {} | BANKER score: {}",
        round.player.score, round.banker.score
    );

    let stake = round.bet.stake;
    match (round.bet.side, round.outcome) {
        (BetSide::Tie, Outcome::Win) => {
            println!(
                "Tie! You win {TIE_PAYOUT}x your stake: {}.",
                round.winnings()
            );
        }
        (BetSide::Tie, _) => println!("No tie. You lose {stake}."),
        (_, Outcome::Win) => println!("You win! Your stake of {stake} is paid."),
        (_, Outcome::Loss) => {
            let winner = round.winner.map_or("", |side| side.name());
            println!("You lose! {winner} wins. You lose {stake}.");
        }
        (_, Outcome::Push) => println!("Tie! Your balance is unchanged."),
    }
}
