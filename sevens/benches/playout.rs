use criterion::{criterion_group, criterion_main, Criterion};
use parlor_sevens::opponent::{self, OpponentMove};
use parlor_sevens::*;
use std::hint::black_box;

fn step(game: &mut Game) {
    match game.turn() {
        Seat::Player => {
            let playable = game
                .hand(Seat::Player)
                .iter()
                .copied()
                .find(|&card| game.is_playable(card));
            match playable {
                Some(card) if card.is_wild() => {
                    let _ = game.play(Seat::Player, card, Some(game.active_suit()));
                }
                Some(card) => {
                    let _ = game.play(Seat::Player, card, None);
                }
                None => {
                    let _ = game.draw(Seat::Player);
                }
            }
        }
        Seat::Opponent => match opponent::decide(game) {
            OpponentMove::Play(card) => {
                let _ = game.play(Seat::Opponent, card, None);
            }
            OpponentMove::PlayWild(card, suit) => {
                let _ = game.play(Seat::Opponent, card, Some(suit));
            }
            OpponentMove::Draw => {
                let _ = game.draw(Seat::Opponent);
            }
        },
    }
}

fn bench_dealing(c: &mut Criterion) {
    c.bench_function("deal/shuffle_and_deal", |bch| {
        let mut shuffler = RandomShuffler::new(11);
        bch.iter(|| black_box(Game::deal(&mut shuffler)))
    });
}

fn bench_playout(c: &mut Criterion) {
    c.bench_function("playout/deal_and_play_to_the_end", |bch| {
        let mut seed = 0;
        bch.iter(|| {
            seed += 1;
            let mut game = Game::deal(&mut RandomShuffler::new(seed));
            for _ in 0..400 {
                if game.is_over() {
                    break;
                }
                step(&mut game);
            }
            black_box(game.discard_len())
        })
    });
}

criterion_group!(playout, bench_dealing, bench_playout);
criterion_main!(playout);
