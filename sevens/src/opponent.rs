use crate::*;

/// What the scripted opponent wants to do with its turn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OpponentMove {
    Play(Card),
    PlayWild(Card, Suit),
    Draw,
}

/// Picks the opponent's move: the first playable non-wild in hand order,
/// then a wild declaring the hand's majority suit, then a draw.
pub fn decide(game: &Game) -> OpponentMove {
    let hand = game.hand(Seat::Opponent);

    if let Some(&card) = hand
        .iter()
        .find(|&&card| !card.is_wild() && game.is_playable(card))
    {
        return OpponentMove::Play(card);
    }
    if let Some(&wild) = hand.iter().find(|&&card| card.is_wild()) {
        return OpponentMove::PlayWild(wild, majority_suit(hand));
    }
    OpponentMove::Draw
}

/// The suit most frequent among the non-wild cards; ties keep the earliest
/// suit in enumeration order.
fn majority_suit(hand: &[Card]) -> Suit {
    let mut counts = [0usize; Suit::ALL.len()];
    for card in hand {
        if !card.is_wild() {
            counts[card.suit.index()] += 1;
        }
    }

    let mut best = Suit::ALL[0];
    for suit in Suit::ALL {
        if counts[suit.index()] > counts[best.index()] {
            best = suit;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    fn facing(opponent: Vec<Card>, top: Card, active: Suit) -> Game {
        Game::from_parts_unchecked(
            Vec::new(),
            vec![card(Suit::Spades, Rank::King)],
            opponent,
            vec![top],
            active,
            Seat::Opponent,
        )
    }

    #[test]
    fn prefers_a_matching_card_over_a_wild() {
        let game = facing(
            vec![
                card(Suit::Hearts, Rank::Three),
                card(Suit::Spades, Rank::Seven),
                card(Suit::Hearts, Rank::Five),
            ],
            card(Suit::Clubs, Rank::Three),
            Suit::Clubs,
        );

        assert_eq!(decide(&game), OpponentMove::Play(card(Suit::Hearts, Rank::Three)));
    }

    #[test]
    fn hand_order_breaks_ties_between_matching_cards() {
        let game = facing(
            vec![card(Suit::Hearts, Rank::Nine), card(Suit::Diamonds, Rank::Two)],
            card(Suit::Diamonds, Rank::Nine),
            Suit::Diamonds,
        );

        assert_eq!(decide(&game), OpponentMove::Play(card(Suit::Hearts, Rank::Nine)));
    }

    #[test]
    fn falls_back_to_a_wild_with_the_majority_suit() {
        let game = facing(
            vec![
                card(Suit::Spades, Rank::Seven),
                card(Suit::Hearts, Rank::Two),
                card(Suit::Hearts, Rank::Nine),
                card(Suit::Diamonds, Rank::Four),
            ],
            card(Suit::Clubs, Rank::Five),
            Suit::Clubs,
        );

        assert_eq!(
            decide(&game),
            OpponentMove::PlayWild(card(Suit::Spades, Rank::Seven), Suit::Hearts)
        );
    }

    #[test]
    fn suit_ties_break_in_enumeration_order() {
        let game = facing(
            vec![
                card(Suit::Clubs, Rank::Seven),
                card(Suit::Hearts, Rank::Ace),
                card(Suit::Diamonds, Rank::Ace),
            ],
            card(Suit::Spades, Rank::Five),
            Suit::Spades,
        );

        assert_eq!(
            decide(&game),
            OpponentMove::PlayWild(card(Suit::Clubs, Rank::Seven), Suit::Diamonds)
        );
    }

    #[test]
    fn an_all_wild_hand_still_declares_a_suit() {
        let game = facing(
            vec![card(Suit::Clubs, Rank::Seven), card(Suit::Diamonds, Rank::Seven)],
            card(Suit::Spades, Rank::Five),
            Suit::Spades,
        );

        assert_eq!(
            decide(&game),
            OpponentMove::PlayWild(card(Suit::Clubs, Rank::Seven), Suit::Clubs)
        );
    }

    #[test]
    fn draws_when_the_hand_is_dead() {
        let game = facing(
            vec![card(Suit::Hearts, Rank::Two), card(Suit::Diamonds, Rank::Four)],
            card(Suit::Spades, Rank::Five),
            Suit::Spades,
        );

        assert_eq!(decide(&game), OpponentMove::Draw);
    }
}
