use crate::model::WordEntry;
use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffled cards with a cursor that wraps in both directions.
/// Moving or reshuffling turns the card face up and hides the pronunciation.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vec<WordEntry>,
    index: usize,
    flipped: bool,
    show_pronunciation: bool,
}

impl Deck {
    pub fn new<R: Rng + ?Sized>(pool: Vec<WordEntry>, rng: &mut R) -> Self {
        let mut deck = Self {
            cards: pool,
            ..Self::default()
        };
        deck.shuffle(rng);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn current(&self) -> Option<&WordEntry> {
        self.cards.get(self.index)
    }

    /// 1-based position and deck size, for "3 / 12" labels.
    pub fn position(&self) -> Option<(usize, usize)> {
        (!self.cards.is_empty()).then(|| (self.index + 1, self.cards.len()))
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn shows_pronunciation(&self) -> bool {
        self.show_pronunciation
    }

    pub fn next(&mut self) {
        if !self.cards.is_empty() {
            self.index = (self.index + 1) % self.cards.len();
        }
        self.reset_face();
    }

    pub fn prev(&mut self) {
        if !self.cards.is_empty() {
            self.index = (self.index + self.cards.len() - 1) % self.cards.len();
        }
        self.reset_face();
    }

    pub fn flip(&mut self) {
        if !self.cards.is_empty() {
            self.flipped = !self.flipped;
        }
    }

    pub fn toggle_pronunciation(&mut self) {
        self.show_pronunciation = !self.show_pronunciation;
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.index = 0;
        self.reset_face();
    }

    fn reset_face(&mut self) {
        self.flipped = false;
        self.show_pronunciation = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Language;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cards(n: usize) -> Vec<WordEntry> {
        (0..n)
            .map(|i| WordEntry {
                id: i.to_string(),
                word: format!("w{i}"),
                meaning: format!("m{i}"),
                language: Language::English,
                target_language: Language::Bisaya,
                user_sentence: None,
                pronunciation: None,
                category: None,
                ai_sentences: None,
                created_at: 0,
            })
            .collect()
    }

    #[test]
    fn empty_deck_has_no_card() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut deck = Deck::new(vec![], &mut rng);
        assert!(deck.current().is_none());
        deck.next();
        deck.prev();
        deck.flip();
        assert!(!deck.is_flipped());
        assert_eq!(deck.position(), None);
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut deck = Deck::new(cards(3), &mut rng);
        let first = deck.current().unwrap().id.clone();
        deck.prev();
        assert_eq!(deck.position(), Some((3, 3)));
        deck.next();
        assert_eq!(deck.current().unwrap().id, first);
        deck.next();
        deck.next();
        deck.next();
        assert_eq!(deck.current().unwrap().id, first);
    }

    #[test]
    fn moving_resets_the_face() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut deck = Deck::new(cards(2), &mut rng);
        deck.flip();
        deck.toggle_pronunciation();
        assert!(deck.is_flipped() && deck.shows_pronunciation());
        deck.next();
        assert!(!deck.is_flipped());
        assert!(!deck.shows_pronunciation());
    }

    #[test]
    fn shuffle_keeps_every_card() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut deck = Deck::new(cards(6), &mut rng);
        deck.next();
        deck.shuffle(&mut rng);
        assert_eq!(deck.position(), Some((1, 6)));
        let mut ids: Vec<_> = (0..6)
            .map(|_| {
                let id = deck.current().unwrap().id.clone();
                deck.next();
                id
            })
            .collect();
        ids.sort();
        assert_eq!(ids, ["0", "1", "2", "3", "4", "5"]);
    }
}
