use common::games::SessionRng;
use common::games::tictactoe::{BotKind, Mark, SearchStats, Strategy};

use crate::config::GameMode;

pub enum Participant {
    Human,
    Bot(BotSeat),
}

pub struct BotSeat {
    pub kind: BotKind,
    pub strategy: Box<dyn Strategy>,
    pub total_stats: SearchStats,
    pub moves_made: usize,
}

impl BotSeat {
    pub fn new(kind: BotKind) -> Self {
        Self {
            kind,
            strategy: kind.create_strategy(),
            total_stats: SearchStats::default(),
            moves_made: 0,
        }
    }
}

impl Participant {
    pub fn bot(kind: BotKind) -> Self {
        Participant::Bot(BotSeat::new(kind))
    }

    /// Name used in announcements: "You" for the human, the bot's name otherwise.
    pub fn label(&self) -> &'static str {
        match self {
            Participant::Human => "You",
            Participant::Bot(seat) => seat.kind.display_name(),
        }
    }
}

pub struct Seat {
    pub mark: Mark,
    pub participant: Participant,
}

/// Both seats in announcement order.
pub struct Seating {
    pub seats: [Seat; 2],
}

impl Seating {
    pub fn new(first: (Mark, Participant), second: (Mark, Participant)) -> Self {
        Self {
            seats: [
                Seat {
                    mark: first.0,
                    participant: first.1,
                },
                Seat {
                    mark: second.0,
                    participant: second.1,
                },
            ],
        }
    }

    /// Random seating for `mode`. In human modes the human's mark is drawn; in
    /// bot-vs-bot the minimax bot's mark is drawn.
    pub fn for_mode(mode: GameMode, rng: &mut SessionRng) -> Self {
        let drawn = rng.random_mark();
        let other = drawn.opponent().unwrap_or(Mark::O);

        match mode.opponent_bot() {
            Some(bot) => Self::new((drawn, Participant::Human), (other, Participant::bot(bot))),
            None => Self::new(
                (drawn, Participant::bot(BotKind::Minimax)),
                (other, Participant::bot(BotKind::AlphaBeta)),
            ),
        }
    }

    pub fn participant(&self, mark: Mark) -> Option<&Participant> {
        self.seats
            .iter()
            .find(|seat| seat.mark == mark)
            .map(|seat| &seat.participant)
    }

    pub fn participant_mut(&mut self, mark: Mark) -> Option<&mut Participant> {
        self.seats
            .iter_mut()
            .find(|seat| seat.mark == mark)
            .map(|seat| &mut seat.participant)
    }
}
