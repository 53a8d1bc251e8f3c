use super::stats::GameStats;

/// Display text derived from [`GameStats`]. The renderer only reads these
/// fields; they change when the controller asks for a refresh.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub score_text: String,
    pub high_score_text: String,
    pub level_text: String,
    pub ships_left: u32,
}

impl Scoreboard {
    pub fn new(stats: &GameStats) -> Self {
        let mut sb = Self::default();
        sb.prep_score(stats);
        sb.prep_high_score(stats);
        sb.prep_level(stats);
        sb.prep_ships(stats);
        sb
    }

    pub fn prep_score(&mut self, stats: &GameStats) {
        self.score_text = format_score(stats.score);
    }

    pub fn prep_high_score(&mut self, stats: &GameStats) {
        self.high_score_text = format_score(stats.high_score);
    }

    pub fn prep_level(&mut self, stats: &GameStats) {
        self.level_text = stats.level.to_string();
    }

    pub fn prep_ships(&mut self, stats: &GameStats) {
        self.ships_left = stats.ships_left;
    }

    pub fn check_high_score(&mut self, stats: &mut GameStats) {
        if stats.score > stats.high_score {
            stats.high_score = stats.score;
            self.prep_high_score(stats);
        }
    }
}

/// Round to the nearest ten (ties to even) and group thousands with commas.
pub fn format_score(score: u32) -> String {
    let digits = round_to_ten(score).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn round_to_ten(n: u32) -> u64 {
    let n = n as u64;
    let tens = n / 10;
    let rem = n % 10;
    let tens = match rem {
        0..=4 => tens,
        5 if tens % 2 == 0 => tens,
        _ => tens + 1,
    };
    tens * 10
}
