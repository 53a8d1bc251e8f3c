use super::settings::Settings;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    /// Survives `reset`, lost when the process exits.
    pub high_score: u32,
    pub game_active: bool,
}

impl GameStats {
    /// Fresh stats; the game starts on the Play screen.
    pub fn new(settings: &Settings) -> Self {
        let mut stats = Self {
            ships_left: 0,
            score: 0,
            level: 1,
            high_score: 0,
            game_active: false,
        };
        stats.reset(settings);
        stats
    }

    pub fn reset(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }
}
