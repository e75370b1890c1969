use crate::types::{MessageKind, TerminalState, TileId, BOARD_SIZE};

/// Plain copy of everything a renderer draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u32; BOARD_SIZE]; BOARD_SIZE],
    pub ids: [[Option<TileId>; BOARD_SIZE]; BOARD_SIZE],
    pub board_hash: u64,
    pub score: u32,
    pub best_score: u32,
    pub terminal: TerminalState,
    /// Banner on screen (can differ from `terminal`: a win banner is dismissed by play)
    pub message: Option<MessageKind>,
    pub promo_triggered: bool,
    pub animating: bool,
    pub episode_id: u32,
    pub moves: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u32; BOARD_SIZE]; BOARD_SIZE];
        self.ids = [[None; BOARD_SIZE]; BOARD_SIZE];
        self.board_hash = board_hash(&self.board);
        self.score = 0;
        self.best_score = 0;
        self.terminal = TerminalState::None;
        self.message = None;
        self.promo_triggered = false;
        self.animating = false;
        self.episode_id = 0;
        self.moves = 0;
    }

    pub fn playable(&self) -> bool {
        self.terminal != TerminalState::Lost && !self.animating
    }

    /// Changes whenever anything drawn from the snapshot changes
    pub fn fingerprint(&self) -> u64 {
        let mut h = self.board_hash;
        for v in [
            self.score,
            self.best_score,
            self.terminal as u32,
            self.message.map_or(0, |m| m as u32 + 1),
            self.promo_triggered as u32,
            self.animating as u32,
            self.episode_id,
        ] {
            h = fnv1a64(h, &v.to_le_bytes());
        }
        h
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[0u32; BOARD_SIZE]; BOARD_SIZE],
            ids: [[None; BOARD_SIZE]; BOARD_SIZE],
            board_hash: 0,
            score: 0,
            best_score: 0,
            terminal: TerminalState::None,
            message: None,
            promo_triggered: false,
            animating: false,
            episode_id: 0,
            moves: 0,
        };
        s.clear();
        s
    }
}

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x00000100000001B3;

fn fnv1a64(mut h: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

/// FNV-1a hash over the value grid, row-major, little-endian values
pub fn board_hash(board: &[[u32; BOARD_SIZE]; BOARD_SIZE]) -> u64 {
    board
        .iter()
        .flatten()
        .fold(FNV_OFFSET, |h, v| fnv1a64(h, &v.to_le_bytes()))
}
