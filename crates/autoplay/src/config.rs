#[derive(Debug, Clone, Copy)]
pub struct AutoplayConfig {
    pub seed: u64,
    pub games: u32,
    /// Starting position of the secret card in the memorize deck; `None`
    /// picks a fresh position per game from the session RNG stream.
    pub secret_position: Option<usize>,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 0xC0FFEE,
            games: 1,
            secret_position: None,
        }
    }
}
