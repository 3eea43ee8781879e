#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// Output chrome level.
    ///
    /// 0 prints banner, headers and separators, 1 drops the chrome,
    /// 2 prints results only.
    pub quiet: u8,
}
