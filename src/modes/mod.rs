#[cfg(feature = "terminal")]
pub mod console_mode;

pub mod windowed_mode;

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum Mode {
    #[default]
    Win,
    ConAscii,
    ConBlock,
}

impl Mode {
    pub fn get_name(&self) -> &'static str {
        match self {
            Mode::Win => "window",
            Mode::ConAscii => "ascii",
            Mode::ConBlock => "block",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Mode::ConAscii => Mode::ConBlock,
            Mode::ConBlock => Mode::ConAscii,
            _ => self,
        }
    }

    pub fn is_con(&self) -> bool {
        matches!(self, Mode::ConAscii | Mode::ConBlock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_modes_cycle_and_window_stays() {
        assert_eq!(Mode::ConAscii.next(), Mode::ConBlock);
        assert_eq!(Mode::ConBlock.next(), Mode::ConAscii);
        assert_eq!(Mode::Win.next(), Mode::Win);
        assert!(!Mode::default().is_con());
    }
}
