use std::sync::atomic::{AtomicU8, Ordering};

/// How the rendering backend processes the camera texture on each draw.
/// Flat state machine: any mode is reachable from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ProcessingMode {
    #[default]
    Original = 0,
    Grayscale = 1,
    EdgeDetection = 2,
}

impl ProcessingMode {
    fn from_u8(raw: u8) -> Self {
        match raw {
            1 => ProcessingMode::Grayscale,
            2 => ProcessingMode::EdgeDetection,
            _ => ProcessingMode::Original,
        }
    }
}

/// Shared mode cell. The UI thread writes, the render thread reads once per
/// draw tick; latest write wins and becomes visible no later than the next
/// tick. Neither side ever blocks on the other.
pub struct ModeCell(AtomicU8);

impl ModeCell {
    pub fn new(mode: ProcessingMode) -> Self {
        Self(AtomicU8::new(mode as u8))
    }

    pub fn set(&self, mode: ProcessingMode) {
        self.0.store(mode as u8, Ordering::Release);
    }

    pub fn get(&self) -> ProcessingMode {
        ProcessingMode::from_u8(self.0.load(Ordering::Acquire))
    }
}

impl Default for ModeCell {
    fn default() -> Self {
        Self::new(ProcessingMode::Original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_write_wins() {
        let cell = ModeCell::default();
        assert_eq!(cell.get(), ProcessingMode::Original);

        cell.set(ProcessingMode::Grayscale);
        cell.set(ProcessingMode::EdgeDetection);
        assert_eq!(cell.get(), ProcessingMode::EdgeDetection);
    }

    #[test]
    fn any_mode_reachable_from_any_other() {
        let cell = ModeCell::new(ProcessingMode::EdgeDetection);
        cell.set(ProcessingMode::Original);
        assert_eq!(cell.get(), ProcessingMode::Original);
        cell.set(ProcessingMode::Grayscale);
        assert_eq!(cell.get(), ProcessingMode::Grayscale);
    }
}
