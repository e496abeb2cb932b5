use crate::foundation::core::Progress;

/// Smallest progress delta that counts as movement.
pub const DEFAULT_DIRECTION_THRESHOLD: f64 = 0.0001;
/// Progress below which the nav is always shown.
pub const DEFAULT_TOP_ZONE: f64 = 0.01;

/// Direction of the last significant scroll movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    /// Towards the end of the page.
    Down,
    /// Towards the top.
    Up,
}

/// Navigation bar visibility change derived from scroll direction.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct NavVisibility {
    /// Whether the nav should now be shown.
    pub visible: bool,
    /// Progress at which the change happened.
    pub progress: Progress,
    /// Direction that triggered the change.
    pub direction: ScrollDirection,
}

/// Tracks scroll direction and reports when the nav bar should toggle.
///
/// The nav is shown near the top or while scrolling up, hidden while scrolling down.
#[derive(Clone, Debug)]
pub struct DirectionTracker {
    /// Movement threshold, in progress units.
    pub threshold: f64,
    /// Progress below which the nav stays visible.
    pub top_zone: f64,
    last_progress: Option<f64>,
    last_direction: Option<ScrollDirection>,
}

impl Default for DirectionTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DIRECTION_THRESHOLD, DEFAULT_TOP_ZONE)
    }
}

impl DirectionTracker {
    /// Tracker with the given threshold and top zone.
    pub fn new(threshold: f64, top_zone: f64) -> Self {
        Self {
            threshold: threshold.max(0.0),
            top_zone,
            last_progress: None,
            last_direction: None,
        }
    }

    /// Last significant direction, if any movement was seen.
    pub fn direction(&self) -> Option<ScrollDirection> {
        self.last_direction
    }

    /// Feed one frame's progress. Returns an event only when visibility changes.
    pub fn observe(&mut self, progress: Progress) -> Option<NavVisibility> {
        let offset = progress.get();
        let prev = self.last_progress.replace(offset).unwrap_or(offset);
        let delta = offset - prev;
        let at_top = offset < self.top_zone;

        let mut event = None;
        if delta.abs() > self.threshold {
            let direction = if delta > 0.0 {
                ScrollDirection::Down
            } else {
                ScrollDirection::Up
            };
            if self.last_direction != Some(direction) {
                self.last_direction = Some(direction);
                event = Some(NavVisibility {
                    visible: at_top || direction == ScrollDirection::Up,
                    progress,
                    direction,
                });
            }
        }

        if at_top && self.last_direction != Some(ScrollDirection::Up) {
            self.last_direction = Some(ScrollDirection::Up);
            event = Some(NavVisibility {
                visible: true,
                progress,
                direction: ScrollDirection::Up,
            });
        }

        event
    }
}

#[cfg(test)]
#[path = "../../tests/unit/progress/direction.rs"]
mod tests;
