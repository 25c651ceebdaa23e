//! Button press schedule
//!
//! Every object gets one press from its start time until its end plus the
//! key-up delay, cut short if the next object starts first. Objects closer
//! together than the alternate threshold swap buttons.

use super::frame::Button;
use crate::beatmap::HitObject;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Press {
    start: f64,
    release: f64,
    button: Button,
}

impl Press {
    fn holds(&self, time: f64) -> bool {
        // Zero-length presses still show up on their own frame
        self.start <= time && (time < self.release || time == self.start)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ButtonSchedule {
    presses: Vec<Press>,
    cursor: usize,
}

impl ButtonSchedule {
    pub fn new(objects: &[HitObject], settings: &Settings) -> Self {
        let mut presses = Vec::with_capacity(objects.len());
        let mut button = Button::Left;

        for (i, obj) in objects.iter().enumerate() {
            if i > 0 {
                let gap = obj.start_time - objects[i - 1].end_time;
                button = if gap < settings.alternate_threshold {
                    button.other()
                } else {
                    Button::Left
                };
            }

            let mut release = obj.end_time + settings.key_up_delay;
            if let Some(next) = objects.get(i + 1) {
                release = release.min(next.start_time);
            }

            presses.push(Press {
                start: obj.start_time,
                release: release.max(obj.start_time),
                button,
            });
        }

        Self { presses, cursor: 0 }
    }

    /// Button held at `time`. Queries must not go back in time.
    pub fn held_at(&mut self, time: f64) -> Option<Button> {
        while self.cursor < self.presses.len() && self.presses[self.cursor].release < time {
            self.cursor += 1;
        }
        self.presses[self.cursor..]
            .iter()
            .take_while(|p| p.start <= time)
            .find(|p| p.holds(time))
            .map(|p| p.button)
    }

    pub fn len(&self) -> usize {
        self.presses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }
}
