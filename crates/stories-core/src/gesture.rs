//! Context menu and touch long-press models.
//!
//! The host owns the actual timer. [`LongPress`] only tracks which gesture
//! is live, so a timer that fires after the finger moved or lifted, or after
//! a newer press replaced it, is ignored.

use crate::config::CONTEXT_MENU_OFFSET_PX;
use crate::node::NodeId;

/// Action offered by the context menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextAction {
    Rename,
    Delete,
}

impl ContextAction {
    pub const ALL: [ContextAction; 2] = [ContextAction::Rename, ContextAction::Delete];

    pub fn label(self) -> &'static str {
        match self {
            Self::Rename => "Rename",
            Self::Delete => "Delete",
        }
    }
}

/// Open context menu anchored at a pointer position.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextMenu {
    pub target: NodeId,
    pub name: String,
    /// Pointer x in client coordinates.
    pub x: f64,
    /// Pointer y in client coordinates.
    pub y: f64,
}

impl ContextMenu {
    /// Left edge of the menu.
    pub fn left(&self) -> f64 {
        self.x + CONTEXT_MENU_OFFSET_PX
    }

    /// Top edge of the menu.
    pub fn top(&self) -> f64 {
        self.y + CONTEXT_MENU_OFFSET_PX
    }
}

/// Touch press that has not yet been held long enough, moved, or lifted.
#[derive(Clone, Debug, PartialEq)]
struct Armed {
    generation: u64,
    target: NodeId,
    x: f64,
    y: f64,
}

/// Press-and-hold tracker.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LongPress {
    generation: u64,
    armed: Option<Armed>,
}

impl LongPress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a new gesture on `target`, superseding any earlier one.
    ///
    /// Returns the generation the host must pass back to [`elapsed`](Self::elapsed).
    pub fn press(&mut self, target: NodeId, x: f64, y: f64) -> u64 {
        self.generation += 1;
        self.armed = Some(Armed {
            generation: self.generation,
            target,
            x,
            y,
        });
        self.generation
    }

    /// Touch moved or lifted before the threshold.
    pub fn cancel(&mut self) {
        self.armed = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Timer for `generation` fired.
    ///
    /// Yields the press target and touch point if that gesture is still live,
    /// then disarms, so each gesture fires at most once.
    pub fn elapsed(&mut self, generation: u64) -> Option<(NodeId, f64, f64)> {
        match &self.armed {
            Some(armed) if armed.generation == generation => {
                let armed = self.armed.take()?;
                Some((armed.target, armed.x, armed.y))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_offset() {
        let menu = ContextMenu {
            target: NodeId::from("a"),
            name: "a".to_string(),
            x: 10.0,
            y: 20.0,
        };
        assert_eq!(menu.left(), 12.0);
        assert_eq!(menu.top(), 22.0);
    }

    #[test]
    fn test_long_press_fires_once() {
        let mut press = LongPress::new();
        let generation = press.press(NodeId::from("a"), 1.0, 2.0);
        assert_eq!(
            press.elapsed(generation),
            Some((NodeId::from("a"), 1.0, 2.0))
        );
        assert_eq!(press.elapsed(generation), None);
        assert!(!press.is_armed());
    }

    #[test]
    fn test_cancel_suppresses_menu() {
        let mut press = LongPress::new();
        let generation = press.press(NodeId::from("a"), 0.0, 0.0);
        press.cancel();
        assert_eq!(press.elapsed(generation), None);
    }

    #[test]
    fn test_stale_timer_ignored_after_new_press() {
        let mut press = LongPress::new();
        let first = press.press(NodeId::from("a"), 0.0, 0.0);
        let second = press.press(NodeId::from("b"), 5.0, 5.0);
        assert_eq!(press.elapsed(first), None);
        assert!(press.is_armed());
        assert_eq!(press.elapsed(second).map(|(id, _, _)| id), Some(NodeId::from("b")));
    }

    #[test]
    fn test_action_labels() {
        let labels: Vec<_> = ContextAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["Rename", "Delete"]);
    }
}
