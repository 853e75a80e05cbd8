//! Start gate for sprite assets
//!
//! Each required role reports its sprite size once its image is ready. The
//! barrier releases the collected sizes exactly once, on whichever report
//! completes the set.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Role;
use crate::sanitize_size;

/// Sizes handed out when the barrier opens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadySizes {
    pub pursuer: Vec2,
    pub target: Option<Vec2>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyBarrier {
    pursuer: Option<Vec2>,
    target: Option<Vec2>,
    needs_target: bool,
    released: bool,
}

impl ReadyBarrier {
    /// Barrier waiting for the pursuer, and for the target when `needs_target`
    pub fn new(needs_target: bool) -> Self {
        Self {
            pursuer: None,
            target: None,
            needs_target,
            released: false,
        }
    }

    /// Record that `role`'s asset is ready.
    ///
    /// Returns the sizes on the call that completes the set, `None` otherwise.
    /// The first report per role wins; reports for roles the barrier does not
    /// wait on are ignored.
    pub fn arrive(&mut self, role: Role, size: Vec2) -> Option<ReadySizes> {
        if self.released {
            return None;
        }

        let slot = match role {
            Role::Pursuer => &mut self.pursuer,
            Role::Target if self.needs_target => &mut self.target,
            Role::Target => {
                log::debug!("ignoring target asset, no target in this mode");
                return None;
            }
        };
        if slot.is_none() {
            *slot = Some(sanitize_size(size));
        }

        let pursuer = self.pursuer?;
        let target = match (self.needs_target, self.target) {
            (true, None) => return None,
            (_, target) => target,
        };

        self.released = true;
        Some(ReadySizes { pursuer, target })
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Roles still outstanding
    pub fn pending(&self) -> Vec<Role> {
        let mut pending = Vec::new();
        if self.pursuer.is_none() {
            pending.push(Role::Pursuer);
        }
        if self.needs_target && self.target.is_none() {
            pending.push(Role::Target);
        }
        pending
    }
}
