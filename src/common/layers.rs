//! Physics categories.
//!
//! Categories are plain bit flags. Contact classification compares the raw
//! values (monster sorts before projectile), so the bits are fixed:
//!
//! ```text
//!   none        0
//!   monster     1 << 0
//!   projectile  1 << 1
//!   all         u32::MAX
//! ```
//!
//! Avian only pairs two colliders when *each* side's filters include the other
//! side's membership. A body that merely waits to be reported (an empty
//! contact mask) therefore still has to name its counterparts in its avian
//! filters; see [`CategoryMasks::collision_layers`].

use std::ops::BitOr;

use avian2d::prelude::*;
use bevy::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category(u32);

impl Category {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(u32::MAX);
    pub const MONSTER: Self = Self(0b1);
    pub const PROJECTILE: Self = Self(0b10);

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True if any bit is shared.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Category {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl From<Category> for LayerMask {
    #[inline]
    fn from(category: Category) -> Self {
        LayerMask(category.bits())
    }
}

/// The three masks every gameplay body carries.
///
/// - `category`: what the body is
/// - `contact`: categories whose overlaps this body wants reported
/// - `collision`: categories this body physically pushes against
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryMasks {
    pub category: Category,
    pub contact: Category,
    pub collision: Category,
}

impl CategoryMasks {
    /// Monsters report projectile overlaps and never collide physically.
    pub const MONSTER: Self = Self {
        category: Category::MONSTER,
        contact: Category::PROJECTILE,
        collision: Category::NONE,
    };

    /// Projectiles are the passive side of a contact.
    pub const PROJECTILE: Self = Self {
        category: Category::PROJECTILE,
        contact: Category::NONE,
        collision: Category::NONE,
    };

    /// Avian layers for this body. `reported_by` lists the categories whose
    /// contact masks name this body, so avian's two-sided filter test passes.
    #[inline]
    pub fn collision_layers(self, reported_by: Category) -> CollisionLayers {
        CollisionLayers::new(self.category, self.contact | self.collision | reported_by)
    }
}
