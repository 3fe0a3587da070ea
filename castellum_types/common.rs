use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Wood,
    Clay,
    Iron,
    Wheat,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Wood,
        ResourceKind::Clay,
        ResourceKind::Iron,
        ResourceKind::Wheat,
    ];
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Wood => "wood",
            ResourceKind::Clay => "clay",
            ResourceKind::Iron => "iron",
            ResourceKind::Wheat => "wheat",
        };
        f.write_str(name)
    }
}

/// Four resource quantities: wood, clay, iron, wheat.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSet(pub u32, pub u32, pub u32, pub u32);

impl ResourceSet {
    pub const fn new(wood: u32, clay: u32, iron: u32, wheat: u32) -> Self {
        Self(wood, clay, iron, wheat)
    }

    pub const fn splat(amount: u32) -> Self {
        Self(amount, amount, amount, amount)
    }

    pub fn total(&self) -> u32 {
        self.0 + self.1 + self.2 + self.3
    }

    pub fn wood(&self) -> u32 {
        self.0
    }
    pub fn clay(&self) -> u32 {
        self.1
    }
    pub fn iron(&self) -> u32 {
        self.2
    }
    pub fn wheat(&self) -> u32 {
        self.3
    }

    pub fn get(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Wood => self.0,
            ResourceKind::Clay => self.1,
            ResourceKind::Iron => self.2,
            ResourceKind::Wheat => self.3,
        }
    }

    pub fn set(&mut self, kind: ResourceKind, amount: u32) {
        match kind {
            ResourceKind::Wood => self.0 = amount,
            ResourceKind::Clay => self.1 = amount,
            ResourceKind::Iron => self.2 = amount,
            ResourceKind::Wheat => self.3 = amount,
        }
    }

    pub fn add(&mut self, kind: ResourceKind, amount: u32) {
        self.set(kind, self.get(kind) + amount);
    }

    /// Returns true when every component covers the given cost.
    pub fn covers(&self, cost: &ResourceSet) -> bool {
        self.0 >= cost.0 && self.1 >= cost.1 && self.2 >= cost.2 && self.3 >= cost.3
    }

    /// Componentwise subtraction, `None` if any component would go negative.
    pub fn checked_sub(&self, rhs: &ResourceSet) -> Option<ResourceSet> {
        Some(ResourceSet(
            self.0.checked_sub(rhs.0)?,
            self.1.checked_sub(rhs.1)?,
            self.2.checked_sub(rhs.2)?,
            self.3.checked_sub(rhs.3)?,
        ))
    }
}

impl core::ops::Add for ResourceSet {
    type Output = ResourceSet;

    fn add(self, rhs: Self) -> Self::Output {
        ResourceSet(
            self.0 + rhs.0,
            self.1 + rhs.1,
            self.2 + rhs.2,
            self.3 + rhs.3,
        )
    }
}

impl core::ops::AddAssign for ResourceSet {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for ResourceSet {
    fn sum<I: Iterator<Item = ResourceSet>>(iter: I) -> Self {
        iter.fold(ResourceSet::default(), |acc, r| acc + r)
    }
}
