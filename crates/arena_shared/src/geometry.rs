// crates/arena_shared/src/geometry.rs
//! Axis-aligned rectangles in arena space (+y points down, like the screen).

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner.
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { min: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    /// Box anchored on an entity's centre position.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self { min: center - size * 0.5, size }
    }

    pub fn from_bottom_left(bottom_left: Vec2, size: Vec2) -> Self {
        Self { min: Vec2::new(bottom_left.x, bottom_left.y - size.y), size }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    pub fn translated(&self, delta: Vec2) -> Self {
        Self { min: self.min + delta, size: self.size }
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Answers "does this box hit any static obstacle?". Wall geometry is owned
/// outside the combat core; the core only asks.
pub trait CollisionOracle {
    fn collides(&self, rect: &Rect) -> bool;
}

/// No walls at all.
impl CollisionOracle for () {
    fn collides(&self, _rect: &Rect) -> bool {
        false
    }
}

/// A flat list of wall rectangles.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StaticWalls {
    pub walls: Vec<Rect>,
}

impl StaticWalls {
    pub fn new(walls: Vec<Rect>) -> Self {
        Self { walls }
    }
}

impl CollisionOracle for StaticWalls {
    fn collides(&self, rect: &Rect) -> bool {
        self.walls.iter().any(|wall| wall.overlaps(rect))
    }
}

/// Playable area; positions are clamped into it after every move.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl ArenaBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { min: Vec2::ZERO, max: Vec2::new(width, height) }
    }

    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        pos.clamp(self.min, self.max)
    }
}
