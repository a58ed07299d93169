// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::ecs::Component;
use skene_core::math::Vec2;

/// A component that describes an entity's 2D position and orientation.
///
/// Coordinates are stored world-absolute at materialization time (the
/// materializer bakes parent offsets in). When the entity also carries a
/// `ParentLink`, the transform queries reinterpret this value as local to
/// the parent instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// The translation of the entity.
    pub translation: Vec2,
    /// The orientation of the entity, in radians.
    pub rotation: f32,
}

impl Position {
    /// Creates a new `Position` with a given translation and rotation.
    pub fn new(translation: Vec2, rotation: f32) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Creates a new `Position` with a given translation and no rotation.
    pub fn from_translation(translation: Vec2) -> Self {
        Self {
            translation,
            rotation: 0.0,
        }
    }

    /// Creates a new `Position` from scalar coordinates and no rotation.
    pub fn from_xy(x: f32, y: f32) -> Self {
        Self::from_translation(Vec2::new(x, y))
    }

    /// Creates the identity `Position`: the origin, facing +X.
    pub fn identity() -> Self {
        Self {
            translation: Vec2::ZERO,
            rotation: 0.0,
        }
    }
}

impl Default for Position {
    /// Returns the identity `Position`.
    fn default() -> Self {
        Self::identity()
    }
}

impl Component for Position {}
