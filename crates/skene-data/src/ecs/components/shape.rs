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
use serde::{Deserialize, Serialize};
use skene_core::math::{LinearRgba, Vec2};

/// The silhouette drawn for a [`Shape`] component.
///
/// Serializable because scene descriptions name the kind directly; there is
/// no sensible default, so definitions must always supply it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// A circle with diameter `size.x`.
    Circle,
    /// An axis-aligned rectangle with extents `size`.
    Rect,
    /// An isosceles triangle fitted into `size`, apex up.
    Triangle,
}

/// A component describing the entity's drawable silhouette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    /// The kind of silhouette.
    pub kind: ShapeKind,
    /// The extents of the silhouette.
    pub size: Vec2,
    /// The tint color.
    pub color: LinearRgba,
}

impl Shape {
    /// Creates a new `Shape` of the given kind with unit size and white tint.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            size: Vec2::ONE,
            color: LinearRgba::WHITE,
        }
    }
}

impl Component for Shape {}
