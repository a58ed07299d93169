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

/// A component carrying a human-readable display text.
///
/// Distinct from the scene-level entity name: the name keys the reference
/// tables during loading, while `Label` is plain display data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Label {
    /// The display text.
    pub text: String,
}

impl Label {
    /// Creates a new `Label` from any string-like value.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Component for Label {}
