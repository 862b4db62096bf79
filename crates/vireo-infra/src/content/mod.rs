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

//! A disk-backed content loader decoding textures with the `image` crate.

use std::path::PathBuf;

use vireo_core::content::{ContentError, ContentLoader, Texture};

/// Resolves content names against a root directory and decodes image files
/// into texture handles.
///
/// A name without an extension resolves to `<root>/<name>.png`; a name with
/// one resolves verbatim under the root.
#[derive(Debug)]
pub struct DiskContentLoader {
    root: PathBuf,
}

impl DiskContentLoader {
    /// Creates a loader resolving names under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        let path = self.root.join(name);
        if path.extension().is_some() {
            path
        } else {
            path.with_extension("png")
        }
    }
}

impl ContentLoader for DiskContentLoader {
    fn load_texture(&mut self, name: &str) -> Result<Texture, ContentError> {
        let path = self.resolve(name);
        if !path.exists() {
            return Err(ContentError::NotFound {
                name: name.to_owned(),
            });
        }

        let decoded = image::open(&path).map_err(|error| ContentError::Decode {
            name: name.to_owned(),
            details: error.to_string(),
        })?;

        log::debug!("Loaded texture '{}' from {}", name, path.display());
        Ok(Texture {
            name: name.to_owned(),
            width: decoded.width(),
            height: decoded.height(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_report_not_found() {
        let mut loader = DiskContentLoader::new("/nonexistent-content-root");
        let result = loader.load_texture("ship");
        assert!(matches!(result, Err(ContentError::NotFound { name }) if name == "ship"));
    }

    #[test]
    fn names_without_extension_resolve_to_png() {
        let loader = DiskContentLoader::new("/content");
        assert_eq!(loader.resolve("ship"), PathBuf::from("/content/ship.png"));
        assert_eq!(
            loader.resolve("ship.jpg"),
            PathBuf::from("/content/ship.jpg")
        );
    }
}
